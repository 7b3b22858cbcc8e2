//! Per-session symptom answers.
//!
//! [`SymptomAnswers`] is a total function over [`SymptomId`]: every symptom has an answer, and
//! a symptom that was never set reads as `false`. There is no "missing" state to handle.

use crate::CoreResult;
use rogo_types::SymptomId;

/// Yes/no answers for every symptom in the enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymptomAnswers {
    present: [bool; SymptomId::COUNT],
}

impl Default for SymptomAnswers {
    fn default() -> Self {
        Self::new()
    }
}

impl SymptomAnswers {
    /// All symptoms answered "no".
    pub const fn new() -> Self {
        Self {
            present: [false; SymptomId::COUNT],
        }
    }

    /// Answers with exactly the given symptoms present.
    pub fn with_present(ids: impl IntoIterator<Item = SymptomId>) -> Self {
        let mut answers = Self::new();
        for id in ids {
            answers.set(id, true);
        }
        answers
    }

    /// Build answers from loosely-typed `(id, answer)` pairs.
    ///
    /// Later pairs win over earlier ones for the same id; ids not mentioned stay `false`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Parse`] for an id outside the symptom enumeration.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, bool)>) -> CoreResult<Self> {
        let mut answers = Self::new();
        for (raw, value) in pairs {
            let id: SymptomId = raw.parse()?;
            answers.set(id, value);
        }
        Ok(answers)
    }

    pub fn set(&mut self, id: SymptomId, present: bool) {
        self.present[id.index()] = present;
    }

    pub fn is_present(&self, id: SymptomId) -> bool {
        self.present[id.index()]
    }

    /// True when every listed symptom is present. An empty list is trivially satisfied.
    pub fn all_present(&self, ids: &[SymptomId]) -> bool {
        ids.iter().all(|id| self.is_present(*id))
    }

    /// Present symptoms in enumeration order.
    pub fn present(&self) -> impl Iterator<Item = SymptomId> + '_ {
        SymptomId::ALL
            .into_iter()
            .filter(move |id| self.is_present(*id))
    }

    pub fn present_count(&self) -> usize {
        self.present.iter().filter(|p| **p).count()
    }

    /// True when `self` reports every symptom `other` reports (and possibly more).
    pub fn is_superset_of(&self, other: &SymptomAnswers) -> bool {
        other.present().all(|id| self.is_present(id))
    }
}
