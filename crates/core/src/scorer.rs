//! Percentage scoring of every condition profile.
//!
//! For a profile `p` and answers `a`:
//!
//! ```text
//! matched  = Σ w[s]          for s in p where a[s]
//! possible = Σ max(w[s], 0)  for s in p   (1.0 when zero)
//! score    = clamp(matched / possible * 100, 0, 100)
//! ```
//!
//! The clamp only matters for profiles carrying negative weights.

use crate::answers::SymptomAnswers;
use crate::constants::DEGENERATE_POSSIBLE_WEIGHT;
use crate::knowledge::{ConditionProfile, KnowledgeBase};

/// Percentage for one condition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConditionScore<'kb> {
    pub profile: &'kb ConditionProfile,
    pub percentage: f64,
}

impl ConditionScore<'_> {
    pub fn name(&self) -> &str {
        self.profile.name()
    }
}

/// Scores for every condition of a knowledge base, in knowledge-base order.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreResult<'kb> {
    scores: Vec<ConditionScore<'kb>>,
}

impl<'kb> ScoreResult<'kb> {
    pub fn iter(&self) -> impl Iterator<Item = &ConditionScore<'kb>> {
        self.scores.iter()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Percentage for the named condition, if it exists.
    pub fn percentage(&self, condition: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.name() == condition)
            .map(|s| s.percentage)
    }
}

impl<'kb> IntoIterator for ScoreResult<'kb> {
    type Item = ConditionScore<'kb>;
    type IntoIter = std::vec::IntoIter<ConditionScore<'kb>>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.into_iter()
    }
}

/// Score a single profile.
pub fn score_profile(profile: &ConditionProfile, answers: &SymptomAnswers) -> f64 {
    // Folding from +0.0 keeps an empty match from coming out as -0.0.
    let matched = profile
        .weights()
        .iter()
        .filter(|(id, _)| answers.is_present(*id))
        .fold(0.0_f64, |acc, (_, w)| acc + w);

    let possible = if profile.possible_weight() > 0.0 {
        profile.possible_weight()
    } else {
        DEGENERATE_POSSIBLE_WEIGHT
    };

    (matched / possible * 100.0).clamp(0.0, 100.0)
}

/// Score every condition in `kb`, including those at 0%.
pub fn score<'kb>(kb: &'kb KnowledgeBase, answers: &SymptomAnswers) -> ScoreResult<'kb> {
    let scores = kb
        .conditions()
        .iter()
        .map(|profile| ConditionScore {
            profile,
            percentage: score_profile(profile, answers),
        })
        .collect();

    ScoreResult { scores }
}
