//! Top-N shortlist of conditions with their advice.
//!
//! Ordering is percentage descending, then condition name ascending. The name tie-break makes
//! the shortlist independent of knowledge-base order.

use crate::scorer::{ConditionScore, ScoreResult};
use rogo_types::Severity;
use serde::Serialize;
use std::cmp::Ordering;

/// One shortlisted condition, with severity and advice copied from its profile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RankedCondition<'kb> {
    pub name: &'kb str,
    pub percentage: f64,
    pub severity: Severity,
    pub advice: &'kb str,
}

/// Ordered shortlist, at most `top_n` long.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking<'kb> {
    entries: Vec<RankedCondition<'kb>>,
}

impl<'kb> Ranking<'kb> {
    pub fn entries(&self) -> &[RankedCondition<'kb>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedCondition<'kb>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top(&self) -> Option<&RankedCondition<'kb>> {
        self.entries.first()
    }
}

/// Comparator used for ranking: higher percentage first, then name A to Z.
pub fn compare_scores(a: &ConditionScore<'_>, b: &ConditionScore<'_>) -> Ordering {
    b.percentage
        .total_cmp(&a.percentage)
        .then_with(|| a.name().cmp(b.name()))
}

/// Shortlist the `top_n` best-scoring conditions.
///
/// Asking for more conditions than exist returns all of them; `top_n == 0` returns an empty
/// ranking.
pub fn rank<'kb>(scores: &ScoreResult<'kb>, top_n: usize) -> Ranking<'kb> {
    let mut ordered: Vec<&ConditionScore<'kb>> = scores.iter().collect();
    ordered.sort_by(|a, b| compare_scores(a, b));

    let entries = ordered
        .into_iter()
        .take(top_n)
        .map(|s| RankedCondition {
            name: s.profile.name(),
            percentage: s.percentage,
            severity: s.profile.severity(),
            advice: s.profile.advice(),
        })
        .collect();

    Ranking { entries }
}
