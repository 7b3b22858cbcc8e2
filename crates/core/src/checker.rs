//! Session-level entry point combining scoring, ranking and red-flag detection.

use crate::answers::SymptomAnswers;
use crate::knowledge::{KnowledgeBase, RedFlagRule};
use crate::ranker::{rank, Ranking};
use crate::red_flags::detect;
use crate::scorer::{score, ScoreResult};
use serde::Serialize;

/// Everything one evaluation produces.
///
/// Owned by the caller and discarded after display or reporting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Assessment<'kb> {
    #[serde(skip)]
    pub scores: ScoreResult<'kb>,
    pub ranking: Ranking<'kb>,
    pub red_flags: Vec<&'kb RedFlagRule>,
}

impl Assessment<'_> {
    /// True when at least one red-flag combination is present.
    pub fn urgent(&self) -> bool {
        !self.red_flags.is_empty()
    }
}

/// Stateless evaluator bound to one knowledge base.
///
/// Cheap to copy; holds no per-session state, so one checker can serve any number of
/// sessions, concurrently or not.
#[derive(Clone, Copy, Debug)]
pub struct SymptomChecker<'kb> {
    kb: &'kb KnowledgeBase,
    top_n: usize,
}

impl<'kb> SymptomChecker<'kb> {
    pub fn new(kb: &'kb KnowledgeBase, top_n: usize) -> Self {
        Self { kb, top_n }
    }

    pub fn knowledge_base(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    /// Score, rank and check red flags for one set of answers.
    pub fn evaluate(&self, answers: &SymptomAnswers) -> Assessment<'kb> {
        let scores = score(self.kb, answers);
        let ranking = rank(&scores, self.top_n);
        let red_flags = detect(self.kb, answers);

        tracing::debug!(
            reported = answers.present_count(),
            shortlisted = ranking.len(),
            red_flags = red_flags.len(),
            "evaluated symptom answers"
        );

        Assessment {
            scores,
            ranking,
            red_flags,
        }
    }
}
