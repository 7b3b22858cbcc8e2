//! # Rogonirnoy Core
//!
//! Deterministic scoring engine for the Rogonirnoy symptom checker.
//!
//! This crate contains pure computation over a validated, immutable knowledge base:
//! - [`knowledge`]: load and validate the symptom catalog, condition profiles and red flags
//! - [`scorer`]: percentage of each profile's weight matched by the answers
//! - [`ranker`]: top-N shortlist with severity and advice
//! - [`red_flags`]: urgent symptom combinations, independent of scoring
//! - [`checker`]: one call running all three for a session
//!
//! **No I/O concerns**: prompting, report files and the menu live in `rogo-cli`. This is
//! weighted matching for education, not a diagnostic system.

pub mod answers;
pub mod checker;
pub mod config;
pub mod constants;
pub mod error;
pub mod knowledge;
pub mod ranker;
pub mod red_flags;
pub mod scorer;

pub use answers::SymptomAnswers;
pub use checker::{Assessment, SymptomChecker};
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use knowledge::{ConditionProfile, KnowledgeBase, RedFlagRule, SymptomEntry};
pub use ranker::{RankedCondition, Ranking};
pub use scorer::{ConditionScore, ScoreResult};

pub use rogo_types::{Severity, SymptomId};
