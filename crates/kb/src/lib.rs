//! Knowledge-base wire/boundary support.
//!
//! This crate translates between the on-disk YAML knowledge-base format and plain domain
//! carriers that `rogo-core` validates and scores against:
//! - strict YAML wire structs (`deny_unknown_fields`)
//! - translation of string identifiers into [`SymptomId`] and [`Severity`]
//! - the built-in knowledge base shipped with the checker
//!
//! Cross-reference rules (catalog coverage, duplicate weights, red-flag sizes) are **not**
//! checked here. They belong to `rogo-core`, which refuses to start on a violation.

pub mod knowledge_base;

pub use knowledge_base::{
    ConditionData, KnowledgeBaseData, KnowledgeBaseFile, RedFlagData, SymptomEntry,
};

pub use rogo_types::{NonEmptyText, Severity, SymptomId};

/// The knowledge base compiled into every binary.
pub const BUILTIN_KNOWLEDGE_BASE_YAML: &str = include_str!("../data/knowledge_base.yaml");

/// Errors returned by the `rogo-kb` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum KbError {
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("unknown symptom id {id:?} at {location}")]
    UnknownSymptom { location: String, id: String },

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`KbError`].
pub type KbResult<T> = Result<T, KbError>;
