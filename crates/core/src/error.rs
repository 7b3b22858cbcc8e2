use rogo_types::SymptomId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read knowledge base file {}: {source}", .path.display())]
    KnowledgeBaseRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("knowledge base error: {0}")]
    KnowledgeBase(#[from] rogo_kb::KbError),

    #[error("symptom {0} is listed more than once in the catalog")]
    DuplicateCatalogEntry(SymptomId),
    #[error("symptom {0} has no question in the catalog")]
    MissingQuestion(SymptomId),
    #[error("{context} references symptom {symptom}, which is not in the catalog")]
    UncataloguedSymptom { context: String, symptom: SymptomId },

    #[error("condition {0:?} is defined more than once")]
    DuplicateCondition(String),
    #[error("condition {0:?} has no symptom weights")]
    EmptyProfile(String),
    #[error("condition {condition:?} weights symptom {symptom} more than once")]
    DuplicateWeight { condition: String, symptom: SymptomId },
    #[error("condition {condition:?} has invalid weight {weight} for symptom {symptom}")]
    InvalidWeight {
        condition: String,
        symptom: SymptomId,
        weight: f64,
    },
    #[error("condition {0:?} has weights whose total is not a finite number")]
    WeightOverflow(String),

    #[error("red flag #{index} needs at least 2 symptoms, found {len}")]
    RedFlagTooSmall { index: usize, len: usize },
    #[error("red flag #{index} lists symptom {symptom} more than once")]
    RedFlagDuplicate { index: usize, symptom: SymptomId },

    #[error("{0}")]
    Parse(#[from] rogo_types::ParseError),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
