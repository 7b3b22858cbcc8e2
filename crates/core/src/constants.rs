//! Constants used throughout the core crate.

/// Number of conditions shown in a ranking when nothing else is configured.
pub const DEFAULT_TOP_N: usize = 3;

/// Environment variable naming an alternative knowledge-base YAML file.
pub const KNOWLEDGE_BASE_ENV: &str = "ROGO_KNOWLEDGE_BASE";

/// Environment variable overriding the ranking length.
pub const TOP_N_ENV: &str = "ROGO_TOP_N";

/// Denominator used for a profile whose possible weight is zero.
pub const DEGENERATE_POSSIBLE_WEIGHT: f64 = 1.0;
