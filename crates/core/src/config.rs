//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the checker. Sessions
//! never read process-wide environment variables, which keeps evaluation a pure function of the
//! answers and the loaded knowledge base.
//!
//! The `*_from_env_value` helpers take the raw `Option<String>` rather than reading the
//! environment themselves so they can be tested without mutating process state.

use crate::constants::DEFAULT_TOP_N;
use crate::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    top_n: usize,
    knowledge_base_path: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            knowledge_base_path: None,
        }
    }
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `knowledge_base_path` of `None` selects the built-in knowledge base.
    pub fn new(top_n: usize, knowledge_base_path: Option<PathBuf>) -> CoreResult<Self> {
        if top_n == 0 {
            return Err(CoreError::InvalidInput("top_n must be at least 1".into()));
        }

        Ok(Self {
            top_n,
            knowledge_base_path,
        })
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn knowledge_base_path(&self) -> Option<&Path> {
        self.knowledge_base_path.as_deref()
    }

    /// Returns a copy with command-line overrides applied on top.
    pub fn with_overrides(
        &self,
        top_n: Option<usize>,
        knowledge_base_path: Option<PathBuf>,
    ) -> CoreResult<Self> {
        Self::new(
            top_n.unwrap_or(self.top_n),
            knowledge_base_path.or_else(|| self.knowledge_base_path.clone()),
        )
    }
}

/// Parse the ranking length from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_TOP_N`].
pub fn top_n_from_env_value(value: Option<String>) -> CoreResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(raw) = value else {
        return Ok(DEFAULT_TOP_N);
    };

    match raw.parse::<usize>() {
        Ok(0) => Err(CoreError::InvalidInput("ROGO_TOP_N must be at least 1".into())),
        Ok(n) => Ok(n),
        Err(_) => Err(CoreError::InvalidInput(format!(
            "ROGO_TOP_N must be a positive integer, got {raw:?}"
        ))),
    }
}

/// Resolve the knowledge-base override path from an optional string value.
///
/// Empty values mean "use the built-in knowledge base". A non-empty value must name an
/// existing file.
pub fn knowledge_base_path_from_env_value(value: Option<String>) -> CoreResult<Option<PathBuf>> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(raw) = value else {
        return Ok(None);
    };

    let path = PathBuf::from(raw);
    if !path.is_file() {
        return Err(CoreError::InvalidInput(format!(
            "ROGO_KNOWLEDGE_BASE does not name a file: {}",
            path.display()
        )));
    }

    Ok(Some(path))
}

/// Build a [`CoreConfig`] from raw environment values.
pub fn config_from_env_values(
    top_n: Option<String>,
    knowledge_base: Option<String>,
) -> CoreResult<CoreConfig> {
    CoreConfig::new(
        top_n_from_env_value(top_n)?,
        knowledge_base_path_from_env_value(knowledge_base)?,
    )
}
