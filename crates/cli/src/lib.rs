//! Console front end for the Rogonirnoy symptom checker.
//!
//! Thin I/O around `rogo-core`:
//! - [`prompt`]: yes/no and integer prompts that re-ask on invalid input
//! - [`report`]: console results block and the saved text report
//! - [`menu`]: the interactive menu loop
//! - [`startup`]: logging and configuration shared by both binaries

pub mod menu;
pub mod prompt;
pub mod report;
pub mod startup;
pub mod text;

pub use menu::Shell;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write report {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Core(#[from] rogo_core::CoreError),
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ShellResult<T> = std::result::Result<T, ShellError>;
