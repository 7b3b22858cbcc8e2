use rogo_cli::Shell;
use rogo_cli::report::DEFAULT_REPORT_FILENAME;
use rogo_cli::startup::{init_tracing, resolve_config};
use rogo_core::{SymptomChecker, knowledge};
use std::path::PathBuf;

/// Main entry point for Rogonirnoy
///
/// Starts the interactive menu on stdin/stdout. Reports are saved to
/// `diagnosis_report.txt` in the working directory.
///
/// # Environment Variables
/// - `ROGO_KNOWLEDGE_BASE`: YAML knowledge base to use instead of the built-in one
/// - `ROGO_TOP_N`: number of conditions to shortlist (default: 3)
/// - `RUST_LOG`: log filter (logs are written to stderr)
///
/// # Returns
/// * `Ok(())` - When the user exits or input ends
/// * `Err(anyhow::Error)` - If configuration, the knowledge base or terminal I/O fails
fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = resolve_config(None, None)?;
    let kb = knowledge::load(&config)?;
    tracing::info!(
        conditions = kb.conditions().len(),
        top_n = config.top_n(),
        "++ Starting Rogonirnoy"
    );

    let checker = SymptomChecker::new(&kb, config.top_n());
    let stdin = std::io::stdin();
    Shell::new(
        checker,
        stdin.lock(),
        std::io::stdout(),
        PathBuf::from(DEFAULT_REPORT_FILENAME),
    )
    .run()?;

    Ok(())
}
