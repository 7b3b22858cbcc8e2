//! Process startup shared by the `rogo` and `rogonirnoy` binaries.
//!
//! Resolution order for configuration: `.env` file, then process environment, then explicit
//! command-line overrides.

use crate::ShellResult;
use rogo_core::config::{config_from_env_values, CoreConfig};
use rogo_core::constants::{KNOWLEDGE_BASE_ENV, TOP_N_ENV};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the tracing subscriber.
///
/// Logs go to stderr so they never interleave with prompts on stdout. `RUST_LOG` replaces the
/// default of warnings from the checker crates.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rogo_core=warn,rogo_cli=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

/// Resolve [`CoreConfig`] from `.env`, the environment and command-line overrides.
pub fn resolve_config(
    top_n: Option<usize>,
    knowledge_base: Option<PathBuf>,
) -> ShellResult<CoreConfig> {
    dotenvy::dotenv().ok();

    let from_env = config_from_env_values(
        std::env::var(TOP_N_ENV).ok(),
        std::env::var(KNOWLEDGE_BASE_ENV).ok(),
    )?;
    let config = from_env.with_overrides(top_n, knowledge_base)?;

    tracing::debug!(
        top_n = config.top_n(),
        knowledge_base = ?config.knowledge_base_path(),
        "resolved configuration"
    );
    Ok(config)
}
