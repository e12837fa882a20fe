//! CLI error types.

use docport_config::ConfigError;
use docport_migrate::MigrateError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Migrate(#[from] MigrateError),

    #[error("{0} file(s) still contain unconverted markup")]
    Pending(usize),
}
