//! CLI command implementations.

mod check;
mod convert;

pub(crate) use check::CheckArgs;
pub(crate) use convert::ConvertArgs;

use std::path::Path;

use docport_config::Config;

use crate::error::CliError;

/// Load configuration from an explicit path or by upward discovery from
/// the current directory.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config, CliError> {
    let config = match explicit {
        Some(path) => Config::load_file(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
            Config::load(&cwd)?
        }
    };
    tracing::debug!(source_dir = %config.source_dir().display(), "Using docs root");
    Ok(config)
}
