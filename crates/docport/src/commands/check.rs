//! `docport check` command.

use std::path::PathBuf;

use clap::Args;
use docport_migrate::Migrator;

use crate::error::CliError;
use crate::output::Output;

use super::load_config;

/// Arguments for the `check` command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to docport.toml (discovered from the current directory
    /// upward when omitted).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable INFO-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Dry-run the migration; fail when any file would change.
    ///
    /// Intended for CI: a non-zero exit means the tree still contains
    /// unconverted markup.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = load_config(self.config.as_deref())?;
        let result = Migrator::new(config.source_dir()).dry_run(true).run()?;

        for path in &result.converted {
            output.info(&format!("Would convert {}", path.display()));
        }

        if result.is_unchanged() {
            output.success(&format!(
                "All {} file(s) already converted",
                result.scanned
            ));
            Ok(())
        } else {
            Err(CliError::Pending(result.converted.len()))
        }
    }
}
