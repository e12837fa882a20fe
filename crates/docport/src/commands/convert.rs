//! `docport convert` command.

use std::path::PathBuf;

use clap::Args;
use docport_migrate::Migrator;

use crate::error::CliError;
use crate::output::Output;

use super::load_config;

/// Arguments for the `convert` command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Path to docport.toml (discovered from the current directory
    /// upward when omitted).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable INFO-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConvertArgs {
    /// Run the migration and report converted files.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = load_config(self.config.as_deref())?;
        let result = Migrator::new(config.source_dir()).run()?;

        for path in &result.converted {
            output.info(&format!("Converted {}", path.display()));
        }

        if result.is_unchanged() {
            output.success(&format!(
                "Nothing to convert ({} file(s) scanned)",
                result.scanned
            ));
        } else {
            output.success(&format!(
                "Converted {} of {} file(s)",
                result.converted.len(),
                result.scanned
            ));
        }
        Ok(())
    }
}
