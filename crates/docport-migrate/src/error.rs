//! Migration error types.

use std::path::PathBuf;

/// Errors from running a migration.
///
/// I/O failures are fatal and unrecovered: the output is regenerable
/// from the input, so a failed run is simply re-run after the cause is
/// fixed. There is no partial-write protection.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
