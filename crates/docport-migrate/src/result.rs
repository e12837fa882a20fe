//! Result types for migration runs.

use std::path::PathBuf;

/// Outcome of one migration run.
#[derive(Debug, Clone, Default)]
pub struct MigrateResult {
    /// Number of markdown files examined.
    pub scanned: usize,
    /// Files whose content changed, in processing order.
    pub converted: Vec<PathBuf>,
}

impl MigrateResult {
    /// Whether the run left every file untouched.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.converted.is_empty()
    }
}
