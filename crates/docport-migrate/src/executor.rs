//! Migration executor.

use std::fs;
use std::path::PathBuf;

use crate::error::MigrateError;
use crate::result::MigrateResult;
use crate::{pipeline, scanner};

/// Runs the migration over a documentation tree.
///
/// Each file goes through read, transform, compare, write: files whose
/// transformed content is byte-identical to the original are never
/// rewritten. Files are independent of one another; no state is carried
/// between them.
///
/// # Example
///
/// ```no_run
/// use docport_migrate::Migrator;
///
/// let result = Migrator::new("docs").run()?;
/// for path in &result.converted {
///     println!("Converted {}", path.display());
/// }
/// # Ok::<(), docport_migrate::MigrateError>(())
/// ```
#[derive(Debug)]
pub struct Migrator {
    source_dir: PathBuf,
    dry_run: bool,
}

impl Migrator {
    /// Create a migrator over the given docs root.
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dry_run: false,
        }
    }

    /// Report what would change without writing anything.
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Walk the tree and rewrite every file whose conversion differs.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError`] on the first read or write failure.
    /// Failures are fatal and unrecovered (spec: output is regenerable,
    /// runs are simply repeated).
    pub fn run(&self) -> Result<MigrateResult, MigrateError> {
        let files = scanner::scan(&self.source_dir);
        let mut result = MigrateResult {
            scanned: files.len(),
            converted: Vec::new(),
        };

        for path in files {
            let original = fs::read_to_string(&path).map_err(|source| MigrateError::Read {
                path: path.clone(),
                source,
            })?;

            let output = pipeline::apply(&original);
            if output == original {
                tracing::debug!(path = %path.display(), "Unchanged");
                continue;
            }

            if !self.dry_run {
                fs::write(&path, &output).map_err(|source| MigrateError::Write {
                    path: path.clone(),
                    source,
                })?;
            }
            tracing::info!(path = %path.display(), "Converted");
            result.converted.push(path);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_converts_files_in_place() {
        let temp = tempfile::tempdir().unwrap();
        let page = write(temp.path(), "page.md", "!!! note\n    body\nend\n");

        let result = Migrator::new(temp.path()).run().unwrap();

        assert_eq!(result.scanned, 1);
        assert_eq!(result.converted, vec![page.clone()]);
        assert_eq!(
            fs::read_to_string(&page).unwrap(),
            ":::note\nbody\n:::\nend\n"
        );
    }

    #[test]
    fn test_unchanged_file_not_reported() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), "plain.md", "# Nothing to do\n");

        let result = Migrator::new(temp.path()).run().unwrap();

        assert_eq!(result.scanned, 1);
        assert!(result.is_unchanged());
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), "page.md", "!!! tip \"T\"\n    body\nend\n");

        let first = Migrator::new(temp.path()).run().unwrap();
        let second = Migrator::new(temp.path()).run().unwrap();

        assert_eq!(first.converted.len(), 1);
        assert!(second.is_unchanged());
    }

    #[test]
    fn test_dry_run_leaves_files_untouched() {
        let temp = tempfile::tempdir().unwrap();
        let content = "!!! note\n    body\nend\n";
        let page = write(temp.path(), "page.md", content);

        let result = Migrator::new(temp.path()).dry_run(true).run().unwrap();

        assert_eq!(result.converted, vec![page.clone()]);
        assert_eq!(fs::read_to_string(&page).unwrap(), content);
    }

    #[test]
    fn test_missing_root_is_empty_run() {
        let result = Migrator::new("/nonexistent/docs").run().unwrap();

        assert_eq!(result.scanned, 0);
        assert!(result.is_unchanged());
    }

    #[test]
    fn test_multiple_files_processed_independently() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), "a.md", "!!! note\n    a\n");
        write(temp.path(), "b.md", "plain\n");
        let nested = temp.path().join("sub");
        fs::create_dir(&nested).unwrap();
        write(&nested, "c.md", "=== \"Tab\"\n    c\n");

        let result = Migrator::new(temp.path()).run().unwrap();

        assert_eq!(result.scanned, 3);
        assert_eq!(result.converted.len(), 2);
    }
}
