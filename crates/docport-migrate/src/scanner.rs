//! Markdown discovery by filesystem walking.
//!
//! The scanner only identifies candidate files; reading and rewriting
//! them is the executor's job.

use std::fs;
use std::path::{Path, PathBuf};

/// File extension of eligible documents.
const MARKDOWN_EXT: &str = "md";

/// Collect all markdown files under `root`, recursively.
///
/// Hidden files and directories are skipped. Results are sorted so
/// processing order (and reporting) is deterministic. A missing root
/// yields an empty list.
pub(crate) fn scan(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if root.exists() {
        scan_directory(root, &mut files);
    }
    files.sort();
    files
}

/// Scan one directory level and recurse into subdirectories.
fn scan_directory(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            scan_directory(&path, files);
        } else if path.extension().is_some_and(|e| e == MARKDOWN_EXT) {
            files.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_finds_md_files_recursively() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("guide.md"), "# Guide").unwrap();

        let nested = temp.path().join("section/sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("page.md"), "# Page").unwrap();

        let files = scan(temp.path());

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("guide.md"));
        assert!(files[1].ends_with("section/sub/page.md"));
    }

    #[test]
    fn test_scan_ignores_other_extensions() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("notes.md"), "x").unwrap();
        fs::write(temp.path().join("image.png"), "x").unwrap();
        fs::write(temp.path().join("markdown"), "x").unwrap();

        let files = scan(temp.path());

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("notes.md"));
    }

    #[test]
    fn test_scan_skips_hidden_entries() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(".draft.md"), "x").unwrap();
        let hidden_dir = temp.path().join(".git");
        fs::create_dir(&hidden_dir).unwrap();
        fs::write(hidden_dir.join("inside.md"), "x").unwrap();
        fs::write(temp.path().join("visible.md"), "x").unwrap();

        let files = scan(temp.path());

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("visible.md"));
    }

    #[test]
    fn test_scan_missing_root() {
        assert!(scan(Path::new("/nonexistent/docs")).is_empty());
    }

    #[test]
    fn test_scan_sorted() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("b.md"), "x").unwrap();
        fs::write(temp.path().join("a.md"), "x").unwrap();
        fs::write(temp.path().join("c.md"), "x").unwrap();

        let files = scan(temp.path());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["a.md", "b.md", "c.md"]);
    }
}
