use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// Compile `--exclude` patterns into a matcher. Patterns match against
/// full paths and bare file names.
pub fn build_globset(patterns: &[String]) -> Result<GlobSet, Box<dyn std::error::Error>> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| format!("invalid exclude {pattern:?}: {e}"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Collect `.json` record files under a directory. Respects `.gitignore`,
/// skips `.git`, and returns paths sorted for deterministic board order.
pub fn record_files(path: &Path, excludes: &GlobSet) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(path)
        .hidden(false)
        .follow_links(false)
        .filter_entry(|entry| {
            !(entry.file_type().is_some_and(|ft| ft.is_dir()) && entry.file_name() == ".git")
        })
        .build();

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let file_path = entry.path();
        if file_path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        if excludes.is_match(file_path)
            || file_path
                .file_name()
                .is_some_and(|name| excludes.is_match(Path::new(name)))
        {
            continue;
        }
        files.push(file_path.to_path_buf());
    }
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_json_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), "{}").unwrap();
        std::fs::write(dir.path().join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("c.txt"), "").unwrap();
        let files = record_files(dir.path(), &build_globset(&[]).unwrap());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn exclude_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("keep.json"), "{}").unwrap();
        std::fs::write(dir.path().join("old_class.json"), "{}").unwrap();
        let set = build_globset(&["old_*.json".to_string()]).unwrap();
        let files = record_files(dir.path(), &set);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.json"));
    }

    #[test]
    fn invalid_glob_is_an_error() {
        let err = build_globset(&["[".to_string()]).unwrap_err();
        assert!(
            err.to_string().contains("invalid exclude"),
            "should name the bad pattern, got: {err}"
        );
    }
}
