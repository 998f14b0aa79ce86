use crate::{
    errors::{FileOperation, IoError},
    utils::normalize_path,
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use walkdir::WalkDir;

/// Report written to the current working directory when no output path is
/// given on the command line.
pub const DEFAULT_REPORT_FILE: &str = "directory_structure.md";

const INDENT_UNIT: &str = "│   ";

#[derive(Debug, Error, Diagnostic)]
pub enum TreeError {
    #[error("I/O error within tree domain")]
    #[diagnostic(code(blogforge::tree::io))]
    Io(#[from] IoError),
}

/// Renders the directory rooted at `start` as an indented text diagram.
///
/// Only the immediate children of `start` are listed per call; deeper levels
/// are reached through the explicit recursion below, which is what lets the
/// exclusion filter run at every depth. Subdirectories whose joined path
/// matches a member of `exclude` (after both sides are normalized) are
/// dropped before the recursive call is made, so an excluded subtree is
/// never visited at all.
///
/// Line format, one entry per line:
/// - depth 0 header: `{name}/`
/// - deeper headers: one indent unit per depth level, then `├── {name}/`
/// - files, sorted lexicographically and listed before subdirectories:
///   the directory's indent, then `│   └── {name} ` (trailing space kept
///   for report compatibility)
///
/// The output depends only on the filesystem snapshot, so re-running over an
/// unchanged tree is byte-identical.
///
/// # Errors
///
/// Returns a [`TreeError`] if `start` does not exist or a directory cannot
/// be read; no partial diagram is returned.
pub fn generate_tree(start: &Path, exclude: &[PathBuf], depth: usize) -> Result<String, TreeError> {
    let mut files: Vec<String> = Vec::new();
    let mut dirs: Vec<(String, PathBuf)> = Vec::new();

    for entry in WalkDir::new(start).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|error| {
            let path = error.path().unwrap_or(start).to_path_buf();

            IoError::new(FileOperation::ReadDir, path, error.into())
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.file_type().is_dir() {
            dirs.push((name, entry.path().to_path_buf()));
        } else {
            files.push(name);
        }
    }

    // Exclusion is by whole-path equality, not pattern matching. Normalizing
    // both sides makes `./proj/sub` and `proj/sub/` compare equal.
    let excluded: Vec<PathBuf> = exclude.iter().map(|path| normalize_path(path)).collect();
    dirs.retain(|(_, path)| !excluded.contains(&normalize_path(path)));

    files.sort();
    dirs.sort_by(|a, b| a.0.cmp(&b.0));

    let name = start
        .file_name()
        .map(|os| os.to_string_lossy().into_owned())
        .unwrap_or_else(|| start.display().to_string());

    let indent = INDENT_UNIT.repeat(depth);

    let mut diagram = String::new();

    if depth == 0 {
        diagram.push_str(&format!("{}/\n", name));
    } else {
        diagram.push_str(&format!("{}├── {}/\n", indent, name));
    }

    for file in &files {
        diagram.push_str(&format!("{}│   └── {} \n", indent, file));
    }

    for (_, path) in &dirs {
        diagram.push_str(&generate_tree(path, exclude, depth + 1)?);
    }

    Ok(diagram)
}

/// Overwrites (or creates) the report file at `destination` with `content`.
///
/// # Errors
///
/// Returns a [`TreeError`] if the write fails due to I/O issues.
pub fn save_report(content: &str, destination: &Path) -> Result<(), TreeError> {
    fs::write(destination, content)
        .map_err(|error| IoError::new(FileOperation::Write, destination.to_path_buf(), error))?;

    println!("{} {}", "saved".green(), destination.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // `proj/` with a file and one subdirectory holding another file.
    fn fixture() -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let proj = tmp.path().join("proj");

        fs::create_dir(&proj).unwrap();
        fs::write(proj.join("x.txt"), "").unwrap();
        fs::create_dir(proj.join("sub")).unwrap();
        fs::write(proj.join("sub").join("y.txt"), "").unwrap();

        (tmp, proj)
    }

    #[test]
    fn renders_files_then_subdirectories_with_depth_indentation() {
        let (_tmp, proj) = fixture();

        let diagram = generate_tree(&proj, &[], 0).unwrap();

        assert_eq!(
            diagram,
            "proj/\n\
             │   └── x.txt \n\
             │   ├── sub/\n\
             │   │   └── y.txt \n"
        );
    }

    #[test]
    fn excluded_subtree_is_never_listed_nor_visited() {
        let (_tmp, proj) = fixture();
        let exclude = vec![proj.join("sub")];

        let diagram = generate_tree(&proj, &exclude, 0).unwrap();

        assert_eq!(diagram, "proj/\n│   └── x.txt \n");
        assert!(!diagram.contains("sub"));
        assert!(!diagram.contains("y.txt"));
    }

    #[test]
    fn exclusion_matching_survives_dot_segments() {
        let (_tmp, proj) = fixture();
        let exclude = vec![proj.join(".").join("sub")];

        let diagram = generate_tree(&proj, &exclude, 0).unwrap();

        assert!(!diagram.contains("y.txt"));
    }

    #[test]
    fn exclusion_applies_below_the_top_level() {
        let (_tmp, proj) = fixture();
        fs::create_dir(proj.join("sub").join("nested")).unwrap();
        fs::write(proj.join("sub").join("nested").join("z.txt"), "").unwrap();
        let exclude = vec![proj.join("sub").join("nested")];

        let diagram = generate_tree(&proj, &exclude, 0).unwrap();

        assert!(diagram.contains("sub"));
        assert!(diagram.contains("y.txt"));
        assert!(!diagram.contains("nested"));
        assert!(!diagram.contains("z.txt"));
    }

    #[test]
    fn files_within_a_directory_sort_lexicographically() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("styles");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("b.scss"), "").unwrap();
        fs::write(dir.join("a.scss"), "").unwrap();

        let diagram = generate_tree(&dir, &[], 0).unwrap();

        let a = diagram.find("a.scss").unwrap();
        let b = diagram.find("b.scss").unwrap();
        assert!(a < b);
    }

    #[test]
    fn rendering_an_unchanged_tree_is_deterministic() {
        let (_tmp, proj) = fixture();

        let first = generate_tree(&proj, &[], 0).unwrap();
        let second = generate_tree(&proj, &[], 0).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_root_propagates_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");

        assert!(generate_tree(&missing, &[], 0).is_err());
    }

    #[test]
    fn save_report_overwrites_previous_content() {
        let tmp = tempfile::tempdir().unwrap();
        let destination = tmp.path().join("directory_structure.md");
        fs::write(&destination, "stale").unwrap();

        save_report("proj/\n", &destination).unwrap();

        assert_eq!(fs::read_to_string(&destination).unwrap(), "proj/\n");
    }
}
