use crate::{
    errors::{FileOperation, IoError},
    structure::{Node, Structure},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fs,
    path::Path,
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error within scaffold domain")]
    #[diagnostic(code(blogforge::scaffold::io))]
    Io(#[from] IoError),
}

/// Outcome of a single `ensure_*` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Created,
    Existed,
}

/// Tally of what a [`run`] touched. A second run over the same base path
/// reports everything as pre-existing and nothing as created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub dirs_created: usize,
    pub dirs_existing: usize,
    pub files_created: usize,
    pub files_existing: usize,
}
impl ScaffoldReport {
    fn record_dir(&mut self, status: ItemStatus) {
        match status {
            ItemStatus::Created => self.dirs_created += 1,
            ItemStatus::Existed => self.dirs_existing += 1,
        }
    }

    fn record_file(&mut self, status: ItemStatus) {
        match status {
            ItemStatus::Created => self.files_created += 1,
            ItemStatus::Existed => self.files_existing += 1,
        }
    }
}

/// Creates the directory (and any missing parents) if it does not exist.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if directory creation fails due to I/O issues;
/// nothing is retried.
pub fn ensure_directory(path: &Path) -> Result<ItemStatus, ScaffoldError> {
    if path.exists() {
        println!("{} {}", "exists".yellow(), path.display());

        return Ok(ItemStatus::Existed);
    }

    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.to_path_buf(), error))?;

    println!("{} {}", "create".green(), path.display());

    Ok(ItemStatus::Created)
}

/// Creates an empty file if it does not exist; an existing file is left
/// untouched, contents included.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if file creation fails due to I/O issues.
pub fn ensure_file(path: &Path) -> Result<ItemStatus, ScaffoldError> {
    if path.exists() {
        println!("{} {}", "exists".yellow(), path.display());

        return Ok(ItemStatus::Existed);
    }

    fs::File::create(path)
        .map_err(|error| IoError::new(FileOperation::Touch, path.to_path_buf(), error))?;

    println!("{} {}", "create".green(), path.display());

    Ok(ItemStatus::Created)
}

/// Materializes `structure` under `base`, creating whatever is missing and
/// leaving everything else alone. Entries are visited in declaration order.
///
/// The base path itself is not validated up front; a missing base comes into
/// existence through the first `create_dir_all`, and a base that is actually
/// a regular file surfaces as an I/O error on the first creation attempt.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] on the first filesystem failure; earlier
/// creations are kept, there is no rollback.
pub fn run(base: &Path, structure: &Structure) -> Result<ScaffoldReport, ScaffoldError> {
    let mut report = ScaffoldReport::default();

    apply(base, structure, &mut report)?;

    log::debug!(
        "scaffold finished: {} dirs created, {} files created",
        report.dirs_created,
        report.files_created
    );

    Ok(report)
}

fn apply(dir: &Path, entries: &Structure, report: &mut ScaffoldReport) -> Result<(), ScaffoldError> {
    for (name, node) in &entries.0 {
        let path = dir.join(name);

        match node {
            Node::Dir(nested) => {
                report.record_dir(ensure_directory(&path)?);

                apply(&path, nested, report)?;
            }
            Node::File => {
                report.record_file(ensure_file(&path)?);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn run_creates_every_directory_and_file() {
        let base = tempfile::tempdir().unwrap();

        let report = run(base.path(), &Structure::blog_styles()).unwrap();

        assert_eq!(report.dirs_created, 8);
        assert_eq!(report.files_created, 43);
        assert_eq!(report.dirs_existing, 0);
        assert_eq!(report.files_existing, 0);

        assert!(base.path().join("styles/abstracts/_functions.scss").is_file());
        assert!(base.path().join("styles/themes/schemes/_dark.scss").is_file());
        assert!(base.path().join("styles/utilities/_index.scss").is_file());
    }

    #[test]
    fn second_run_is_idempotent() {
        let base = tempfile::tempdir().unwrap();
        let structure = Structure::blog_styles();

        run(base.path(), &structure).unwrap();
        let second = run(base.path(), &structure).unwrap();

        assert_eq!(second.dirs_created, 0);
        assert_eq!(second.files_created, 0);
        assert_eq!(second.dirs_existing, 8);
        assert_eq!(second.files_existing, 43);
    }

    #[test]
    fn ensure_file_leaves_existing_content_untouched() {
        let base = tempfile::tempdir().unwrap();
        let path = base.path().join("_variables.scss");
        fs::write(&path, "$accent: #f00;\n").unwrap();

        let status = ensure_file(&path).unwrap();

        assert_eq!(status, ItemStatus::Existed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "$accent: #f00;\n");
    }

    #[test]
    fn missing_base_path_is_created_implicitly() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("does").join("not").join("exist");

        let report = run(&base, &Structure::blog_styles()).unwrap();

        assert_eq!(report.dirs_created, 8);
        assert!(base.join("styles").is_dir());
    }
}
