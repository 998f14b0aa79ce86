use crate::{prompt, scaffold, structure::Structure, tree};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum BlogforgeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Tree(#[from] tree::TreeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),
}

/// Creates the blog stylesheet skeleton under `base`, prompting for the base
/// path when none is supplied.
///
/// # Errors
///
/// Returns a [`BlogforgeError`] if:
///
/// - The interactive prompt fails or the operator cancels it.
/// - A directory or file cannot be created.
pub fn scaffold_styles(base: Option<&str>) -> Result<(), BlogforgeError> {
    let base = match base {
        Some(path) => path.to_string(),
        None => prompt::get_base_path()?,
    };

    log::debug!("scaffolding blog styles under: {}", base);

    let report = scaffold::run(Path::new(&base), &Structure::blog_styles())?;

    log::debug!(
        "scaffold report: {} dirs / {} files created, {} dirs / {} files already present",
        report.dirs_created,
        report.files_created,
        report.dirs_existing,
        report.files_existing
    );

    Ok(())
}

/// Walks the tree rooted at `root`, skipping the subtrees named in
/// `exclude`, and writes the rendered diagram to `output`.
///
/// # Errors
///
/// Returns a [`BlogforgeError`] if:
///
/// - The root does not exist or a directory cannot be read.
/// - The report file cannot be written.
pub fn render_tree(root: &str, exclude: &[String], output: &str) -> Result<(), BlogforgeError> {
    let exclude: Vec<PathBuf> = exclude.iter().map(PathBuf::from).collect();

    log::debug!(
        "rendering tree rooted at '{}' with {} exclusion(s)",
        root,
        exclude.len()
    );

    let diagram = tree::generate_tree(Path::new(root), &exclude, 0)?;

    tree::save_report(&diagram, Path::new(output))?;

    Ok(())
}
