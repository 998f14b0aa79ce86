use inquire::{required, Text};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("Error occurred trying to prompt for a base path")]
    #[diagnostic(
        code(blogforge::prompt::base_path),
        help("Run again and enter a path, or pass the base path as an argument")
    )]
    BasePath {
        #[source]
        source: inquire::InquireError,
    },
}

/// Asks the operator where the stylesheet skeleton should be created.
pub fn get_base_path() -> Result<String, PromptError> {
    Text::new("Base path:")
        .with_help_message("Directory under which the styles skeleton will be created")
        .with_validator(required!("a base path is required"))
        .prompt()
        .map_err(|source| PromptError::BasePath { source })
}
