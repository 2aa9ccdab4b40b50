//! Error handling for new-component.
//! Defines the error type and result alias used throughout the application.

use thiserror::Error;

use crate::constants::exit_codes;
use crate::reporter::Reporter;

/// All possible failures of a component generation run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The positional component name was omitted or blank.
    #[error("Sorry, you need to specify a name for your component like this: new-component <name>")]
    MissingComponentName,

    /// The generated output would overwrite something already on disk.
    #[error("Looks like this component already exists! There's already a {kind} at {path}. Please delete it and try again.")]
    ComponentExists { kind: String, path: String },

    #[error("Cannot proceed: template '{path}' does not exist.")]
    TemplateNotFound { path: String },

    /// The formatting engine rejected the generated source.
    #[error("Failed to format generated source. Original error: {0}")]
    FormatError(String),

    /// Only raised while reading override files; the resolver swallows it.
    #[error("Failed to parse config file: {0}.")]
    ConfigParseError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that reports the error and exits the program.
///
/// # Behavior
/// Sends the error message to the reporter and exits with status code 1
pub fn default_error_handler(err: Error, reporter: &dyn Reporter) -> ! {
    log::debug!("{:?}", err);
    reporter.error(&err.to_string());
    std::process::exit(exit_codes::FAILURE);
}
