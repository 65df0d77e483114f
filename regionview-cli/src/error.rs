//! Error handling for RegionView CLI

use regionview_core::RegionError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for RegionView CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("Region error: {0}")]
    Region(#[from] RegionError),
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat { message: message.into() }
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        Self::config(format!("TOML serialization error: {}", err))
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::FileNotFound { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the file path is correct: {}\n\
                 • Ensure you have read permissions for the file",
                path.display()
            ));
        }

        CliError::InvalidFormat { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Use --format gff3 or --format json to set the input format\n\
                 • GFF3 needs 9 tab-separated columns per feature line",
            );
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your regionview.toml configuration file\n\
                 • Use 'regionview config --example' to generate a sample configuration",
            );
        }

        CliError::Region(RegionError::EmptyRegionSet) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check the --feature-type list against the feature types in the input\n\
                 • Check that --transcript names a transcript present in the input",
            );
        }

        CliError::Region(RegionError::InvalidWidth(_)) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • The width must exceed the left and right panel widths combined",
            );
        }

        CliError::Region(RegionError::PaddingOutOfRange { .. }) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Lower --padding or the padding value in regionview.toml",
            );
        }

        CliError::Region(_) => {}
    }

    message
}
