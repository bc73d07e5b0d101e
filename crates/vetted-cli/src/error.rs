//! Errors surfaced by the `vetted` binary, with the hints and exit codes
//! shown to the user.

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use vetted_adapters::InventoryError;
use vetted_core::{
    domain::DomainError,
    error::{ErrorCategory as CoreCategory, VettedError},
};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded, parsed or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `vetted form` got neither `--file` nor `forms.path`.
    #[error("No forms document given")]
    NoFormsDocument,

    #[error(transparent)]
    Core(#[from] VettedError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::Core(err.into())
    }
}

/// How an error is classified for exit codes and log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Answers ran out, never satisfied a prompt, or a data file is malformed.
    UserError,
    NotFound,
    Configuration,
    Cancelled,
    Internal,
}

impl ErrorCategory {
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
            Self::Cancelled => 130,
        }
    }
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Input => Self::UserError,
            CoreCategory::Configuration => Self::Configuration,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Cancelled => Self::Cancelled,
            CoreCategory::Internal => Self::Internal,
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                "Run 'vetted config path' to see which file is read".into(),
                "Run 'vetted init --force' to regenerate the defaults".into(),
            ],
            Self::NoFormsDocument => vec![
                "Pass a document with --file forms.json".into(),
                "Or set forms.path in the config file".into(),
                "Or export VETTED__FORMS__PATH=/path/to/forms.json".into(),
            ],
            Self::Core(err) => err.suggestions(),
            Self::Inventory(err) => inventory_hints(err),
            Self::IoError { .. } => vec!["Check file permissions and free disk space".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } | Self::NoFormsDocument => ErrorCategory::Configuration,
            Self::Core(err) => err.category().into(),
            Self::Inventory(InventoryError::Open { .. }) => ErrorCategory::NotFound,
            Self::Inventory(_) => ErrorCategory::UserError,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// 1 internal, 2 user error, 3 not found, 4 configuration, 130 cancelled.
    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: String, f: fn(&str) -> String| if color { f(&text) } else { text };

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:".into(), |s| s.red().bold().to_string()),
            paint(self.to_string(), |s| s.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("  Caused by: {err}");
                out.push_str(&paint(line, |s| s.dimmed().to_string()));
                out.push('\n');
                cause = err.source();
            }
        }

        let hints = self.suggestions();
        if !hints.is_empty() {
            out.push('\n');
            out.push_str(&paint("Suggestions:".into(), |s| s.yellow().bold().to_string()));
            out.push('\n');
            for hint in hints {
                out.push_str(&format!("  {hint}\n"));
            }
        }

        if !verbose {
            out.push('\n');
            out.push_str(&paint(
                "Use -v / --verbose for more details.".into(),
                |s| s.dimmed().to_string(),
            ));
            out.push('\n');
        }
        out
    }

    /// Emit the error as a tracing event at a level matching its category.
    pub fn log(&self) {
        let cause = self.source().map(ToString::to_string);
        match self.category() {
            ErrorCategory::Cancelled => tracing::info!(?cause, "{self}"),
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?cause, "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?cause, "{self}");
            }
        }
    }
}

fn inventory_hints(err: &InventoryError) -> Vec<String> {
    match err {
        InventoryError::Open { path, .. } => {
            vec![format!("Check that {} exists and is readable", path.display())]
        }
        InventoryError::TooManyValues { expected, .. } => vec![
            format!("The header declares {expected} column(s)"),
            "Add the missing column names to the '#' header line".into(),
        ],
        InventoryError::MissingColumn { column, .. } => vec![
            format!("Add a '{column}' column to the header line"),
            "Example header: # name,count".into(),
        ],
        InventoryError::Read { .. } => vec!["Check that the file is UTF-8 text".into()],
    }
}

/// Attach a message to a foreign error while converting it to [`CliError`].
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: f().into(),
            source: Some(Box::new(e)),
        })
    }
}
