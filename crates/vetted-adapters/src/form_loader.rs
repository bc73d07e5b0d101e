//! Forms document loader.
//!
//! Reads a [`FormsDocument`] from a JSON or TOML file. The format is chosen
//! from the file extension. Field order in the file is the prompt order.
//!
//! # JSON
//!
//! ```json
//! {
//!   "user-registration": {
//!     "fields": {
//!       "username": { "type": "str", "message": "Username:",
//!                     "predicate": { "minLength": 3 } }
//!     }
//!   }
//! }
//! ```
//!
//! # TOML
//!
//! ```toml
//! [user-registration.fields.username]
//! type    = "str"
//! message = "Username:"
//!
//! [user-registration.fields.username.predicate]
//! minLength = 3
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use vetted_core::{application::ApplicationError, domain::FormsDocument, error::VettedResult};

/// Supported document encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Loads forms documents from disk or from strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormLoader;

impl FormLoader {
    /// Read and parse the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::DocumentLoad`] if the file cannot be read,
    /// has an unknown extension, or does not parse.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> VettedResult<FormsDocument> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)
            .ok_or_else(|| load_error(path, "expected a .json or .toml file"))?;

        let content =
            fs::read_to_string(path).map_err(|e| load_error(path, format!("cannot read: {e}")))?;

        let document = Self::parse(&content, format).map_err(|reason| load_error(path, reason))?;
        debug!(forms = document.len(), "Forms document loaded");
        Ok(document)
    }

    /// Parse `content` in the given format.
    pub fn parse(content: &str, format: DocumentFormat) -> Result<FormsDocument, String> {
        match format {
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

fn load_error(path: &Path, reason: impl Into<String>) -> ApplicationError {
    ApplicationError::DocumentLoad {
        path: PathBuf::from(path),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use vetted_core::{domain::TargetType, error::VettedError};

    use super::*;

    const JSON: &str = r#"{
        "user-registration": {
            "fields": {
                "username": { "type": "str", "message": "Username:",
                              "predicate": { "minLength": 3, "maxLength": 12 } },
                "email":    { "type": "text", "message": "Email:" },
                "age":      { "type": "int", "message": "Age:",
                              "errorMessage": "Whole numbers only",
                              "predicate": { "min": 1, "max": "130" } }
            }
        }
    }"#;

    const TOML: &str = r#"
[user-registration.fields.username]
type = "str"
message = "Username:"

[user-registration.fields.username.predicate]
minLength = 3

[user-registration.fields.age]
type = "int"
message = "Age:"

[user-registration.fields.age.predicate]
min = 1
max = 130
"#;

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_json_in_declaration_order() {
        let file = write_temp(".json", JSON);
        let document = FormLoader::load(file.path()).unwrap();

        let form = document.form("user-registration").unwrap();
        let names: Vec<_> = form.fields.keys().collect();
        assert_eq!(names, ["username", "email", "age"]);

        let age = form.fields.get("age").unwrap();
        assert_eq!(age.target_type().unwrap(), TargetType::Integer);
        assert_eq!(age.error_message.as_deref(), Some("Whole numbers only"));
    }

    #[test]
    fn loads_toml_in_declaration_order() {
        let file = write_temp(".toml", TOML);
        let document = FormLoader::load(file.path()).unwrap();

        let form = document.form("user-registration").unwrap();
        let names: Vec<_> = form.fields.keys().collect();
        assert_eq!(names, ["username", "age"]);
        assert!(form.fields.get("age").unwrap().to_prompt_request().is_ok());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = write_temp(".yaml", "{}");
        let err = FormLoader::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            VettedError::Application(ApplicationError::DocumentLoad { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = FormLoader::load("/definitely/not/here/forms.json").unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let file = write_temp(".json", "{ not json");
        assert!(FormLoader::load(file.path()).is_err());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/forms.JSON")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("forms.toml")),
            Some(DocumentFormat::Toml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("forms")), None);
    }
}
