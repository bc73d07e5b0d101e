//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `VETTED__<SECTION>__<KEY>`
//! 3. Config file (`--config`, or [`AppConfig::config_path`] if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Name of the per-directory config file written by `vetted init --local`.
pub const LOCAL_CONFIG_FILE: &str = ".vetted.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prompt loop settings.
    pub prompt: PromptConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Forms document settings.
    pub forms: FormsConfig,
    /// Shop demo settings.
    pub shop: ShopConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Rejected answers allowed per prompt; `0` keeps asking forever.
    pub max_attempts: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub default_form: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            path: None,
            default_form: "user-registration".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub items: Vec<String>,
    pub start_at_zero: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            items: ["Sword", "Shield", "Bow", "Health Potion"]
                .map(String::from)
                .to_vec(),
            start_at_zero: false,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. Without
    /// it the default location is read if a file is there.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = ::config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        ::config::Config::builder()
            .add_source(defaults)
            .add_source(::config::File::from(path.as_path()).required(required))
            .add_source(
                ::config::Environment::with_prefix("VETTED")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("shop.items"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Configuration has an invalid value")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.vetted.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "vetted", "vetted")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Path of the per-directory config file under `dir`.
    pub fn local_path(dir: &Path) -> PathBuf {
        dir.join(LOCAL_CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_shop_demo() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.shop.items, ["Sword", "Shield", "Bow", "Health Potion"]);
        assert!(!cfg.shop.start_at_zero);
        assert_eq!(cfg.prompt.max_attempts, 0);
        assert_eq!(cfg.forms.default_form, "user-registration");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[prompt]\nmax_attempts = 3\n\n[shop]\nitems = [\"Axe\"]\nstart_at_zero = true"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.prompt.max_attempts, 3);
        assert_eq!(cfg.shop.items, ["Axe"]);
        assert!(cfg.shop.start_at_zero);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/no/such/vetted/config.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.shop.items.len(), 4);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
