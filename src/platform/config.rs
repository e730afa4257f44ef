// ShowReg - platform/config.rs
//
// Platform-specific configuration and data directory resolution, plus
// config.toml loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::ShowType;
use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ShowReg data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/showreg/).
    pub config_dir: PathBuf,

    /// Data directory holding the record store and session file.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility: a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[show]` section.
    pub show: ShowSection,
    /// `[branding]` section.
    pub branding: BrandingSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[show]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ShowSection {
    /// Default show type for fresh sessions: "Simple", "Breed-base",
    /// or "Complex" (matched leniently).
    pub show_type: Option<String>,
}

/// `[branding]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BrandingSection {
    /// Organisation name printed on tag-sheet headers.
    pub organisation: Option<String>,
    /// Path to the branding logo image. Missing file degrades to
    /// text-only headers.
    pub logo: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults;
/// the application always starts.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Default show type for fresh sessions.
    pub default_show_type: String,

    /// Organisation name for tag-sheet branding.
    pub organisation: String,

    /// Optional branding logo path.
    pub logo_path: Option<PathBuf>,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_show_type: constants::DEFAULT_SHOW_TYPE.to_string(),
            organisation: constants::DEFAULT_ORGANISATION.to_string(),
            logo_path: None,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no warnings
/// (first run). If the file is unparseable, returns defaults with an error
/// warning; the application still starts but the operator is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- Show: show_type --
    if let Some(ref show_type) = raw.show.show_type {
        if ShowType::parse(show_type).is_some() {
            config.default_show_type = show_type.clone();
        } else {
            warnings.push(format!(
                "[show] show_type = \"{show_type}\" matches no known mode \
                 (Simple, Breed-base, Complex). Classification will use the \
                 generic fallback class."
            ));
            // Kept verbatim: an unrecognised show type is a defined
            // fallback, not a configuration failure.
            config.default_show_type = show_type.clone();
        }
    }

    // -- Branding --
    if let Some(ref organisation) = raw.branding.organisation {
        if !organisation.trim().is_empty() {
            config.organisation = organisation.trim().to_string();
        }
    }
    if let Some(ref logo) = raw.branding.logo {
        if !logo.is_empty() {
            config.logo_path = Some(PathBuf::from(logo));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_file_yields_defaults_without_warnings() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.default_show_type, constants::DEFAULT_SHOW_TYPE);
        assert_eq!(config.organisation, constants::DEFAULT_ORGANISATION);
    }

    #[test]
    fn valid_config_is_applied() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[show]\nshow_type = \"Complex\"\n\
             [branding]\norganisation = \"Cat Fanciers Club\"\nlogo = \"/tmp/logo.png\"\n\
             [logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.default_show_type, "Complex");
        assert_eq!(config.organisation, "Cat Fanciers Club");
        assert_eq!(config.logo_path, Some(PathBuf::from("/tmp/logo.png")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_show_type_warns_but_is_kept_verbatim() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[show]\nshow_type = \"tournament\"\n",
        )
        .unwrap();

        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.default_show_type, "tournament");
    }

    #[test]
    fn malformed_toml_falls_back_to_defaults_with_warning() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "not [valid toml").unwrap();

        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.default_show_type, constants::DEFAULT_SHOW_TYPE);
    }

    #[test]
    fn invalid_log_level_warns_and_uses_default() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[logging]\nlevel = \"verbose\"\n",
        )
        .unwrap();

        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(config.log_level.is_none());
    }
}
