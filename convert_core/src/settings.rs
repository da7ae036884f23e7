//! # Settings
//!
//! Start-up configuration for a front end: which category to open, what is
//! pre-filled in the source field, and the quick-value presets. Settings are
//! read once at start-up; nothing is ever written back.
//!
//! ## File Format
//!
//! A JSON object; every field is optional and falls back to its default.
//!
//! ```json
//! {
//!   "initial_category": "length",
//!   "initial_value": "1",
//!   "quick_values": ["1", "10", "25", "100", "1000"]
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use convert_core::settings::Settings;
//!
//! let settings = Settings::from_json(r#"{ "initial_category": "mass" }"#).unwrap();
//! let session = settings.initial_session();
//! assert_eq!(session.from_unit, "kg");
//! assert_eq!(session.to_text, "1000");
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ConvertError, ConvertResult};
use crate::format::parse_number;
use crate::session::{SessionState, INITIAL_SOURCE_TEXT};
use crate::units::{default_category, lookup_category};

/// Environment variable naming a settings file
pub const SETTINGS_ENV_VAR: &str = "CONVERTLAB_CONFIG";

/// Front-end start-up settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Category selected when the session starts
    pub initial_category: String,

    /// Text pre-filled in the source field
    pub initial_value: String,

    /// Preset source values offered as one-tap shortcuts
    pub quick_values: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            initial_category: default_category().id.to_string(),
            initial_value: INITIAL_SOURCE_TEXT.to_string(),
            quick_values: ["1", "10", "25", "100", "1000"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text.
    pub fn from_json(json: &str) -> ConvertResult<Self> {
        let settings: Settings = serde_json::from_str(json).map_err(|e| ConvertError::SerializationError {
            reason: format!("Invalid settings JSON: {}", e),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the settings against the registry.
    ///
    /// The initial value may be any text (the session copes with partial
    /// input), but quick values are meant to be tapped and must be numbers.
    pub fn validate(&self) -> ConvertResult<()> {
        if lookup_category(&self.initial_category).is_none() {
            return Err(ConvertError::invalid_settings(
                "initial_category",
                format!("unknown category '{}'", self.initial_category),
            ));
        }

        if let Some(bad) = self.quick_values.iter().find(|v| parse_number(v).is_err()) {
            return Err(ConvertError::invalid_settings(
                "quick_values",
                format!("'{}' is not a number", bad),
            ));
        }

        Ok(())
    }

    /// A fresh session in the configured category with the configured value.
    pub fn initial_session(&self) -> SessionState {
        SessionState::start(&self.initial_category, &self.initial_value)
    }

    /// Quick value by 1-based position, as shown to the user
    pub fn quick_value(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.quick_values.get(index))
            .map(String::as_str)
    }
}

/// Load settings from a JSON file.
///
/// # Example
///
/// ```rust,no_run
/// use convert_core::settings::load_settings;
/// use std::path::Path;
///
/// let settings = load_settings(Path::new("convertlab.json"))?;
/// println!("Opening {}", settings.initial_category);
/// # Ok::<(), convert_core::errors::ConvertError>(())
/// ```
pub fn load_settings(path: &Path) -> ConvertResult<Settings> {
    let mut file = File::open(path).map_err(|e| {
        ConvertError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        ConvertError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings = Settings::from_json(&contents)?;
    debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(settings)
}

/// Settings from `explicit` if given, else from [`SETTINGS_ENV_VAR`], else
/// defaults.
pub fn resolve_settings(explicit: Option<&Path>) -> ConvertResult<Settings> {
    if let Some(path) = explicit {
        return load_settings(path);
    }
    match std::env::var_os(SETTINGS_ENV_VAR) {
        Some(path) if !path.is_empty() => load_settings(Path::new(&path)),
        _ => Ok(Settings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::path::PathBuf;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("convertlab_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.initial_category, "currency");
        assert_eq!(settings.initial_value, "1");
        assert_eq!(settings.quick_values, ["1", "10", "25", "100", "1000"]);
        assert!(settings.validate().is_ok());
        assert_eq!(settings.initial_session(), SessionState::new());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "initial_value": "42" }"#).unwrap();
        assert_eq!(settings.initial_category, "currency");
        assert_eq!(settings.initial_value, "42");
        assert_eq!(settings.quick_values.len(), 5);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = Settings::from_json(r#"{ "initial_category": "pressure" }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTINGS");
    }

    #[test]
    fn test_bad_quick_value_rejected() {
        let err = Settings::from_json(r#"{ "quick_values": ["1", "ten"] }"#).unwrap_err();
        assert_eq!(
            err,
            ConvertError::invalid_settings("quick_values", "'ten' is not a number")
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_quick_value_positions() {
        let settings = Settings::default();
        assert_eq!(settings.quick_value(1), Some("1"));
        assert_eq!(settings.quick_value(5), Some("1000"));
        assert_eq!(settings.quick_value(0), None);
        assert_eq!(settings.quick_value(6), None);
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_settings_path("load");
        fs::write(&path, r#"{ "initial_category": "temperature", "initial_value": "100" }"#).unwrap();

        let settings = load_settings(&path).unwrap();
        let session = settings.initial_session();
        assert_eq!(session.category_id, "temperature");
        assert_eq!(session.to_text, "212");

        let resolved = resolve_settings(Some(&path)).unwrap();
        assert_eq!(resolved, settings);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let path = temp_settings_path("missing");
        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
