//! Configuration handling for the intake wizard

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_CONTACT_EMAIL: &str = "aioncapitalfl@gmail.com";
const DEFAULT_CONTACT_PHONE: &str = "321-607-0070";

/// Contact details and submission target, injected into the app at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Recipient of mail drafts and the "Email Us" action
    pub contact_email: String,
    /// Number shown in the footer and dialed by "Call Us"
    pub contact_phone: String,
    /// HTTP endpoint receiving the JSON application. Without one the
    /// application is handed to the mail client instead.
    pub submission_endpoint: Option<String>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            contact_phone: DEFAULT_CONTACT_PHONE.to_string(),
            submission_endpoint: None,
        }
    }
}

impl IntakeConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "aioncapital", "aion-intake")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "aioncapital", "aion-intake")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file, then apply environment overrides.
    /// A missing file is created with the defaults.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_json(&fs::read_to_string(&path)?)?,
            Some(path) => {
                // First run: leave an editable file behind
                let config = Self::default();
                match config.save() {
                    Ok(()) => tracing::info!("wrote default config to {}", path.display()),
                    Err(e) => tracing::warn!("could not write default config: {e}"),
                }
                config
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: IntakeConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Apply `AION_*` overrides from a variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(email) = lookup("AION_CONTACT_EMAIL") {
            self.contact_email = email;
        }
        if let Some(phone) = lookup("AION_CONTACT_PHONE") {
            self.contact_phone = phone;
        }
        if let Some(endpoint) = lookup("AION_SUBMIT_ENDPOINT") {
            self.submission_endpoint = Some(endpoint);
        }
    }

    /// Configured endpoint, ignoring blank values
    pub fn endpoint(&self) -> Option<&str> {
        self.submission_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = IntakeConfig::default();
        assert_eq!(config.contact_email, "aioncapitalfl@gmail.com");
        assert_eq!(config.contact_phone, "321-607-0070");
        assert!(config.submission_endpoint.is_none());
        assert!(config.endpoint().is_none());
    }

    #[test]
    fn test_serialization() {
        let config = IntakeConfig {
            contact_email: "loans@example.com".to_string(),
            contact_phone: "+1 555 010 0000".to_string(),
            submission_endpoint: Some("https://forms.example.com/f/abc".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed = IntakeConfig::from_json(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let parsed =
            IntakeConfig::from_json(r#"{"submission_endpoint": "https://x.test/in"}"#).unwrap();
        assert_eq!(parsed.contact_email, "aioncapitalfl@gmail.com");
        assert_eq!(parsed.endpoint(), Some("https://x.test/in"));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed = IntakeConfig::from_json("{}").unwrap();
        assert_eq!(parsed, IntakeConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"contact_phone": "555", "theme": "neon"}"#;
        let parsed = IntakeConfig::from_json(json).unwrap();
        assert_eq!(parsed.contact_phone, "555");
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(IntakeConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_blank_endpoint_counts_as_unset() {
        let config = IntakeConfig {
            submission_endpoint: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.endpoint().is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let vars: HashMap<&str, &str> = [
            ("AION_CONTACT_EMAIL", "desk@example.com"),
            ("AION_SUBMIT_ENDPOINT", "https://api.example.com/leads"),
        ]
        .into_iter()
        .collect();

        let mut config = IntakeConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.contact_email, "desk@example.com");
        assert_eq!(config.contact_phone, "321-607-0070");
        assert_eq!(config.endpoint(), Some("https://api.example.com/leads"));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = IntakeConfig::config_path();
    }
}
