use serde::Deserialize;

use crate::error::BridgeError;

pub const UNKNOWN_LOGGER_NAME: &str = "unknown.jul.logger";
pub const LOCATION_PLACEHOLDER: &str = "?";

/// Bridge settings, meant to be embedded in the host application's own config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
    /// Logger name used when a record carries none.
    pub unknown_logger_name: String,
    /// Stands in for location parts the record does not supply (file, line).
    pub location_placeholder: String,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            unknown_logger_name: UNKNOWN_LOGGER_NAME.to_string(),
            location_placeholder: LOCATION_PLACEHOLDER.to_string(),
        }
    }
}

impl BridgeSettings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), BridgeError> {
        validate_non_blank("unknown_logger_name", &self.unknown_logger_name)?;
        validate_non_blank("location_placeholder", &self.location_placeholder)?;
        Ok(())
    }
}

fn validate_non_blank(field: &str, value: &str) -> Result<(), BridgeError> {
    if value.trim().is_empty() {
        return Err(BridgeError::Config(format!("{field} cannot be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = BridgeSettings::default();
        assert_eq!(settings.unknown_logger_name, "unknown.jul.logger");
        assert_eq!(settings.location_placeholder, "?");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_blank_logger_name_fails() {
        let settings = BridgeSettings {
            unknown_logger_name: "   ".into(),
            ..BridgeSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("unknown_logger_name cannot be empty"));
    }

    #[test]
    fn test_validate_empty_placeholder_fails() {
        let settings = BridgeSettings {
            location_placeholder: String::new(),
            ..BridgeSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("location_placeholder cannot be empty"));
    }

    #[test]
    fn test_deserialize_partial_table_keeps_defaults() {
        let settings: BridgeSettings = toml::from_str(r#"unknown_logger_name = "jul.orphan""#).unwrap();
        assert_eq!(settings.unknown_logger_name, "jul.orphan");
        assert_eq!(settings.location_placeholder, "?");
    }

    #[test]
    fn test_deserialize_empty_table() {
        let settings: BridgeSettings = toml::from_str("").unwrap();
        assert_eq!(settings, BridgeSettings::default());
    }
}
