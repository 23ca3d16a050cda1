//! Registry configuration

use serde::Deserialize;

use crate::{CeError, Result};

/// Type that names without a separator fall under
pub const DEFAULT_EVENT_TYPE: &str = "DDomCE";

/// Separator between the type prefix and the rest of a name
pub const DEFAULT_SEPARATOR: char = '-';

/// Custom events configuration
///
/// ```json
/// { "separator": ":", "default_type": "app" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomEventsConfig {
    /// Splits `<type><separator><name>` at the first occurrence
    pub separator: char,
    /// Type for names that contain no separator
    pub default_type: String,
}

impl CustomEventsConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.default_type.is_empty() {
            return Err(CeError::Config("default_type must not be empty".to_string()));
        }
        if self.default_type.contains(self.separator) {
            return Err(CeError::Config(format!(
                "default_type {:?} must not contain the separator {:?}",
                self.default_type, self.separator
            )));
        }
        Ok(())
    }
}

impl Default for CustomEventsConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            default_type: DEFAULT_EVENT_TYPE.to_string(),
        }
    }
}
