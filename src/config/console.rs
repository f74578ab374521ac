//! Console configuration module.
//!
//! Messages and layout used by the interactive session.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Deepest indentation accepted for prompts.
const MAX_INDENT_TABS: usize = 8;

/// Console configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Number of tabs written before each prompt
    pub indent_tabs: usize,

    /// Message shown when a line cannot be parsed
    pub format_error_message: String,

    /// Message shown when a menu choice is out of range
    pub invalid_choice_message: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            indent_tabs: 0,
            format_error_message: "Invalid format. Please try again.".to_string(),
            invalid_choice_message: "Invalid value. Please try again.".to_string(),
        }
    }
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.indent_tabs > MAX_INDENT_TABS {
            return Err(ConfigError::ValueOutOfRange {
                key: "console.indent_tabs".to_string(),
                message: format!("must be at most {MAX_INDENT_TABS}"),
            });
        }

        if self.format_error_message.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "console.format_error_message cannot be empty".to_string(),
            ));
        }

        if self.invalid_choice_message.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "console.invalid_choice_message cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
