//! AI provider configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// OpenAI configuration.
///
/// Leaving the API key unset runs the service with the mock provider, which
/// keeps local development and CI off the network.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    pub openai_api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.openai_api_key {
            if !key.is_empty() && !key.starts_with("sk-") {
                return Err(ValidationError::InvalidOpenAiKey);
            }
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_key_is_valid_and_means_mock() {
        let config = AiConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.has_openai());
    }

    #[test]
    fn malformed_key_is_rejected() {
        let config = AiConfig {
            openai_api_key: Some("not-a-key".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidOpenAiKey)));
    }

    #[test]
    fn well_formed_key_is_accepted() {
        let config = AiConfig {
            openai_api_key: Some("sk-proj-abc".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.has_openai());
    }
}
