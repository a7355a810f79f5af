use std::env;

use crate::core::errors::CatFinderError;

pub const API_KEY_ENV: &str = "CAT_API_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Reads the API key at startup. A missing or blank key is a
    /// configuration error, never a silent empty-header request.
    pub fn from_env() -> Result<Self, CatFinderError> {
        Self::from_key(env::var(API_KEY_ENV).ok())
    }

    fn from_key(key: Option<String>) -> Result<Self, CatFinderError> {
        match key {
            Some(key) if !key.trim().is_empty() => Ok(Self { api_key: key }),
            _ => Err(CatFinderError::MissingApiKey),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_key_is_rejected() {
        assert!(Config::from_key(None).is_err());
        assert!(Config::from_key(Some(String::new())).is_err());
        assert!(Config::from_key(Some("   ".to_string())).is_err());
    }

    #[test]
    fn test_key_is_kept_verbatim() {
        let config = Config::from_key(Some("live_abc123".to_string())).unwrap();
        assert_eq!(config.api_key, "live_abc123");
    }
}
