//! API location.

use url::Url;

use crate::error::ConfigError;

/// Address used when no override is supplied at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    /// Builds the configuration from an optional base URL override.
    ///
    /// `None` and blank overrides select [`DEFAULT_API_BASE_URL`]. The base must
    /// be able to carry path segments (`http://`, `https://`).
    pub fn from_override(base_url: Option<&str>) -> Result<Self, ConfigError> {
        let raw = base_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);

        let base_url = Url::parse(raw).map_err(|err| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: err.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self { base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_no_override() {
        let config = ApiConfig::from_override(None).unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_blank_override_uses_default() {
        let config = ApiConfig::from_override(Some("  ")).unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_override_is_parsed() {
        let config = ApiConfig::from_override(Some("https://api.example.com/v1")).unwrap();
        assert_eq!(config.base_url.host_str(), Some("api.example.com"));
        assert_eq!(config.base_url.path(), "/v1");
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        let err = ApiConfig::from_override(Some("not a url")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));

        let err = ApiConfig::from_override(Some("mailto:someone@example.com")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }
}
