use serde::{Deserialize, Serialize};

use crate::env::{flag_var, parse_var, string_var};

fn default_base_url() -> String {
    "https://www.ebi.ac.uk/ebisearch/ws/rest/complex-portal".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("vsm-dictionary-complex-portal/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Settings of the Complex Portal adapter
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ComplexPortalConfig {
    /// EBI Search REST endpoint of the complex-portal domain
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Log every request URL and result count at info level
    #[serde(default)]
    pub log: bool,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ComplexPortalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log: false,
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl ComplexPortalConfig {
    pub fn new() -> Self {
        Self::default().with_env_overrides()
    }

    /// Override fields from `COMPLEX_PORTAL_BASE_URL`, `COMPLEX_PORTAL_LOG`,
    /// `HTTP_TIMEOUT_SECONDS` and `HTTP_USER_AGENT`
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(base_url) = string_var("COMPLEX_PORTAL_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(log) = flag_var("COMPLEX_PORTAL_LOG") {
            self.log = log;
        }
        if let Some(timeout) = parse_var("HTTP_TIMEOUT_SECONDS") {
            self.timeout_seconds = timeout;
        }
        if let Some(user_agent) = string_var("HTTP_USER_AGENT") {
            self.user_agent = user_agent;
        }
        self
    }

    /// Base URL without trailing slashes
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: ComplexPortalConfig = serde_json::from_str(r#"{ "log": true }"#).unwrap();

        assert!(config.log);
        assert_eq!(config.base_url, default_base_url());
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = ComplexPortalConfig {
            base_url: "http://test//".to_string(),
            ..Default::default()
        };

        assert_eq!(config.normalized_base_url(), "http://test");
    }
}
