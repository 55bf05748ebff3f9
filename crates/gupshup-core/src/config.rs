//! Client configuration
//!
//! Read from the process environment, optionally seeded from a `.env` file.
//! The desktop binary layers its command-line flags on top.

use std::env;

use crate::cookie::SESSION_COOKIE;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/v1";
pub const DEFAULT_UPLOAD_URL: &str = "https://api.cloudinary.com/v1_1";

pub const ENV_API_URL: &str = "GUPSHUP_API_URL";
pub const ENV_CLOUD_NAME: &str = "GUPSHUP_CLOUDINARY_CLOUD_NAME";
pub const ENV_UPLOAD_PRESET: &str = "GUPSHUP_CLOUDINARY_UPLOAD_PRESET";
pub const ENV_UPLOAD_URL: &str = "GUPSHUP_CLOUDINARY_URL";

/// Image hosting account used for attachments and avatars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHostConfig {
    pub cloud_name: Option<String>,
    pub upload_preset: Option<String>,
    pub upload_base_url: String,
}

impl Default for ImageHostConfig {
    fn default() -> Self {
        Self {
            cloud_name: None,
            upload_preset: None,
            upload_base_url: DEFAULT_UPLOAD_URL.to_string(),
        }
    }
}

impl ImageHostConfig {
    /// Upload endpoint, or `None` when the account is not configured.
    pub fn upload_url(&self) -> Option<String> {
        let cloud = self.cloud_name.as_deref()?;
        Some(format!(
            "{}/{}/image/upload",
            self.upload_base_url.trim_end_matches('/'),
            cloud
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API, e.g. `http://localhost:5000/api/v1`
    pub api_base_url: String,
    pub image_host: ImageHostConfig,
    /// Name of the cookie carrying the session token
    pub session_cookie_name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            image_host: ImageHostConfig::default(),
            session_cookie_name: SESSION_COOKIE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load `.env` (if any) and read the `GUPSHUP_*` variables.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env"),
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = ImageHostConfig::default();

        Self {
            api_base_url: get(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            image_host: ImageHostConfig {
                cloud_name: get(ENV_CLOUD_NAME),
                upload_preset: get(ENV_UPLOAD_PRESET),
                upload_base_url: get(ENV_UPLOAD_URL).unwrap_or(defaults.upload_base_url),
            },
            session_cookie_name: SESSION_COOKIE.to_string(),
        }
    }

    /// Override the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Join the base URL with an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_endpoint_joins_slashes() {
        let cfg = ClientConfig::default().with_api_url("http://api.test/v1/");
        assert_eq!(cfg.endpoint("/user/me"), "http://api.test/v1/user/me");
        assert_eq!(cfg.endpoint("chat/b"), "http://api.test/v1/chat/b");
    }

    #[test]
    fn test_from_lookup_defaults() {
        let cfg = ClientConfig::from_lookup(|_| None);
        assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
        assert_eq!(cfg.session_cookie_name, "gup-shup-tkn");
        assert!(cfg.image_host.upload_url().is_none());
    }

    #[test]
    fn test_from_lookup_reads_vars_and_ignores_blank() {
        let vars: HashMap<&str, &str> = [
            (ENV_API_URL, "https://chat.example/api"),
            (ENV_CLOUD_NAME, "demo"),
            (ENV_UPLOAD_PRESET, "unsigned"),
            (ENV_UPLOAD_URL, "  "),
        ]
        .into_iter()
        .collect();
        let cfg = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.api_base_url, "https://chat.example/api");
        assert_eq!(cfg.image_host.upload_preset.as_deref(), Some("unsigned"));
        assert_eq!(
            cfg.image_host.upload_url().as_deref(),
            Some("https://api.cloudinary.com/v1_1/demo/image/upload")
        );
    }
}
