//! Image hosting client (ImageKit)
//!
//! Only configuration and request plumbing live here; no route uploads yet.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const UPLOAD_ENDPOINT: &str = "https://upload.imagekit.io/api/v1/files/upload";

pub const PRIVATE_KEY_VAR: &str = "IMAGEKIT_PRIVATE_KEY";
pub const PUBLIC_KEY_VAR: &str = "IMAGEKIT_PUBLIC_KEY";
pub const URL_ENDPOINT_VAR: &str = "IMAGEKIT_URL";

#[derive(Clone)]
pub struct ImageKitConfig {
    pub private_key: String,
    pub public_key: String,
    pub url_endpoint: String,
}

impl std::fmt::Debug for ImageKitConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageKitConfig")
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .field("url_endpoint", &self.url_endpoint)
            .finish()
    }
}

impl ImageKitConfig {
    /// Read the three credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{} is not set", key))
        };

        Ok(Self {
            private_key: get(PRIVATE_KEY_VAR)?,
            public_key: get(PUBLIC_KEY_VAR)?,
            url_endpoint: get(URL_ENDPOINT_VAR)?,
        })
    }
}

pub struct ImageKitClient {
    config: ImageKitConfig,
    http: reqwest::Client,
}

impl ImageKitClient {
    pub fn new(config: ImageKitConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("postboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ImageKitConfig {
        &self.config
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn upload_endpoint(&self) -> &'static str {
        UPLOAD_ENDPOINT
    }

    /// Basic auth with the private key as username and an empty password
    pub fn authorization_header(&self) -> String {
        let credentials = format!("{}:", self.config.private_key);
        format!("Basic {}", STANDARD.encode(credentials))
    }

    /// Public delivery URL for a stored file path
    pub fn file_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.url_endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars() -> HashMap<&'static str, String> {
        HashMap::from([
            (PRIVATE_KEY_VAR, "private_abc".to_string()),
            (PUBLIC_KEY_VAR, "public_xyz".to_string()),
            (URL_ENDPOINT_VAR, "https://ik.imagekit.io/demo/".to_string()),
        ])
    }

    #[test]
    fn test_config_from_lookup() {
        let env = vars();
        let config = ImageKitConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.public_key, "public_xyz");
        assert!(!format!("{:?}", config).contains("private_abc"));
    }

    #[test]
    fn test_missing_credential_named_in_error() {
        let mut env = vars();
        env.remove(PUBLIC_KEY_VAR);

        let err = ImageKitConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains(PUBLIC_KEY_VAR));
    }

    #[test]
    fn test_client_helpers() {
        let env = vars();
        let config = ImageKitConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        let client = ImageKitClient::new(config).unwrap();

        // "private_abc:" in base64
        assert_eq!(client.authorization_header(), "Basic cHJpdmF0ZV9hYmM6");
        assert_eq!(
            client.file_url("/posts/a.jpg"),
            "https://ik.imagekit.io/demo/posts/a.jpg"
        );
        assert!(client.upload_endpoint().starts_with("https://upload.imagekit.io"));
    }
}
