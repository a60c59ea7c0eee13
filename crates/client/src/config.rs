use std::{env, time::Duration};

use agenda_core::calendar::Locale;
use url::Url;

/// Placeholder values shipped in sample environment files.
const PLACEHOLDER_URL: &str = "https://your-project-ref.supabase.co";
const PLACEHOLDER_ANON_KEY: &str = "your-anon-public-key-here";

/// Connection settings for a Supabase project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: Url,
    pub anon_key: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project URL.
    pub supabase_url: Option<String>,
    /// Supabase anonymous (public) API key.
    pub supabase_anon_key: Option<String>,
    /// Access token of a previous sign-in.
    pub access_token: Option<String>,
    /// Display language (default: Indonesian).
    pub locale: Locale,
    /// Per-request HTTP timeout in seconds (default: 30).
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SUPABASE_URL` - Supabase project URL
    /// - `SUPABASE_ANON_KEY` - Supabase anonymous key
    /// - `AGENDA_ACCESS_TOKEN` - Access token of a previous sign-in
    /// - `AGENDA_LOCALE` - `id` or `en` (default: `id`)
    /// - `AGENDA_REQUEST_TIMEOUT_SECONDS` - HTTP timeout (default: 30)
    pub fn from_env() -> Self {
        Self {
            supabase_url: non_empty_var("SUPABASE_URL"),
            supabase_anon_key: non_empty_var("SUPABASE_ANON_KEY"),
            access_token: non_empty_var("AGENDA_ACCESS_TOKEN"),
            locale: env::var("AGENDA_LOCALE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            request_timeout_seconds: env::var("AGENDA_REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Returns the backend settings if the backend is usable.
    ///
    /// The URL must be an `https` Supabase project URL and neither value may
    /// be a sample placeholder. Anything else means mock mode.
    pub fn backend(&self) -> Option<BackendConfig> {
        let url = self.supabase_url.as_deref()?;
        let anon_key = self.supabase_anon_key.as_deref()?;

        if url == PLACEHOLDER_URL || anon_key == PLACEHOLDER_ANON_KEY {
            return None;
        }

        let parsed = Url::parse(url).ok()?;
        let is_supabase_host = parsed
            .host_str()
            .is_some_and(|host| host.ends_with(".supabase.co"));
        if parsed.scheme() != "https" || !is_supabase_host {
            return None;
        }

        Some(BackendConfig {
            url: parsed,
            anon_key: anon_key.to_string(),
        })
    }

    /// Returns true if a real backend is configured.
    pub fn is_backend_configured(&self) -> bool {
        self.backend().is_some()
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supabase_url: None,
            supabase_anon_key: None,
            access_token: None,
            locale: Locale::default(),
            request_timeout_seconds: 30,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, key: &str) -> Config {
        Config {
            supabase_url: Some(url.to_string()),
            supabase_anon_key: Some(key.to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_backend_configured() {
        let backend = config("https://abcd.supabase.co", "anon").backend().unwrap();
        assert_eq!(backend.url.host_str(), Some("abcd.supabase.co"));
        assert_eq!(backend.anon_key, "anon");
    }

    #[test]
    fn test_missing_values_mean_mock_mode() {
        assert!(!Config::default().is_backend_configured());
        let only_url = Config {
            supabase_url: Some("https://abcd.supabase.co".to_string()),
            ..Config::default()
        };
        assert!(!only_url.is_backend_configured());
    }

    #[test]
    fn test_placeholders_mean_mock_mode() {
        assert!(!config(PLACEHOLDER_URL, "anon").is_backend_configured());
        assert!(!config("https://abcd.supabase.co", PLACEHOLDER_ANON_KEY).is_backend_configured());
    }

    #[test]
    fn test_non_supabase_or_plain_http_is_rejected() {
        assert!(!config("http://abcd.supabase.co", "anon").is_backend_configured());
        assert!(!config("https://example.com", "anon").is_backend_configured());
        assert!(!config("not a url", "anon").is_backend_configured());
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            request_timeout_seconds: 5,
            ..Config::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }
}
