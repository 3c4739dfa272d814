use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_AUTH_URL: &str = "http://localhost:8000/api";
const DEFAULT_SESSION_KEY: &str = "loggedInUser";

/// Backend endpoints and client-side storage settings.
///
/// The console runs in the browser, so values are captured from the build
/// environment rather than read at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the resource API (`/internet_users`, `/directorates`, ...)
    pub api_url: String,
    /// Base URL serving `/login` and `/logout`
    pub auth_url: String,
    /// Local storage key of the session marker
    pub session_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| match var {
            "NETROSTER_API_URL" => option_env!("NETROSTER_API_URL").map(str::to_string),
            "NETROSTER_AUTH_URL" => option_env!("NETROSTER_AUTH_URL").map(str::to_string),
            "NETROSTER_SESSION_KEY" => option_env!("NETROSTER_SESSION_KEY").map(str::to_string),
            _ => None,
        })
    }

    /// Build from an arbitrary variable source, falling back to local development defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = base_url(
            "NETROSTER_API_URL",
            lookup("NETROSTER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        )?;
        let auth_url = base_url(
            "NETROSTER_AUTH_URL",
            lookup("NETROSTER_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
        )?;

        let session_key = lookup("NETROSTER_SESSION_KEY")
            .unwrap_or_else(|| DEFAULT_SESSION_KEY.to_string())
            .trim()
            .to_string();
        if session_key.is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "NETROSTER_SESSION_KEY".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            api_url,
            auth_url,
            session_key,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

fn base_url(var: &str, value: String) -> Result<String, ConfigError> {
    let value = value.trim().trim_end_matches('/');
    if value.is_empty() {
        return Err(ConfigError::MissingEnvVar(var.to_string()));
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("{value:?} is not an absolute http(s) URL"),
        });
    }
    Ok(value.to_string())
}
