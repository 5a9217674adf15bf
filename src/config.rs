//! Support for configuration options

use std::error::Error;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the server URL of a settings file
pub const URL_ENV_VAR: &str = "CYCLENCE_URL";

/// What a view does once a completion has been recorded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStrategy {
    /// Fetch the task list again, so that server-side changes (due dates, colours...) are displayed
    Reload,
    /// Do not reload anything, only highlight the completed task
    Highlight,
}

impl Default for CompletionStrategy {
    fn default() -> Self {
        CompletionStrategy::Reload
    }
}


/// How failed requests are retried.
///
/// The default is to try only once, and let the user retry by hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// How many times a request is sent before giving up. `0` behaves like `1`
    pub max_attempts: u32,
    /// How long to wait between two attempts
    pub delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 1, delay_ms: 0 }
    }
}

impl RetryPolicy {
    pub fn no_retry() -> Self {
        Self::default()
    }

    pub fn attempts(max_attempts: u32, delay: Duration) -> Self {
        Self { max_attempts, delay_ms: delay.as_millis() as u64 }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub(crate) fn effective_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}


/// Settings of a task view
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// The root URL of the Cyclence server
    pub url: String,
    #[serde(default)]
    pub completion_strategy: CompletionStrategy,
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl Settings {
    pub fn new<S: ToString>(url: S) -> Self {
        Self {
            url: url.to_string(),
            completion_strategy: CompletionStrategy::default(),
            retry: RetryPolicy::default(),
        }
    }

    /// Read settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let settings = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(file) => serde_json::from_reader(file)?,
        };
        Ok(settings)
    }

    /// Read settings from a JSON file if there is one, then apply the environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let settings = match path {
            Some(path) => Some(Self::from_file(path)?),
            None => None,
        };
        Self::with_env_overrides(settings, std::env::var(URL_ENV_VAR).ok())
    }

    fn with_env_overrides(settings: Option<Self>, env_url: Option<String>) -> Result<Self, Box<dyn Error>> {
        match (settings, env_url) {
            (Some(mut settings), Some(url)) => {
                log::debug!("Server URL overridden by {}", URL_ENV_VAR);
                settings.url = url;
                Ok(settings)
            },
            (Some(settings), None) => Ok(settings),
            (None, Some(url)) => Ok(Self::new(url)),
            (None, None) => Err(format!("No server URL: use a settings file or set {}", URL_ENV_VAR).into()),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"url": "http://localhost:8888"}"#).unwrap();
        assert_eq!(settings.completion_strategy, CompletionStrategy::Reload);
        assert_eq!(settings.retry, RetryPolicy::no_retry());
        assert_eq!(settings.retry.effective_attempts(), 1);
    }

    #[test]
    fn test_full_settings() {
        let settings: Settings = serde_json::from_str(r#"{
            "url": "http://localhost:8888",
            "completion_strategy": "highlight",
            "retry": { "max_attempts": 3, "delay_ms": 250 }
        }"#).unwrap();
        assert_eq!(settings.completion_strategy, CompletionStrategy::Highlight);
        assert_eq!(settings.retry.effective_attempts(), 3);
        assert_eq!(settings.retry.delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        let policy = RetryPolicy { max_attempts: 0, delay_ms: 0 };
        assert_eq!(policy.effective_attempts(), 1);
    }

    #[test]
    fn test_env_overrides() {
        let from_file = Settings::new("http://from-file");
        let s = Settings::with_env_overrides(Some(from_file.clone()), Some("http://from-env".into())).unwrap();
        assert_eq!(s.url, "http://from-env");

        let s = Settings::with_env_overrides(Some(from_file), None).unwrap();
        assert_eq!(s.url, "http://from-file");

        let s = Settings::with_env_overrides(None, Some("http://from-env".into())).unwrap();
        assert_eq!(s, Settings::new("http://from-env"));

        assert!(Settings::with_env_overrides(None, None).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(Settings::from_file(Path::new("/this/file/does/not/exist.json")).is_err());
    }
}
