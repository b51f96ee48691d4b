//! Runtime configuration loaded from the environment.

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_pending_status() -> String {
    crate::track::render::PENDING_STATUS.to_string()
}

fn default_follow_label() -> String {
    "🚶 Follow this package".to_string()
}

/// Settings shared by every `/track` invocation.
///
/// | Env | Default | Description |
/// |-----|---------|-------------|
/// | PACZKO_QUERY_TIMEOUT_SECS | unset | Per-provider watchdog. Unset or 0 lets a query run forever. |
/// | PACZKO_PENDING_STATUS | ⌛ checking... | Status shown before a provider answers. |
/// | PACZKO_FOLLOW_LABEL | 🚶 Follow this package | Label of the follow button on detail messages. |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    #[serde(default, with = "opt_secs")]
    pub query_timeout: Option<Duration>,
    #[serde(default = "default_pending_status")]
    pub pending_status: String,
    #[serde(default = "default_follow_label")]
    pub follow_label: String,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            query_timeout: None,
            pending_status: default_pending_status(),
            follow_label: default_follow_label(),
        }
    }
}

impl TrackConfig {
    /// Load settings from environment. Unset or invalid => defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let query_timeout = lookup("PACZKO_QUERY_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        let non_empty = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            query_timeout,
            pending_status: non_empty("PACZKO_PENDING_STATUS")
                .unwrap_or_else(default_pending_status),
            follow_label: non_empty("PACZKO_FOLLOW_LABEL").unwrap_or_else(default_follow_label),
        }
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = Some(timeout);
        self
    }
}

/// `Option<Duration>` as whole seconds.
mod opt_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_some(&d.as_secs()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        let secs = Option::<u64>::deserialize(d)?;
        Ok(secs.filter(|s| *s > 0).map(Duration::from_secs))
    }
}
