//! Status classification and rendering.
//!
//! The status table has no intrinsic order. [`StatusTable::render`] sorts the
//! provider names on every call so the rendered block never depends on the
//! order replies arrived in.

use crate::framework::{Provider, QueryError};
use crate::model::TrackingData;
use std::collections::HashMap;
use std::sync::Arc;

/// Placeholder shown for a provider that has not answered yet.
pub const PENDING_STATUS: &str = "⌛ checking...";
pub const NOT_FOUND_STATUS: &str = "🔳 Not found";
pub const ERROR_MARKER: &str = "⚠️ Error: ";
pub const FOUND_MARKER: &str = "🔎 ";

/// Turns one reply into the short status shown next to its provider.
pub fn classify(result: &Result<TrackingData, QueryError>) -> String {
    match result {
        Err(QueryError::NotFound) => NOT_FOUND_STATUS.to_string(),
        Err(e) => format!("{}{}", ERROR_MARKER, e),
        Ok(data) => {
            let latest = data.latest_step().map(|s| s.message.as_str()).unwrap_or("");
            format!("{}{}", FOUND_MARKER, latest)
        }
    }
}

/// Escapes text for embedding in an HTML-formatted chat message.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Provider name to latest status, for one invocation.
///
/// Entries are created up front, one per selected provider, and afterwards
/// only overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTable {
    entries: HashMap<String, String>,
}

impl StatusTable {
    /// Creates a table with every provider marked as pending.
    pub fn pending(providers: &[Arc<dyn Provider>], placeholder: &str) -> Self {
        let entries = providers
            .iter()
            .map(|p| (p.name().to_string(), placeholder.to_string()))
            .collect();
        Self { entries }
    }

    /// Overwrites the status of one provider.
    pub fn set(&mut self, provider: &str, status: String) {
        self.entries.insert(provider.to_string(), status);
    }

    pub fn get(&self, provider: &str) -> Option<&str> {
        self.entries.get(provider).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders one `name: <b>status</b>` line per provider, sorted by name.
    pub fn render(&self) -> String {
        let mut names: Vec<&String> = self.entries.keys().collect();
        names.sort();

        names
            .into_iter()
            .map(|name| format!("{}: <b>{}</b>\n", name, escape_html(&self.entries[name])))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::StaticProvider;
    use crate::model::TrackingStep;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn classifies_every_outcome() {
        assert_eq!(classify(&Err(QueryError::NotFound)), "🔳 Not found");
        assert_eq!(
            classify(&Err(QueryError::provider("timeout"))),
            "⚠️ Error: timeout"
        );
        assert_eq!(classify(&Ok(TrackingData::new("1", "A"))), "🔎 ");

        let data = TrackingData::new("1", "A").with_steps(vec![
            TrackingStep::new(at(10, 0), "left depot"),
            TrackingStep::new(at(12, 0), "arrived hub").at("CityX"),
        ]);
        assert_eq!(classify(&Ok(data)), "🔎 arrived hub");
    }

    #[test]
    fn renders_sorted_regardless_of_insert_order() {
        let providers = vec![
            StaticProvider::any("zeta"),
            StaticProvider::any("Alpha"),
            StaticProvider::any("beta"),
        ];
        let table = StatusTable::pending(&providers, PENDING_STATUS);

        assert_eq!(
            table.render(),
            "Alpha: <b>⌛ checking...</b>\nbeta: <b>⌛ checking...</b>\nzeta: <b>⌛ checking...</b>\n"
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let providers = vec![StaticProvider::any("B"), StaticProvider::any("A")];
        let mut table = StatusTable::pending(&providers, PENDING_STATUS);
        table.set("B", NOT_FOUND_STATUS.to_string());

        assert_eq!(table.render(), table.render());
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("A"), Some(PENDING_STATUS));
        assert_eq!(table.get("B"), Some(NOT_FOUND_STATUS));
        assert_eq!(table.get("C"), None);
    }

    #[test]
    fn escapes_status_text() {
        let providers = vec![StaticProvider::any("A")];
        let mut table = StatusTable::pending(&providers, PENDING_STATUS);
        table.set("A", "⚠️ Error: <html> & \"quotes\"".to_string());
        // stored raw, escaped only when rendered
        assert_eq!(table.get("A"), Some("⚠️ Error: <html> & \"quotes\""));

        assert_eq!(
            table.render(),
            "A: <b>⚠️ Error: &lt;html&gt; &amp; &quot;quotes&quot;</b>\n"
        );
    }
}
