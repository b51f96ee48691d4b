//! Candidate selection over the provider registry.

use crate::framework::Provider;
use crate::track::TrackError;
use std::sync::Arc;
use tracing::debug;

/// The process-wide, read-only set of known providers.
///
/// Built once at startup and shared by every invocation. Cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: Arc<Vec<Arc<dyn Provider>>>,
}

impl ProviderRegistry {
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self {
            providers: Arc::new(providers),
        }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Provider>> {
        self.providers.iter()
    }

    /// Returns, in registry order, every provider that recognises the number.
    ///
    /// # Errors
    /// [`TrackError::NoProviderMatches`] when none does.
    pub fn select(&self, shipment_number: &str) -> Result<Vec<Arc<dyn Provider>>, TrackError> {
        let selected: Vec<_> = self
            .providers
            .iter()
            .filter(|p| p.matches_number(shipment_number))
            .cloned()
            .collect();

        debug!(
            shipment_number,
            known = self.providers.len(),
            selected = selected.len(),
            "Selected providers"
        );

        if selected.is_empty() {
            return Err(TrackError::NoProviderMatches);
        }
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::StaticProvider;

    fn registry() -> ProviderRegistry {
        ProviderRegistry::new(vec![
            StaticProvider::prefix("InPost", "6"),
            StaticProvider::prefix("DHL", "JJD"),
            StaticProvider::any("Poczta Polska"),
        ])
    }

    #[test]
    fn keeps_registry_order() {
        let registry = registry();
        let known: Vec<_> = registry.iter().map(|p| p.name()).collect();
        assert_eq!(known, vec!["InPost", "DHL", "Poczta Polska"]);
        assert_eq!(registry.len(), 3);

        let selected = registry.select("6123").unwrap();
        let names: Vec<_> = selected.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["InPost", "Poczta Polska"]);
    }

    #[test]
    fn fails_when_nothing_matches() {
        let registry = ProviderRegistry::new(vec![StaticProvider::nothing("DHL")]);
        assert_eq!(
            registry.select("XYZ").unwrap_err(),
            TrackError::NoProviderMatches
        );
    }

    #[test]
    fn empty_registry_matches_nothing() {
        let registry = ProviderRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.select("6123").is_err());
    }
}
