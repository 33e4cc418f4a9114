//! Shared application state.

use activitylens_core::AppConfig;
use activitylens_pipeline::NormalizedRecord;
use parking_lot::RwLock;

/// The session-scoped product of one upload. Replaced wholesale by the next
/// upload; nothing survives a run except what the client already fetched.
#[derive(Clone)]
pub struct Dataset {
    pub id: String,
    pub records: Vec<NormalizedRecord>,
    /// Entries excluded for an unparsable or missing timestamp.
    pub dropped: usize,
    pub uploaded_at: String,
}

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: AppConfig,
    /// Shared outbound HTTP client for insight calls.
    pub http: reqwest::Client,
    /// Current dataset, `None` until the first upload.
    dataset: RwLock<Option<Dataset>>,
    /// Session credential for the external text-generation service.
    /// Held in memory only; never persisted, logged, or echoed.
    credential: RwLock<Option<String>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            dataset: RwLock::new(None),
            credential: RwLock::new(None),
        }
    }

    /// Replace the session dataset atomically.
    pub fn set_dataset(&self, dataset: Dataset) {
        *self.dataset.write() = Some(dataset);
    }

    /// Snapshot of the current dataset. Handlers work on the clone so a
    /// concurrent upload cannot tear an aggregate mid-computation.
    pub fn dataset(&self) -> Option<Dataset> {
        self.dataset.read().clone()
    }

    pub fn set_credential(&self, credential: Option<String>) {
        *self.credential.write() = credential.filter(|c| !c.is_empty());
    }

    pub fn credential(&self) -> Option<String> {
        self.credential.read().clone()
    }

    pub fn credential_configured(&self) -> bool {
        self.credential.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credential_is_treated_as_absent() {
        // Insight routes check the credential before any outbound call, so an
        // empty key must read back as "not configured" to skip them silently.
        let state = AppState::new(AppConfig::default());
        state.set_credential(Some(String::new()));
        assert!(!state.credential_configured());
        assert_eq!(state.credential(), None);
    }

    #[test]
    fn test_credential_set_and_clear() {
        let state = AppState::new(AppConfig::default());

        state.set_credential(Some("sk-test".into()));
        assert!(state.credential_configured());
        assert_eq!(state.credential().as_deref(), Some("sk-test"));

        state.set_credential(None);
        assert!(!state.credential_configured());
        assert_eq!(state.credential(), None);
    }
}
