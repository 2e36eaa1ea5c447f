//! The preference store: single owner of [`Preferences`].

use std::sync::Arc;

use cmap_model::{ColorScheme, PreferenceFlag, Preferences, StoredPreferences};
use cmap_persistence::{PREFERENCES_KEY, StateStore, load, save};

use crate::outcome::{ChangeOutcome, IgnoreReason};

/// Owns the UI toggles and persists them after every flip.
pub struct PreferenceStore {
    prefs: Preferences,
    store: Arc<dyn StateStore>,
}

impl PreferenceStore {
    /// Restore from `store`. Any key the saved document lacks, or the whole
    /// document on a first run, takes its default from the host colour
    /// scheme.
    pub fn load(store: Arc<dyn StateStore>, host: ColorScheme) -> Self {
        let prefs = load(&*store, PREFERENCES_KEY, StoredPreferences::default()).resolve(host);
        Self { prefs, store }
    }

    /// Current snapshot.
    pub fn read(&self) -> Preferences {
        self.prefs
    }

    /// Flip the flag called `name`. Unknown names are a no-op.
    pub fn toggle(&mut self, name: &str) -> ChangeOutcome {
        match PreferenceFlag::from_name(name) {
            Some(flag) => self.toggle_flag(flag),
            None => {
                tracing::debug!(flag = name, "Ignoring toggle for unknown preference");
                ChangeOutcome::Ignored(IgnoreReason::UnknownFlag(name.to_string()))
            }
        }
    }

    pub fn toggle_flag(&mut self, flag: PreferenceFlag) -> ChangeOutcome {
        let value = self.prefs.flip(flag);
        tracing::debug!(?flag, value, "Preference toggled");
        save(&*self.store, PREFERENCES_KEY, &self.prefs);
        ChangeOutcome::Applied
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("prefs", &self.prefs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmap_persistence::MemoryStore;

    #[test]
    fn test_first_run_follows_host_scheme() {
        let store = Arc::new(MemoryStore::new());
        let prefs = PreferenceStore::load(store.clone(), ColorScheme::Dark).read();
        assert!(prefs.dark_mode);
        assert!(prefs.sidebar);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_saved_value_beats_host_scheme() {
        let store = Arc::new(MemoryStore::new());
        store.seed(PREFERENCES_KEY, r#"{"darkMode": false}"#);
        let prefs = PreferenceStore::load(store, ColorScheme::Dark).read();
        assert!(!prefs.dark_mode);
    }

    #[test]
    fn test_missing_dark_mode_follows_host_scheme() {
        let store = Arc::new(MemoryStore::new());
        store.seed(PREFERENCES_KEY, r#"{"sidebar": false}"#);
        let prefs = PreferenceStore::load(store.clone(), ColorScheme::Dark).read();
        assert!(prefs.dark_mode);
        assert!(!prefs.sidebar);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_unknown_flag_does_not_write() {
        let store = Arc::new(MemoryStore::new());
        let mut prefs = PreferenceStore::load(store.clone(), ColorScheme::Light);
        let before = prefs.read();

        let outcome = prefs.toggle("unknownFlag");

        assert_eq!(
            outcome,
            ChangeOutcome::Ignored(IgnoreReason::UnknownFlag("unknownFlag".into()))
        );
        assert_eq!(prefs.read(), before);
        assert_eq!(store.write_count(), 0);
    }
}
