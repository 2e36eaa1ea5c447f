//! The filter model: single owner of [`FilterState`].

use std::sync::Arc;

use cmap_model::{CodeSet, Facet, FilterState};
use cmap_persistence::{FILTERS_KEY, StateStore, load, save};
use serde_json::Value;

use crate::facets::{FacetUpdate, spec};
use crate::outcome::{ChangeOutcome, IgnoreReason};

/// Owns the search state and persists it after every effective change.
pub struct FilterModel {
    state: FilterState,
    store: Arc<dyn StateStore>,
}

impl FilterModel {
    /// Restore from `store`, falling back to the compiled-in default.
    pub fn load(store: Arc<dyn StateStore>) -> Self {
        let state = load(&*store, FILTERS_KEY, FilterState::default());
        Self { state, store }
    }

    /// Start from an explicit state without touching storage.
    pub fn with_state(store: Arc<dyn StateStore>, state: FilterState) -> Self {
        Self { state, store }
    }

    /// Current snapshot.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Apply a selection event from the control named `facet_name`.
    ///
    /// Unknown facet names and malformed payloads are no-ops.
    pub fn apply_facet_change(&mut self, facet_name: &str, selection: &Value) -> ChangeOutcome {
        match Facet::from_name(facet_name) {
            Some(facet) => self.apply(facet, selection),
            None => {
                tracing::debug!(facet = facet_name, "Ignoring event for unknown facet");
                ChangeOutcome::Ignored(IgnoreReason::UnknownFacet(facet_name.to_string()))
            }
        }
    }

    /// Apply a selection event for a known facet.
    pub fn apply(&mut self, facet: Facet, selection: &Value) -> ChangeOutcome {
        let update = match spec(facet).normalize(selection) {
            Ok(update) => update,
            Err(error) => {
                tracing::debug!(%facet, %error, "Ignoring selection event");
                return ChangeOutcome::Ignored(IgnoreReason::Malformed(error));
            }
        };

        match update {
            FacetUpdate::Codes(codes) => {
                if let Some(slot) = self.state.codes_mut(facet) {
                    *slot = codes;
                }
            }
            FacetUpdate::Direction(direction) => self.state.direction = direction,
        }
        self.commit(facet)
    }

    /// Replace the selected courses, as the graph view does when the user
    /// picks courses on the map.
    pub fn set_courses<I, S>(&mut self, codes: I) -> ChangeOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.state.courses = codes
            .into_iter()
            .map(|code| code.as_ref().trim().to_string())
            .collect::<CodeSet>();
        self.commit(Facet::Courses)
    }

    /// Add a course typed into the tag input.
    ///
    /// Blank input and codes already selected (ignoring case) are ignored.
    pub fn add_course(&mut self, text: &str) -> ChangeOutcome {
        let code = text.trim();
        if code.is_empty() {
            return ChangeOutcome::Ignored(IgnoreReason::BlankCourse);
        }
        if self.state.courses.contains_ignore_case(code) {
            return ChangeOutcome::Ignored(IgnoreReason::DuplicateCourse(code.to_string()));
        }
        self.state.courses.insert(code);
        self.commit(Facet::Courses)
    }

    /// Remove the course at `index` in display order.
    pub fn remove_course(&mut self, index: usize) -> ChangeOutcome {
        if self.state.courses.remove_at(index).is_none() {
            return ChangeOutcome::Ignored(IgnoreReason::IndexOutOfRange(index));
        }
        self.commit(Facet::Courses)
    }

    /// Persist the whole document once.
    fn commit(&self, facet: Facet) -> ChangeOutcome {
        tracing::debug!(%facet, "Filter state updated");
        save(&*self.store, FILTERS_KEY, &self.state);
        ChangeOutcome::Applied
    }
}

impl std::fmt::Debug for FilterModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterModel")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
