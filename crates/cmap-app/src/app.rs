//! The application root.
//!
//! State -> Message -> Update. After every message that changed something
//! the query is rebuilt; the renderer only hears about it when the handoff
//! document differs from the last one it was given.

use std::sync::Arc;

use cmap_model::{ColorScheme, Preferences};
use cmap_persistence::StateStore;
use cmap_query::{Query, QueryContract, build_query};

use crate::handler::{CatalogHandler, FilterHandler, MessageHandler, PreferenceHandler};
use crate::message::Message;
use crate::state::AppState;

/// Root of the update loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    query: Query,
    handed_off: QueryContract,
}

impl App {
    /// Restore state from `store` and build the initial query.
    pub fn new(store: Arc<dyn StateStore>, host: ColorScheme) -> Self {
        let state = AppState::load(store, host);
        let query = build_query(state.filters.state(), &state.catalogs);
        let handed_off = query.contract();
        tracing::info!(
            courses = handed_off.courses.len(),
            direction = %handed_off.direction,
            "Session restored"
        );
        Self {
            state,
            query,
            handed_off,
        }
    }

    /// Update application state in response to a message.
    ///
    /// Returns the new renderer contract when it changed.
    pub fn update(&mut self, message: Message) -> Option<QueryContract> {
        let changed = match message {
            Message::Filter(msg) => FilterHandler.handle(&mut self.state, msg),
            Message::Preference(msg) => PreferenceHandler.handle(&mut self.state, msg),
            Message::Catalog(msg) => CatalogHandler.handle(&mut self.state, msg),
        };
        if !changed {
            return None;
        }

        let query = build_query(self.state.filters.state(), &self.state.catalogs);
        if query == self.query {
            return None;
        }
        self.query = query;

        let contract = self.query.contract();
        if contract == self.handed_off {
            return None;
        }
        tracing::debug!("Query changed");
        self.handed_off = contract.clone();
        Some(contract)
    }

    /// Last contract handed to the renderer.
    pub fn contract(&self) -> &QueryContract {
        &self.handed_off
    }

    /// Current enriched query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn preferences(&self) -> Preferences {
        self.state.preferences.read()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
