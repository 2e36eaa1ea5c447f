//! Message handlers, one per message category.
//!
//! [`App::update`](crate::App::update) dispatches each [`Message`](crate::Message)
//! variant to its handler:
//!
//! ```ignore
//! match message {
//!     Message::Filter(msg) => FilterHandler.handle(&mut self.state, msg),
//!     Message::Preference(msg) => PreferenceHandler.handle(&mut self.state, msg),
//!     Message::Catalog(msg) => CatalogHandler.handle(&mut self.state, msg),
//! }
//! ```

mod catalog;
mod filter;
mod preference;

use crate::state::AppState;

pub use catalog::CatalogHandler;
pub use filter::FilterHandler;
pub use preference::PreferenceHandler;

/// Handles one message category.
pub trait MessageHandler<M> {
    /// Apply `msg` to `state`. Returns whether anything changed.
    fn handle(&self, state: &mut AppState, msg: M) -> bool;
}
