//! Course Map application shell.
//!
//! Wires the state containers, catalogs and query synthesis into a single
//! Elm-style loop: inputs become [`Message`]s, [`App::update`] applies them,
//! and a changed [`QueryContract`](cmap_query::QueryContract) is handed to
//! the renderer.
//!
//! # Module Structure
//!
//! - `handler/` - Message handlers by category
//! - [`events`] - stdin event decoding
//! - [`fetch`] - catalog fetch tasks
//! - [`config`] / [`logging`] - ambient setup

mod app;
pub mod config;
pub mod events;
pub mod fetch;
mod handler;
pub mod logging;
mod message;
mod state;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use events::{Event, forward_events, parse_event};
pub use fetch::spawn_catalog_fetches;
pub use message::{CatalogMessage, FilterMessage, Message, PreferenceMessage};
pub use state::AppState;
