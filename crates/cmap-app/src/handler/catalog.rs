//! Catalog message handler.

use super::MessageHandler;
use crate::message::CatalogMessage;
use crate::state::AppState;

pub struct CatalogHandler;

impl MessageHandler<CatalogMessage> for CatalogHandler {
    fn handle(&self, state: &mut AppState, msg: CatalogMessage) -> bool {
        match msg {
            CatalogMessage::Loaded { which, result } => state.catalogs.fill(which, result),
        }
    }
}
