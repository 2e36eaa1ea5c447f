//! Session-start catalog fetches.

use std::sync::Arc;

use cmap_catalog::{CatalogSource, FetchedCatalog};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::message::{CatalogMessage, Message};

/// Spawn one fire-and-forget task per fetched catalog.
///
/// Each task posts a [`CatalogMessage::Loaded`] when its request settles.
/// No retries, no timeout: a request that never settles leaves its catalog
/// pending.
pub fn spawn_catalog_fetches<S: CatalogSource>(
    source: &Arc<S>,
    tx: &UnboundedSender<Message>,
) -> [JoinHandle<()>; 2] {
    FetchedCatalog::ALL.map(|which| {
        let source = Arc::clone(source);
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = match which {
                FetchedCatalog::Courses => source.fetch_courses().await,
                FetchedCatalog::Fields => source.fetch_fields().await,
            };
            if tx
                .send(CatalogMessage::Loaded { which, result }.into())
                .is_err()
            {
                tracing::debug!(?which, "Catalog arrived after shutdown");
            }
        })
    })
}
