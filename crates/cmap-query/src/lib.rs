//! Query synthesis for Course Map.
//!
//! [`build_query`] derives the graph query from the current
//! [`FilterState`](cmap_model::FilterState) and whatever catalogs have
//! arrived. It is a pure function: the same inputs always produce the same
//! [`Query`], and a missing catalog only means codes stay unresolved.
//!
//! [`Query::contract`] strips the enrichment back down to the codes-only
//! document the graph renderer consumes.

mod contract;
mod query;

pub use contract::QueryContract;
pub use query::{ItemStatus, Query, QueryItem, build_query};
