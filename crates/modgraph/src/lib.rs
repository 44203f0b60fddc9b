//! # modgraph
//!
//! The module graph index of the bundling pipeline.
//!
//! This crate stores how dependencies resolve to modules and answers the
//! questions every later stage keeps asking:
//!
//! - **What does this dependency point at?** [`ModuleGraph::get_module`]
//! - **Why is this module in the build?** [`ModuleGraph::get_reasons`]
//! - **What did other passes record about it?** [`ModuleGraph::get_meta`]
//!
//! It does not decide what the graph contains. The resolver, the parser and
//! the optimization passes own modules and dependencies; the graph only sees
//! their handles ([`ModuleId`], [`DependencyId`]) and keeps the relationships
//! between them consistent.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                    ModuleGraph                            │
//! │  (Arc<RwLock<..>>, one instance per build session)        │
//! └──────────────┬─────────────────┬─────────────────┬────────┘
//!                │                 │                 │
//!                ▼                 ▼                 ▼
//!    ┌────────────────────┐ ┌──────────────┐ ┌──────────────┐
//!    │ DependencyId ->    │ │ ModuleId ->  │ │ MetaKey ->   │
//!    │ Connection         │ │ {Connection} │ │ MetaRecord   │
//!    │ (forward, 1:1)     │ │ (reasons)    │ │ (lazy)       │
//!    └────────────────────┘ └──────────────┘ └──────────────┘
//! ```
//!
//! Every connection appears in the reverse set of its current target and in
//! no other. Retargeting a connection moves it between reverse sets under a
//! single write lock, so readers never see it in both or in neither.
//!
//! ## Quick Start
//!
//! ```rust
//! use modgraph::{DependencyId, ModuleGraph, ModuleId};
//!
//! # fn main() -> modgraph::Result<()> {
//! let graph = ModuleGraph::new();
//! let (index, utils, shared) = (ModuleId::from_raw(0), ModuleId::from_raw(1), ModuleId::from_raw(2));
//! let import = DependencyId::from_raw(0);
//!
//! graph.add_extra_reason(index, "entry");
//! graph.set_resolved_module(Some(index), import, utils)?;
//!
//! // Deduplication merged `utils` into `shared`.
//! graph.update_module(import, shared)?;
//!
//! assert_eq!(graph.get_module(import), Some(utils));
//! assert!(graph.get_reasons(utils).is_empty());
//! assert_eq!(graph.get_reasons(shared)[0].origin_module(), Some(index));
//!
//! graph.get_meta(shared).set("sideEffects", false);
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! `ModuleGraph` is single-writer/multiple-reader: all operations take
//! `&self` and hold the internal lock for their whole duration. Reads that
//! span several calls (e.g. reasons of two modules) are not atomic together.

mod connection;
pub mod error;
mod ids;
mod meta;
pub mod statistics;

// ModuleGraph implementation
mod memory;

pub use connection::Connection;
pub use error::{Error, Result};
pub use ids::{ConnectionId, DependencyId, MetaKey, ModuleId};
pub use memory::ModuleGraph;
pub use meta::MetaRecord;
pub use statistics::GraphStatistics;

#[cfg(test)]
mod tests;
