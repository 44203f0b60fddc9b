//! In-memory ModuleGraph implementation.
//!
//! Forward and reverse indexes live behind a single `RwLock`, so every
//! operation observes (and leaves behind) a consistent pair of maps.

mod construction;
mod graph;
mod mutations;
mod queries;
mod statistics;

// Re-export ModuleGraph
pub use graph::ModuleGraph;

// Import implementations - these add methods to ModuleGraph
// These wildcard imports are intentional - they add impl blocks to ModuleGraph
#[allow(unused_imports)]
use construction::*;
#[allow(unused_imports)]
use mutations::*;
#[allow(unused_imports)]
use queries::*;
#[allow(unused_imports)]
use statistics::*;
