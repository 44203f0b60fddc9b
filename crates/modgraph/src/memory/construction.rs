//! Construction methods for ModuleGraph.

use std::sync::Arc;

use parking_lot::RwLock;

use super::graph::{GraphInner, ModuleGraph};

impl ModuleGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(GraphInner::default())),
        }
    }
}

impl Default for ModuleGraph {
    fn default() -> Self {
        Self::new()
    }
}
