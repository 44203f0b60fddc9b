//! Statistics methods for ModuleGraph.

use super::super::GraphStatistics;
use super::graph::ModuleGraph;

impl ModuleGraph {
    /// Compute statistics snapshot for reporting.
    pub fn statistics(&self) -> GraphStatistics {
        let inner = self.inner.read();
        let extra_reason_count = inner
            .connections
            .values()
            .filter(|connection| connection.is_extra_reason())
            .count();

        GraphStatistics {
            connection_count: inner.connections.len(),
            extra_reason_count,
            target_module_count: inner.module_map.len(),
            meta_record_count: inner.meta.len(),
        }
    }

    /// Number of connections, extra reasons included.
    pub fn len(&self) -> usize {
        self.inner.read().connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().connections.is_empty()
    }
}
