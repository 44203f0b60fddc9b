use serde::{Deserialize, Serialize};

/// Snapshot of graph size, for reporting passes and debug logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStatistics {
    /// All connections, extra reasons included.
    pub connection_count: usize,
    pub extra_reason_count: usize,
    /// Modules with at least one reason.
    pub target_module_count: usize,
    pub meta_record_count: usize,
}

impl GraphStatistics {
    /// Connections backed by a dependency (the forward map size).
    pub fn dependency_count(&self) -> usize {
        self.connection_count - self.extra_reason_count
    }
}
