//! Query methods for ModuleGraph.
//!
//! None of these allocate index entries: asking about a module or
//! dependency the graph has never seen returns an empty answer.

use super::super::{Connection, DependencyId, MetaKey, MetaRecord, ModuleId};
use super::graph::ModuleGraph;

impl ModuleGraph {
    /// The module `dependency` originally resolved to.
    ///
    /// Retargets through [`update_module`](Self::update_module) are not
    /// reflected here, only in [`get_reasons`](Self::get_reasons).
    pub fn get_resolved_module(&self, dependency: DependencyId) -> Option<ModuleId> {
        self.inner
            .read()
            .connection_for(dependency)
            .map(|connection| connection.resolved_module)
    }

    /// Same answer as [`get_resolved_module`](Self::get_resolved_module).
    pub fn get_module(&self, dependency: DependencyId) -> Option<ModuleId> {
        self.inner
            .read()
            .connection_for(dependency)
            .map(|connection| connection.resolved_module)
    }

    /// Snapshot of the connection for `dependency`, including its live target.
    pub fn get_connection(&self, dependency: DependencyId) -> Option<Connection> {
        self.inner.read().connection_for(dependency).cloned()
    }

    /// Why `module` is part of the build: every connection currently
    /// targeting it, in insertion order.
    pub fn get_reasons(&self, module: ModuleId) -> Vec<Connection> {
        self.inner.read().reasons(module).cloned().collect()
    }

    pub fn has_reasons(&self, module: ModuleId) -> bool {
        self.inner.read().module_map.contains_key(&module)
    }

    pub fn reason_count(&self, module: ModuleId) -> usize {
        self.inner
            .read()
            .module_map
            .get(&module)
            .map_or(0, |reasons| reasons.len())
    }

    /// Distinct modules that reference `module` through a dependency, sorted.
    pub fn incoming_modules(&self, module: ModuleId) -> Vec<ModuleId> {
        let mut origins: Vec<ModuleId> = self
            .inner
            .read()
            .reasons(module)
            .filter_map(|connection| connection.origin_module)
            .collect();
        origins.sort_unstable();
        origins.dedup();
        origins
    }

    /// The metadata record for `key`, created empty on first access.
    ///
    /// Every call with the same key returns a handle to the same record.
    pub fn get_meta(&self, key: impl Into<MetaKey>) -> MetaRecord {
        let key = key.into();
        {
            let inner = self.inner.read();
            if let Some(record) = inner.meta.get(&key) {
                return record.clone();
            }
        }
        self.inner.write().meta.get_or_create(key)
    }

    /// The metadata record for `key` if one was created, without creating it.
    pub fn peek_meta(&self, key: impl Into<MetaKey>) -> Option<MetaRecord> {
        self.inner.read().meta.get(&key.into()).cloned()
    }
}
