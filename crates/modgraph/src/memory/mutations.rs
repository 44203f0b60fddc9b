//! Mutation methods for ModuleGraph.

use tracing::{debug, trace, warn};

use super::super::{Connection, ConnectionId, DependencyId, ModuleId};
use super::graph::ModuleGraph;
use crate::{Error, Result};

impl ModuleGraph {
    /// Record that `dependency` (found in `origin_module`) resolved to `module`.
    ///
    /// Creates the dependency's only connection. A dependency that already
    /// has one is rejected with [`Error::DuplicateReference`] and the graph
    /// is left untouched.
    pub fn set_resolved_module(
        &self,
        origin_module: Option<ModuleId>,
        dependency: DependencyId,
        module: ModuleId,
    ) -> Result<ConnectionId> {
        let mut inner = self.inner.write();

        if let Some(&existing) = inner.dependency_map.get(&dependency) {
            warn!(%dependency, connection = %existing, "dependency is already resolved");
            return Err(Error::DuplicateReference(dependency));
        }

        let id = inner.allocate_connection_id();
        inner.insert(Connection::new(
            id,
            origin_module,
            Some(dependency),
            module,
            None,
        ));
        inner.dependency_map.insert(dependency, id);

        debug!(%dependency, %module, connection = %id, "resolved dependency");
        Ok(id)
    }

    /// Point the connection of `dependency` at `module`.
    ///
    /// Moves the connection between reverse sets under one write lock.
    /// The original resolution stays as it was. Retargeting to the current
    /// target is a no-op.
    pub fn update_module(&self, dependency: DependencyId, module: ModuleId) -> Result<()> {
        let mut inner = self.inner.write();

        let Some(&id) = inner.dependency_map.get(&dependency) else {
            warn!(%dependency, "cannot retarget unresolved dependency");
            return Err(Error::UnknownReference(dependency));
        };
        let Some(connection) = inner.connections.get_mut(&id) else {
            return Err(Error::UnknownReference(dependency));
        };

        let previous = connection.module;
        if previous == module {
            trace!(%dependency, %module, "retarget is a no-op");
            return Ok(());
        }
        connection.module = module;

        inner.detach(previous, id);
        inner.attach(module, id);

        debug!(%dependency, from = %previous, to = %module, "retargeted dependency");
        Ok(())
    }

    /// Record a reason for including `module` that no dependency accounts for
    /// (entry points, forced inclusion).
    ///
    /// The connection only shows up in [`get_reasons`](Self::get_reasons).
    pub fn add_extra_reason(
        &self,
        module: ModuleId,
        explanation: impl Into<String>,
    ) -> ConnectionId {
        let explanation = explanation.into();
        let mut inner = self.inner.write();

        let id = inner.allocate_connection_id();
        debug!(%module, connection = %id, %explanation, "added extra reason");
        inner.insert(Connection::new(id, None, None, module, Some(explanation)));
        id
    }

    /// Drop the connection of `dependency` from both indexes and return it.
    ///
    /// A module left without reasons loses its reverse-index entry entirely.
    /// Metadata recorded for the dependency or the connection is kept.
    pub fn remove_connection(&self, dependency: DependencyId) -> Result<Connection> {
        let mut inner = self.inner.write();

        let Some(id) = inner.dependency_map.remove(&dependency) else {
            warn!(%dependency, "cannot remove unresolved dependency");
            return Err(Error::UnknownReference(dependency));
        };
        let Some(connection) = inner.connections.remove(&id) else {
            return Err(Error::UnknownReference(dependency));
        };
        inner.detach(connection.module, id);

        debug!(%dependency, module = %connection.module, connection = %id, "removed connection");
        Ok(connection)
    }
}
