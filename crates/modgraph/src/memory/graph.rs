use std::sync::Arc;

use indexmap::IndexSet;
use parking_lot::RwLock;
use rustc_hash::{FxBuildHasher, FxHashMap as HashMap};

use super::super::meta::MetaStore;
use super::super::{Connection, ConnectionId, DependencyId, ModuleId};

type ReasonSet = IndexSet<ConnectionId, FxBuildHasher>;

/// Index of resolved dependencies and the reasons each module is included.
///
/// Cloning is cheap and shares the underlying index: one instance per build
/// session, handed to every pass that needs it. Mutations take the write
/// lock for their whole duration, queries take the read lock.
#[derive(Debug, Clone)]
pub struct ModuleGraph {
    pub(super) inner: Arc<RwLock<GraphInner>>,
}

#[derive(Debug, Default)]
pub(super) struct GraphInner {
    pub(super) connections: HashMap<ConnectionId, Connection>,
    /// Forward index: at most one connection per dependency.
    pub(super) dependency_map: HashMap<DependencyId, ConnectionId>,
    /// Reverse index: connections currently targeting each module. Never
    /// holds an empty set.
    pub(super) module_map: HashMap<ModuleId, ReasonSet>,
    pub(super) meta: MetaStore,
    next_connection_id: u32,
}

impl GraphInner {
    pub(super) fn allocate_connection_id(&mut self) -> ConnectionId {
        let id = ConnectionId::from_raw(self.next_connection_id);
        self.next_connection_id += 1;
        id
    }

    pub(super) fn connection_for(&self, dependency: DependencyId) -> Option<&Connection> {
        self.dependency_map
            .get(&dependency)
            .and_then(|id| self.connections.get(id))
    }

    /// Insert a new connection into the connection table and the reverse index.
    pub(super) fn insert(&mut self, connection: Connection) {
        let id = connection.id;
        let module = connection.module;
        self.connections.insert(id, connection);
        self.attach(module, id);
    }

    pub(super) fn attach(&mut self, module: ModuleId, id: ConnectionId) {
        self.module_map.entry(module).or_default().insert(id);
    }

    /// Remove `id` from the reverse set of `module`, pruning the set once empty.
    pub(super) fn detach(&mut self, module: ModuleId, id: ConnectionId) {
        let now_empty = match self.module_map.get_mut(&module) {
            Some(reasons) => {
                reasons.shift_remove(&id);
                reasons.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.module_map.remove(&module);
        }
    }

    pub(super) fn reasons(&self, module: ModuleId) -> impl Iterator<Item = &Connection> {
        self.module_map
            .get(&module)
            .into_iter()
            .flatten()
            .filter_map(|id| self.connections.get(id))
    }
}
