use serde::Serialize;

use super::{ConnectionId, DependencyId, ModuleId};

/// An edge of the module graph: who referenced, through what, pointing where.
///
/// Values handed out by the graph are snapshots. Only the graph creates
/// connections, and only its current target (`module`) ever changes.
#[derive(Debug, Clone, Serialize)]
pub struct Connection {
    pub(crate) id: ConnectionId,
    pub(crate) origin_module: Option<ModuleId>,
    pub(crate) dependency: Option<DependencyId>,
    pub(crate) resolved_module: ModuleId,
    pub(crate) module: ModuleId,
    pub(crate) explanation: Option<String>,
}

impl Connection {
    pub(crate) fn new(
        id: ConnectionId,
        origin_module: Option<ModuleId>,
        dependency: Option<DependencyId>,
        module: ModuleId,
        explanation: Option<String>,
    ) -> Self {
        Self {
            id,
            origin_module,
            dependency,
            resolved_module: module,
            module,
            explanation,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// The referencing module, if any.
    pub fn origin_module(&self) -> Option<ModuleId> {
        self.origin_module
    }

    /// The referencing dependency. `None` for extra reasons.
    pub fn dependency(&self) -> Option<DependencyId> {
        self.dependency
    }

    /// The module the dependency originally resolved to. Never changes.
    pub fn resolved_module(&self) -> ModuleId {
        self.resolved_module
    }

    /// The module currently targeted (may differ after a retarget).
    pub fn module(&self) -> ModuleId {
        self.module
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// True for synthetic inclusion reasons (entry points, forced inclusion).
    pub fn is_extra_reason(&self) -> bool {
        self.origin_module.is_none() && self.dependency.is_none()
    }
}
