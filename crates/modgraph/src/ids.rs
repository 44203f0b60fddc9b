//! Opaque entity handles.
//!
//! Modules and dependencies are owned by the resolver and the parser. The
//! graph only ever sees their handles, and a handle *is* the identity: two
//! entities are the same iff their raw values match, regardless of what the
//! owning subsystem stores behind them.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$attr:meta])* $name:ident, $prefix:literal) => {
        $(#[$attr])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw handle value allocated by the owning subsystem.
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// The raw handle value.
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Handle of one compiled unit in the build.
    ModuleId,
    "module"
);

entity_id!(
    /// Handle of one reference site inside a module (e.g. one import statement).
    DependencyId,
    "dep"
);

entity_id!(
    /// Handle of a connection. Allocated by the graph, sequential per instance.
    ConnectionId,
    "conn"
);

/// Key of a metadata record.
///
/// Anything a pass can name gets a record: the graph's own entities, or a
/// caller-defined identity via [`MetaKey::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetaKey {
    Module(ModuleId),
    Dependency(DependencyId),
    Connection(ConnectionId),
    Custom(String),
}

impl From<ModuleId> for MetaKey {
    fn from(id: ModuleId) -> Self {
        Self::Module(id)
    }
}

impl From<DependencyId> for MetaKey {
    fn from(id: DependencyId) -> Self {
        Self::Dependency(id)
    }
}

impl From<ConnectionId> for MetaKey {
    fn from(id: ConnectionId) -> Self {
        Self::Connection(id)
    }
}

impl From<String> for MetaKey {
    fn from(key: String) -> Self {
        Self::Custom(key)
    }
}

impl From<&str> for MetaKey {
    fn from(key: &str) -> Self {
        Self::Custom(key.to_string())
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module(id) => id.fmt(f),
            Self::Dependency(id) => id.fmt(f),
            Self::Connection(id) => id.fmt(f),
            Self::Custom(key) => write!(f, "custom:{key}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_entity_prefix() {
        assert_eq!(ModuleId::from_raw(3).to_string(), "module#3");
        assert_eq!(DependencyId::from_raw(7).to_string(), "dep#7");
        assert_eq!(ConnectionId::from_raw(0).to_string(), "conn#0");
        assert_eq!(MetaKey::from("entry").to_string(), "custom:entry");
    }

    #[test]
    fn module_and_dependency_keys_do_not_collide() {
        let module: MetaKey = ModuleId::from_raw(1).into();
        let dependency: MetaKey = DependencyId::from_raw(1).into();
        assert_ne!(module, dependency);
    }

    #[test]
    fn handles_serialize_as_raw_numbers() {
        let json = serde_json::to_string(&ModuleId::from_raw(42)).unwrap();
        assert_eq!(json, "42");
        let back: ModuleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ModuleId::from_raw(42));
    }
}
