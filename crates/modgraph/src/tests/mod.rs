
use crate::{DependencyId, ModuleId};

pub(crate) fn module(raw: u32) -> ModuleId {
    ModuleId::from_raw(raw)
}

pub(crate) fn dep(raw: u32) -> DependencyId {
    DependencyId::from_raw(raw)
}
