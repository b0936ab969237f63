//! Identity of a source, shared by every snapshot it produces.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

/// Display name given to sources that have no better one
pub const STRING_SOURCE_NAME: &str = "<string source>";

/// Opaque handle to the module a source belongs to.
///
/// Modules carry compilation configuration that lives outside this crate.
/// The handle is never inspected here; owners get their type back with
/// [`Module::downcast_ref`].
#[derive(Clone)]
pub struct Module(Arc<dyn Any + Send + Sync>);

impl Module {
    pub fn new<T: Any + Send + Sync>(config: T) -> Self {
        Self(Arc::new(config))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Check whether both handles point at the same module
    pub fn ptr_eq(&self, other: &Module) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Module(..)")
    }
}

/// Name and owning module of a source
#[derive(Debug, Clone)]
pub struct SourceInfo {
    name: SmolStr,
    module: Option<Module>,
}

impl SourceInfo {
    pub fn new(name: impl Into<SmolStr>, module: Option<Module>) -> Self {
        Self {
            name: name.into(),
            module,
        }
    }

    pub(crate) fn placeholder() -> Self {
        Self::new(STRING_SOURCE_NAME, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> Option<&Module> {
        self.module.as_ref()
    }
}
