//! Object references that cross the interop boundary by identity.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Handle to an object living in the native runtime's heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub usize);

/// Shared reference to an object owned by the foreign side.
///
/// The registry never looks inside the referent. Equality is pointer identity,
/// so two references compare equal only when they name the same object.
#[derive(Clone)]
pub struct ForeignRef(Arc<dyn Any + Send + Sync>);

impl ForeignRef {
    pub fn new<T: Any + Send + Sync>(object: T) -> Self {
        Self(Arc::new(object))
    }

    #[inline]
    pub fn ptr_eq(&self, other: &ForeignRef) -> bool {
        self.addr() == other.addr()
    }

    /// Address of the referent, stable for the reference's lifetime.
    #[inline]
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl PartialEq for ForeignRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ForeignRef {}

impl fmt::Debug for ForeignRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ForeignRef({:#x})", self.addr())
    }
}
