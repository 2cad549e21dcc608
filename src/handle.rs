use std::{
    cell::Cell,
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
};

use crate::{ObjectId, ObjectRegistry};

/// Copyable weak reference to a registered object.
///
/// A handle carries an identity, never the object itself. Dereferencing it
/// is always a live lookup through the registry, so a handle outlives its
/// target being unregistered and simply resolves to nothing afterwards.
///
/// Clones of one handle share their identity cell. The registry relies on
/// this when it resolves handles queued during deserialization: repointing
/// the queued handle from a persisted identity to the identity actually
/// assigned on reconstruction updates every clone at once.
#[derive(Clone)]
pub struct ObjectHandle {
    id: Rc<Cell<ObjectId>>,
}

impl ObjectHandle {
    /// Handle referring to nothing.
    pub fn null() -> Self {
        Self::from_id(ObjectId::NULL)
    }

    /// Handle carrying `id`, which does not have to name a live object.
    ///
    /// Deserializers use this to build handles from persisted identities
    /// whose targets have not been reconstructed yet, then queue them with
    /// [`ObjectRegistry::register_unresolved_handle`].
    pub fn from_id(id: ObjectId) -> Self {
        Self {
            id: Rc::new(Cell::new(id)),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id.get()
    }

    pub fn is_null(&self) -> bool {
        self.id().is_null()
    }

    /// Looks up the object currently registered under this handle's
    /// identity. Returns `None` when the identity is not registered or its
    /// object has been dropped. The result is never cached: the target may
    /// be unregistered between calls.
    pub fn resolve<T>(&self, registry: &ObjectRegistry<T>) -> Option<Rc<T>> {
        registry.get(self.id())
    }

    pub(crate) fn repoint(&self, actual_id: ObjectId) {
        self.id.set(actual_id);
    }
}

impl Default for ObjectHandle {
    fn default() -> Self {
        Self::null()
    }
}

impl PartialEq for ObjectHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ObjectHandle {}

impl Hash for ObjectHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("ObjectHandle").field(&self.id()).finish()
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_null() {
            write!(f, "Object(null)")
        } else {
            write!(f, "Object({})", self.id())
        }
    }
}
