mod error;
mod restore_session;

pub use error::{RegistryError, ResolutionReport};

use std::{
    collections::HashMap,
    rc::{Rc, Weak},
};

use crate::{ObjectHandle, ObjectId};

use restore_session::RestoreSession;

/// Central identity table for live objects, plus coordination of the single
/// in-progress deserialization session.
///
/// The registry associates identities with objects, it does not own them:
/// entries hold weak references, and an object dropped by its owner simply
/// stops resolving. Identities are allocated strictly increasing from 1 and
/// never reused. Value `0` is reserved for null handles.
///
/// Deserialization needs special handling because an object graph is rebuilt
/// in file order, not dependency order, so a reference may name an object
/// that does not exist yet. The driver brackets the rebuild with
/// [`notify_deserialization_started`](Self::notify_deserialization_started)
/// and [`notify_deserialization_ended`](Self::notify_deserialization_ended),
/// registers identity remaps and unresolved handles as it goes, and the
/// registry resolves the whole queue in one pass at the end bracket.
///
/// Access is single-threaded; the registry holds `Rc` internals and callers
/// needing cross-thread access must serialize externally.
pub struct ObjectRegistry<T> {
    next_id: u64,
    objects: HashMap<ObjectId, Weak<T>>,
    session: Option<RestoreSession<T>>,
}

impl<T> ObjectRegistry<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            objects: HashMap::new(),
            session: None,
        }
    }

    /// Assigns the next identity to `object` and returns a handle carrying
    /// it. Identities are never reused, even after unregistration, and are
    /// not rolled back if the caller later abandons the object.
    pub fn register(&mut self, object: &Rc<T>) -> ObjectHandle {
        let id = ObjectId::from_u64(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, Rc::downgrade(object));
        ObjectHandle::from_id(id)
    }

    /// Removes the association for the handle's identity. Removing an
    /// identity that is not registered is a no-op, which tolerates
    /// double-unregistration from teardown paths.
    pub fn unregister(&mut self, handle: &ObjectHandle) {
        self.objects.remove(&handle.id());
    }

    /// Looks up the object registered under `id`. Returns `None` when the
    /// identity is unknown, already unregistered, or its object has been
    /// dropped. A miss is a normal outcome, not an error.
    pub fn get(&self, id: ObjectId) -> Option<Rc<T>> {
        self.objects.get(&id)?.upgrade()
    }

    pub fn exists(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn deserialization_active(&self) -> bool {
        self.session.is_some()
    }

    /// Begins a deserialization session rooted at `root`. Must be paired
    /// with a [`notify_deserialization_ended`](Self::notify_deserialization_ended)
    /// call passing the same object.
    ///
    /// Sessions do not nest: starting while one is active is a caller bug
    /// and returns [`RegistryError::DeserializationAlreadyActive`], leaving
    /// the existing session untouched.
    pub fn notify_deserialization_started(&mut self, root: &Rc<T>) -> Result<(), RegistryError> {
        if self.session.is_some() {
            return Err(RegistryError::DeserializationAlreadyActive);
        }
        self.session = Some(RestoreSession::new(root));
        Ok(())
    }

    /// Ends the session started with `root` and resolves every queued
    /// handle against the now-complete object table.
    ///
    /// Session state is cleared even when `root` does not match the object
    /// that started the session, so a bracketing bug in the caller cannot
    /// leak remap entries or queued handles into a later session. On the
    /// mismatch path no resolution is attempted.
    pub fn notify_deserialization_ended(
        &mut self,
        root: &Rc<T>,
    ) -> Result<ResolutionReport, RegistryError> {
        let Some(session) = self.session.take() else {
            return Err(RegistryError::NoActiveDeserialization {
                operation: "notify_deserialization_ended",
            });
        };
        if !session.root_is(root) {
            return Err(RegistryError::DeserializationRootMismatch);
        }
        Ok(session.resolve_handles(&self.objects))
    }

    /// Records that the object persisted under `deserialized_id` has been
    /// assigned `actual_id` on reconstruction. Queued handles carrying
    /// `deserialized_id` are repointed to `actual_id` when the session
    /// ends. The mapping lives only as long as the session.
    pub fn register_deserialized_id(
        &mut self,
        deserialized_id: ObjectId,
        actual_id: ObjectId,
    ) -> Result<(), RegistryError> {
        let Some(session) = self.session.as_mut() else {
            return Err(RegistryError::NoActiveDeserialization {
                operation: "register_deserialized_id",
            });
        };
        session.register_id_mapping(deserialized_id, actual_id);
        Ok(())
    }

    /// Queues a handle whose target has not been reconstructed yet. The
    /// handle is resolved, together with everything else in the queue, when
    /// the session ends.
    pub fn register_unresolved_handle(
        &mut self,
        handle: ObjectHandle,
    ) -> Result<(), RegistryError> {
        let Some(session) = self.session.as_mut() else {
            return Err(RegistryError::NoActiveDeserialization {
                operation: "register_unresolved_handle",
            });
        };
        session.queue_unresolved_handle(handle);
        Ok(())
    }
}

impl<T> Default for ObjectRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
