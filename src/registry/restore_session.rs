use std::{
    collections::HashMap,
    rc::{Rc, Weak},
};

use log::warn;

use crate::{ObjectHandle, ObjectId};

use super::error::ResolutionReport;

/// State of the single in-progress deserialization session.
///
/// Exists only between the start and end notifications. The remap table and
/// the unresolved-handle queue live here rather than on the registry so that
/// dropping the session clears them unconditionally, whichever way the
/// session ends.
pub(crate) struct RestoreSession<T> {
    root: Weak<T>,
    id_remap: HashMap<ObjectId, ObjectId>,
    unresolved_handles: Vec<ObjectHandle>,
}

impl<T> RestoreSession<T> {
    pub(crate) fn new(root: &Rc<T>) -> Self {
        Self {
            root: Rc::downgrade(root),
            id_remap: HashMap::new(),
            unresolved_handles: Vec::new(),
        }
    }

    pub(crate) fn root_is(&self, object: &Rc<T>) -> bool {
        match self.root.upgrade() {
            Some(root) => Rc::ptr_eq(&root, object),
            None => false,
        }
    }

    pub(crate) fn register_id_mapping(&mut self, deserialized_id: ObjectId, actual_id: ObjectId) {
        self.id_remap.insert(deserialized_id, actual_id);
    }

    pub(crate) fn queue_unresolved_handle(&mut self, handle: ObjectHandle) {
        self.unresolved_handles.push(handle);
    }

    /// Resolves every queued handle against the now-complete object table,
    /// in queue order. A handle whose target cannot be found keeps its
    /// persisted identity and is reported as dangling; the pass always runs
    /// to completion.
    pub(crate) fn resolve_handles(self, objects: &HashMap<ObjectId, Weak<T>>) -> ResolutionReport {
        let mut report = ResolutionReport::default();

        for handle in self.unresolved_handles {
            let deserialized_id = handle.id();
            if deserialized_id.is_null() {
                // A serialized null reference is data, not damage.
                continue;
            }

            // Identities may be reassigned on reconstruction. No remap entry
            // means the identity survived unchanged.
            let actual_id = match self.id_remap.get(&deserialized_id) {
                Some(actual_id) => *actual_id,
                None => deserialized_id,
            };

            let target_alive = objects
                .get(&actual_id)
                .map_or(false, |weak| weak.upgrade().is_some());

            if target_alive {
                handle.repoint(actual_id);
                report.resolved += 1;
            } else {
                warn!(
                    "Could not resolve handle to deserialized object id {} (actual id {}): no live object is registered under it",
                    deserialized_id, actual_id
                );
                report.dangling += 1;
            }
        }

        report
    }
}
