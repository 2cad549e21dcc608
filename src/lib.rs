//! # Relink
//! Object registry with identity handles and deferred reference resolution
//! for object graphs reconstructed from persisted data.
//!
//! Live objects are tracked under a process-unique 64-bit identity.
//! References between objects are [`ObjectHandle`] values carrying an
//! identity rather than ownership links, and dereferencing one is always a
//! lookup through the [`ObjectRegistry`]. During deserialization, handles
//! whose targets have not been rebuilt yet are queued with the registry and
//! resolved in a single pass once the whole graph exists, with persisted
//! identities remapped to the identities actually assigned on
//! reconstruction.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod handle;
mod object_id;
mod registry;

pub use handle::ObjectHandle;
pub use object_id::ObjectId;
pub use registry::{ObjectRegistry, RegistryError, ResolutionReport};
