use thiserror::Error;

/// Errors that can occur during deserialization-session bracketing.
///
/// Every variant indicates a caller-contract violation, not a data problem.
/// Broken references inside persisted data are reported through
/// [`ResolutionReport`](crate::ResolutionReport) and log diagnostics
/// instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A deserialization session was started while another is in progress
    #[error("Deserialization already active: a session was started while another is in progress")]
    DeserializationAlreadyActive,

    /// A session operation was called with no session in progress
    #[error("No active deserialization: operation '{operation}' requires a session started via notify_deserialization_started")]
    NoActiveDeserialization { operation: &'static str },

    /// The object passed to the end notification did not start the session
    #[error("Deserialization root mismatch: the object ending the session is not the one that started it")]
    DeserializationRootMismatch,
}

/// Outcome of the resolution pass run when a deserialization session ends.
///
/// Dangling handles are a recoverable diagnostic: the persisted data held a
/// reference to an object that was never reconstructed. Each one is also
/// logged individually as it is encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolutionReport {
    /// Queued handles repointed at a live object.
    pub resolved: usize,
    /// Queued handles whose target could not be found, left unresolved.
    pub dangling: usize,
}
