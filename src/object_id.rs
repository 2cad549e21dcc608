use std::fmt;

/// Identity of a registered object.
///
/// `0` is reserved as the null sentinel and is never allocated. Live
/// identities are handed out by the registry, strictly increasing from 1,
/// and are never reused within a process lifetime, even after the object
/// they named has been unregistered.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ObjectId(u64);

impl ObjectId {
    /// The reserved "no object" identity.
    pub const NULL: ObjectId = ObjectId(0);

    pub fn from_u64(value: u64) -> Self {
        ObjectId(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
