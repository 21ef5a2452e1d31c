use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a star. Positive, allocated monotonically by the scene.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarId(pub u64);

impl StarId {
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parity of the id, used as a deterministic tie-break by curve routing.
    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }
}

impl fmt::Debug for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "★{}", self.0)
    }
}

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StarId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Identifier of a connection. Time-based (milliseconds since the epoch),
/// bumped past the last allocated id so two connections created within
/// the same millisecond still differ.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(pub i64);

impl ConnectionId {
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~{}", self.0)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
