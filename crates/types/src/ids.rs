//! Identity of the elements flowing through the layout engine.
//!
//! The engine never looks inside an element. It only needs a stable identity
//! to tell elements apart within a pass, so hosts map whatever key they use
//! (database id, index, hash of a UUID) onto an [`ElementId`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable, unique identifier for one element of a flow sequence.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// Creates a new ElementId from a raw key
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw key
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ElementId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<usize> for ElementId {
    fn from(index: usize) -> Self {
        Self(index as u64)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
