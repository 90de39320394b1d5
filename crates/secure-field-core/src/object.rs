//! Object identity.
//!
//! Every widget carries an [`ObjectId`] so that hosts can tell two instances
//! apart. Focus chains, for example, are lists of object IDs; a toggle button
//! that is torn down and rebuilt gets a new ID and therefore shows up as a
//! different participant in the chain.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::logging::targets;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// A process-unique identifier for a widget instance.
///
/// IDs are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate a fresh identifier.
    pub fn next() -> Self {
        let id = Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed));
        tracing::trace!(target: targets::OBJECT, id = id.0, "allocated object id");
        id
    }

    /// The raw numeric value.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Implemented by anything with a stable identity.
pub trait Object {
    /// This object's identifier.
    fn object_id(&self) -> ObjectId;
}
