//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys, heap
//! entries, and sorted collection elements without ceremony.  The inner
//! integer is `pub` to allow direct indexing into parallel `Vec`s via
//! `id.0 as usize`, but callers should prefer the `.index()` helper for
//! clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// A moving agent (a vehicle, or the carrier of a data unit).
    pub struct AgentId(u32);
}

typed_id! {
    /// A location node in the static topology (an intersection).
    pub struct NodeId(u32);
}

typed_id! {
    /// A directed edge of the topology.  Undirected links are stored as a
    /// pair of directed edges, so an `EdgeId` always has a definite direction.
    pub struct EdgeId(u32);
}
