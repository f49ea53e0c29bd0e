//! Strongly typed activity identifiers.
//!
//! An `ActivityId` is handed out once, when an activity is created, and is
//! never derived from the activity's position or content.  Reordering an
//! itinerary therefore never changes which id refers to which activity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Opaque, stable identity of one itinerary entry.
    pub struct ActivityId(u32);
}

// ── IdAllocator ───────────────────────────────────────────────────────────────

/// Issues monotonically increasing `ActivityId`s.  Ids are never reused
/// within one allocator, even after the activity they named is removed.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// An allocator whose first id is one past `last`.
    ///
    /// Used when rebuilding a session from a snapshot so that new activities
    /// cannot collide with restored ones.
    pub fn resume_after(last: ActivityId) -> Self {
        Self { next: last.0.saturating_add(1) }
    }

    /// Hand out the next id.
    pub fn next_id(&mut self) -> ActivityId {
        let id = ActivityId(self.next);
        debug_assert!(self.next < u32::MAX, "activity id space exhausted");
        self.next = self.next.saturating_add(1);
        id
    }

    /// The id the next call to [`next_id`][Self::next_id] will return.
    pub fn peek(&self) -> ActivityId {
        ActivityId(self.next)
    }
}
