//! # Lazy, Composable Sequence Decorators
//!
//! This library wraps iteration primitives in small, immutable decorator
//! objects instead of static utility functions. Every type does one thing:
//! it holds an inner sequence and derives its own behavior from it on
//! demand.
//!
//! ## Core Protocol
//!
//! 1. **Sequences are replayable**: asking a [`Sequence`] for a cursor
//!    always builds a fresh one; nothing is consumed until the caller pulls
//! 2. **Decorators compose**: filter, map, skip, join, cycle, sort and the
//!    rest each wrap another sequence and delegate
//! 3. **Memoization is explicit**: [`Sticky`] drains its origin at most
//!    once, then replays the snapshot forever
//! 4. **Thread safety is explicit**: [`Synced`] and [`SharedCursor`] are
//!    the only concurrency mechanisms; plain decorators are single-threaded
//!
//! ## Usage Example
//!
//! ```
//! use sequin::{SequenceOf, SequenceExt};
//!
//! let words = SequenceOf::from(vec!["hello", "world", "a"]);
//! let long = words.filtered(|w: &&str| w.len() > 4);
//! assert_eq!(long.length(), 2);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements one layer of the decorator protocol
pub mod cursor;   // Composed iterator primitives
pub mod list;     // Read-only list views over sequences
pub mod map;      // Read-only map views over pair sequences
pub mod memo;     // One-shot materialization ("sticky") wrappers
pub mod sequence; // The Sequence trait and its decorator family
pub mod sync;     // Lock-guarded sequences and shared cursors

// Re-exports for convenience
pub use cursor::{
    CycledCursor, JoinedCursor, MatchedCursor, PartitionedCursor, RangedCursor, Strict,
    WindowedCursor,
};
pub use list::{SeqList, StickyList};
pub use map::{SeqMap, StickyMap};
pub use memo::{Sticky, TrySticky};
pub use sequence::{
    Chained, Cycled, Distinct, Endless, Filtered, FnSequence, Joined, Limited, Mapped, Matched,
    NoNulls, Partitioned, Ranged, Repeated, Reversed, Sequence, SequenceExt, SequenceOf, Shuffled,
    Skipped, Sorted, SortedBy, Windowed, Zipped,
};
pub use sync::{SharedCursor, Synced};

use thiserror::Error;

/// Errors raised by cursors, decorators, and container views.
///
/// Every error propagates synchronously to the immediate caller of the
/// failing operation; no decorator swallows, logs-and-drops, or retries
/// internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A strict cursor was forced past its last element.
    #[error("cursor exhausted")]
    Exhausted,

    /// A mutating operation was invoked on a read-only view.
    #[error("unsupported operation `{0}` on a read-only view")]
    ReadOnly(&'static str),

    /// A construction-time parameter was semantically invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two matched sequences failed the correlation predicate.
    #[error("paired elements fell out of correlation at position {position}")]
    Mismatch {
        /// Zero-based position of the offending pair.
        position: usize,
    },

    /// Two matched sequences disagree in length.
    #[error("sequence lengths diverge: one side exhausted at position {position}")]
    SizeMismatch {
        /// Zero-based position at which one side ran dry.
        position: usize,
    },

    /// An absent element was encountered where one is disallowed.
    #[error("missing element at position {position}")]
    NullElement {
        /// Zero-based position of the absent element.
        position: usize,
    },

    /// An index was outside the bounds of a list view.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the view at query time.
        len: usize,
    },

    /// A positional lookup without a fallback ran past the end.
    #[error("no element at position {position}")]
    NotFound {
        /// Requested position.
        position: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
