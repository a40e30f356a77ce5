//! Lazy, pull-driven streams
//!
//! Build a pipeline from a source, chain stages with [`StreamExt`] and
//! [`UtilityStreamExt`], then drive it with a terminal from
//! [`StreamTerminalExt`]. Nothing runs until the terminal pulls.

pub mod core;
pub mod constructors;
pub mod utility;
pub mod terminal;

// Re-export core types
pub use self::core::{
    Cursor, Stream, StreamExt,
    Map, Filter, FilterMap, Take, Skip,
    MapCursor, FilterCursor, FilterMapCursor, TakeCursor, SkipCursor,
};

// Re-export constructors
pub use constructors::{
    from_slice, from_map, from_iter, from_fn, from_cursor_fn, empty, once,
    FromSlice, FromMap, FromIter, FromFn, CursorFn, Empty, Once,
    SliceCursor, MapEntryCursor, IterCursor, EmptyCursor, OnceCursor,
};

// Re-export utility stages
pub use utility::{
    Cloned, Copied, Inspect, Enumerate, Fuse, UtilityStreamExt,
    ClonedCursor, CopiedCursor, InspectCursor, EnumerateCursor, FuseCursor,
};

// Re-export terminals
pub use terminal::{Iter, StreamTerminalExt};
