//! Composable lazy sequences.
//!
//! A [`Stream`](stream::Stream) is a reusable factory of cursors. Sources such
//! as [`from_slice`](stream::from_slice) and [`from_map`](stream::from_map)
//! borrow their data, stages such as `map` and `filter` wrap a stream without
//! touching it, and terminals such as `reduce` or `to_vec` pull one fresh
//! cursor to exhaustion.
//!
//! ```
//! use lazy_stream::prelude::*;
//!
//! let src = [1, 2, 3, 4, 5];
//! let sum = from_slice(&src)
//!     .copied()
//!     .filter(|x| *x < 3)
//!     .map(|x| x * x)
//!     .reduce(0, |acc, x| acc + x);
//! assert_eq!(sum, 5);
//! ```
//!
//! Caller closures are never caught or wrapped; a panic inside one unwinds
//! straight out of the terminal that was driving the pipeline.

pub mod error;
pub mod key_value;
pub mod stream;
pub mod stream_configuration;

pub use error::{StreamError, StreamResult};
pub use key_value::KeyValue;
pub use stream_configuration::{CollectConfig, DuplicateKeyPolicy};

pub mod prelude {
    pub use crate::key_value::KeyValue;
    pub use crate::stream::{
        Cursor, Stream, StreamExt, StreamTerminalExt, UtilityStreamExt,
        empty, from_cursor_fn, from_fn, from_iter, from_map, from_slice, once,
    };
}
