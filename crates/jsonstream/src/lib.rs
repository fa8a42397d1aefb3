//! An incremental JSON decoder.
//!
//! JSON text arrives in arbitrary-sized chunks; each fully-decoded leaf value
//! is handed to a callback as soon as it is recognized, addressed by its
//! structural path, without buffering the whole document or reparsing on each
//! chunk.
//!
//! ```rust
//! use jsonstream::{Decoder, Value};
//!
//! let mut decoder = Decoder::new();
//! let mut seen = Vec::new();
//!
//! for chunk in [r#"{"a": 1, "#, r#""b": {"c": 2}}"#] {
//!     decoder.write(chunk)?;
//!     decoder.read(|path, value| seen.push((path.to_vec(), value)))?;
//! }
//! decoder.end();
//! let exhausted = !decoder.read(|path, value| seen.push((path.to_vec(), value)))?;
//!
//! assert!(exhausted);
//! assert_eq!(
//!     seen,
//!     vec![
//!         (jsonstream::path!["a"], Value::Integer(1)),
//!         (jsonstream::path!["b", "c"], Value::Integer(2)),
//!     ]
//! );
//! # Ok::<(), jsonstream::DecodeError>(())
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod chunk_utils;
mod decoder;
mod error;
mod escape_buffer;
mod path;
mod token;
mod tokenizer;
mod value;

#[cfg(test)]
mod tests;

pub use chunk_utils::{produce_chunks, produce_prefixes};
pub use decoder::Decoder;
pub use error::DecodeError;
pub use path::{PathSegment, PathSegmentFrom};
pub use value::Value;

#[doc(hidden)]
pub use alloc::vec;

/// Macro to build a `Vec<PathSegment>` from a heterogeneous list of keys and
/// indices.
///
/// ```rust
/// extern crate alloc;
/// # use jsonstream::{path, PathSegment};
/// let p = path![0, "foo", 2];
/// assert_eq!(
///     p,
///     vec![
///         PathSegment::Index(0),
///         PathSegment::Key("foo".into()),
///         PathSegment::Index(2)
///     ]
/// );
/// ```
#[macro_export]
macro_rules! path {
    ( $( $elem:expr ),* $(,)? ) => {{
        use $crate::PathSegmentFrom;
        $crate::vec![$($crate::PathSegment::from_path_segment($elem)),*]
    }};
}
