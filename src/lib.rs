//! # graft
//!
//! An incremental encoder for immutable JSON-like value trees.
//!
//! ## What is graft?
//!
//! graft lets a value describe itself to an encoder, scalar by scalar and
//! nested container by nested container, and accumulates those descriptions
//! into a single immutable [`Value`] tree, without requiring the caller to build the
//! tree up front and without deep-copying intermediate results. A parent slot
//! and the container view currently filling it share storage, a slot written
//! as one opaque value can later open up into a container without losing
//! content, and a slot can be reserved now and filled much later in the same
//! traversal.
//!
//! ## Key Features
//!
//! - **Incremental**: values write themselves field by field; the finished
//!   tree is produced by one terminal conversion
//! - **No copy-back**: container views alias their parent's storage, so
//!   nested writes are immediately visible
//! - **Promotion**: a slot holding an opaque object or array value opens up
//!   in place when a container view is requested for it
//! - **Reserved slots**: claim a position now, fill it later through a
//!   separately held encoder
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! graft = "0.1"
//! ```
//!
//! ### Encoding a struct
//!
//! ```rust
//! use graft::{to_string, Encode, Encoder, Result};
//!
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! impl Encode for User {
//!     fn encode(&self, encoder: &mut Encoder) -> Result<()> {
//!         let mut obj = encoder.object();
//!         obj.encode_i64("id", self.id as i64);
//!         obj.encode_str("name", &self.name);
//!         obj.encode_bool("active", self.active);
//!         Ok(())
//!     }
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let rendered = to_string(&user).unwrap();
//! assert_eq!(rendered, r#"{"id":123,"name":"Alice","active":true}"#);
//! ```
//!
//! ### Dynamic values with the graft! macro
//!
//! ```rust
//! use graft::{graft, Value};
//!
//! let data = graft!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "encoding"]
//! });
//!
//! if let Value::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ### Reserved slots
//!
//! A container can claim a position and hand the encoder for it to unrelated
//! code, which fills it later in the same traversal:
//!
//! ```rust
//! use graft::{graft, Encoder};
//!
//! let mut encoder = Encoder::new();
//! let mut obj = encoder.object();
//! let mut detail = obj.reserve("detail");
//! obj.encode_i64("id", 7);
//!
//! // ... much later, still within the same encoding:
//! detail.scalar().put_str("filled in afterwards");
//!
//! assert_eq!(
//!     encoder.finish().unwrap(),
//!     graft!({"id": 7, "detail": "filled in afterwards"})
//! );
//! ```
//!
//! ## Error Handling
//!
//! Data-dependent failures (a nested value that encodes nothing, an unsigned
//! integer beyond the signed 64-bit range) are ordinary [`Error`] results
//! carrying the tree [`Path`] of the offending slot. Contract violations in
//! an [`Encode`] implementation (mixing container kinds at one slot, writing
//! twice through the single-value view) panic instead: they are bugs in the
//! implementation, not bad data.
//!
//! ## Concurrency
//!
//! A single encoding is a single-threaded, strictly nested computation.
//! Container views share storage through reference-counted cells, which is
//! exactly why an encoder must not cross threads; there is no locking and no
//! suspension anywhere.

pub mod encode;
pub mod error;
pub mod macros;
pub mod map;
mod node;
pub mod path;
pub mod render;
pub mod value;

pub use encode::{ArrayEncoder, Context, Encode, Encoder, ObjectEncoder, ScalarEncoder};
pub use error::{Error, Result};
pub use map::ValueMap;
pub use path::{Path, PathSegment, BASE_KEY};
pub use render::RenderOptions;
pub use value::{Number, Value};

use std::io;

/// Encodes any `T: Encode` into a resolved [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use graft::to_value;
///
/// let value = to_value(&vec![1, 2, 3]).unwrap();
/// assert!(value.is_array());
/// ```
///
/// # Errors
///
/// Returns an error if the value encodes nothing or contains an out-of-range
/// unsigned integer.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Encode,
{
    to_value_with_context(value, Context::new())
}

/// Encodes any `T: Encode` into a [`Value`] tree, making `context` available
/// to every nested encoder.
///
/// # Examples
///
/// ```rust
/// use graft::{to_value_with_context, Context, Encode, Encoder, Result};
///
/// struct Payload;
///
/// impl Encode for Payload {
///     fn encode(&self, encoder: &mut Encoder) -> Result<()> {
///         let verbose = *encoder.context().get::<bool>("verbose").unwrap_or(&false);
///         let mut obj = encoder.object();
///         if verbose {
///             obj.encode_str("detail", "everything");
///         }
///         obj.encode_bool("ok", true);
///         Ok(())
///     }
/// }
///
/// let mut context = Context::new();
/// context.insert("verbose", true);
///
/// let value = to_value_with_context(&Payload, context).unwrap();
/// assert!(value.as_object().unwrap().contains_key("detail"));
/// ```
///
/// # Errors
///
/// Returns an error if the value encodes nothing or contains an out-of-range
/// unsigned integer.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value_with_context<T>(value: &T, context: Context) -> Result<Value>
where
    T: ?Sized + Encode,
{
    let mut encoder = Encoder::with_context(context);
    value.encode(&mut encoder)?;
    encoder.finish()
}

/// Encodes any `T: Encode` and renders the result as a compact string.
///
/// # Examples
///
/// ```rust
/// use graft::to_string;
///
/// let rendered = to_string(&vec![1, 2, 3]).unwrap();
/// assert_eq!(rendered, "[1,2,3]");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Encode,
{
    to_string_with_options(value, RenderOptions::default())
}

/// Encodes any `T: Encode` and renders the result pretty-printed.
///
/// # Errors
///
/// Returns an error if encoding fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Encode,
{
    to_string_with_options(value, RenderOptions::pretty())
}

/// Encodes any `T: Encode` and renders the result with custom options.
///
/// # Examples
///
/// ```rust
/// use graft::{to_string_with_options, RenderOptions};
///
/// let options = RenderOptions::pretty().with_indent(4);
/// let rendered = to_string_with_options(&vec![1], options).unwrap();
/// assert_eq!(rendered, "[\n    1\n]");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: RenderOptions) -> Result<String>
where
    T: ?Sized + Encode,
{
    let tree = to_value(value)?;
    Ok(render::render(&tree, &options))
}

/// Encodes any `T: Encode` and writes the compact rendering to `writer`.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Encode,
{
    to_writer_with_options(writer, value, RenderOptions::default())
}

/// Encodes any `T: Encode` and writes the rendering to `writer` with custom
/// options.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: RenderOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Encode,
{
    let tree = to_value(value)?;
    render::render_to_writer(writer, &tree, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i32,
        y: i32,
    }

    impl Encode for Point {
        fn encode(&self, encoder: &mut Encoder) -> Result<()> {
            let mut obj = encoder.object();
            obj.encode_i64("x", self.x as i64);
            obj.encode_i64("y", self.y as i64);
            Ok(())
        }
    }

    #[test]
    fn test_to_value() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();
        assert_eq!(value, graft!({"x": 1, "y": 2}));
    }

    #[test]
    fn test_to_string() {
        let rendered = to_string(&Point { x: 1, y: 2 }).unwrap();
        assert_eq!(rendered, r#"{"x":1,"y":2}"#);
    }

    #[test]
    fn test_to_string_pretty() {
        let rendered = to_string_pretty(&Point { x: 1, y: 2 }).unwrap();
        assert_eq!(rendered, "{\n  \"x\": 1,\n  \"y\": 2\n}");
    }

    #[test]
    fn test_to_writer() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
        assert_eq!(buffer, br#"{"x":1,"y":2}"#);
    }

    #[test]
    fn test_primitives_to_value() {
        assert_eq!(to_value(&true).unwrap(), graft!(true));
        assert_eq!(to_value(&42i64).unwrap(), graft!(42));
        assert_eq!(to_value(&3.5f64).unwrap(), graft!(3.5));
        assert_eq!(to_value("hello").unwrap(), graft!("hello"));
        assert_eq!(to_value(&None::<i32>).unwrap(), Value::Null);
    }
}
