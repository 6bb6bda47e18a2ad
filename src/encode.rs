//! Incremental encoding of self-describing values.
//!
//! The entry point is the [`Encode`] trait: a value describes itself, scalar
//! by scalar and container by container, to an [`Encoder`]. The encoder
//! accumulates those descriptions into a single tree without requiring the
//! caller to pre-build it and without deep-copying intermediate results:
//! a parent slot and the container view currently filling it share storage,
//! and the finished tree is produced by one recursive conversion at the end.
//!
//! ## Overview
//!
//! An [`Encoder`] offers three mutually exclusive views:
//!
//! - [`Encoder::object`] for string-keyed fields ([`ObjectEncoder`])
//! - [`Encoder::array`] for positional elements ([`ArrayEncoder`])
//! - [`Encoder::scalar`] for exactly one leaf value ([`ScalarEncoder`])
//!
//! A value uses one of them; mixing them, or writing two leaves through the
//! scalar view, is a bug in the value's own `Encode` implementation and
//! panics rather than returning an error.
//!
//! ## Usage
//!
//! ```rust
//! use graft::{graft, to_value, Encode, Encoder, Result};
//!
//! struct Server {
//!     host: String,
//!     port: u16,
//!     tags: Vec<String>,
//! }
//!
//! impl Encode for Server {
//!     fn encode(&self, encoder: &mut Encoder) -> Result<()> {
//!         let mut obj = encoder.object();
//!         obj.encode_str("host", &self.host);
//!         obj.encode_i64("port", self.port as i64);
//!         obj.encode("tags", &self.tags)?;
//!         Ok(())
//!     }
//! }
//!
//! let server = Server {
//!     host: "db1".to_string(),
//!     port: 5432,
//!     tags: vec!["primary".to_string()],
//! };
//!
//! let tree = to_value(&server).unwrap();
//! assert_eq!(tree, graft!({"host": "db1", "port": 5432, "tags": ["primary"]}));
//! ```
//!
//! ## Reserved slots
//!
//! [`ObjectEncoder::reserve`] and [`ArrayEncoder::reserve`] hand out an
//! [`Encoder`] bound to a slot that is claimed now and filled later, possibly
//! by unrelated code deeper in the same traversal. A reserved slot that is
//! never written resolves to an empty object.

use crate::error::{Error, Result};
use crate::node::{self, ArrayCell, Node, ObjectCell, PendingCell};
use crate::path::{Path, PathSegment, BASE_KEY};
use crate::value::{Number, Value};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

/// A value that can describe itself to an [`Encoder`].
///
/// Implementations choose exactly one of the encoder's three views per
/// encoding: an object, an array, or a single scalar. Leaf types write
/// through [`Encoder::scalar`]; composite types open a container and encode
/// their parts into it, recursing through [`ObjectEncoder::encode`] /
/// [`ArrayEncoder::push`] for parts that are themselves `Encode`.
pub trait Encode {
    /// Describes `self` to the given encoder.
    ///
    /// # Errors
    ///
    /// Returns an error when a part of the value cannot be represented (an
    /// out-of-range unsigned integer) or when a nested value encodes nothing.
    fn encode(&self, encoder: &mut Encoder) -> Result<()>;
}

/// An opaque bag of caller-supplied state, shared with every nested encoder.
///
/// The bag is handed in once at the top of an encoding and never inspected
/// by the encoder itself; `Encode` implementations read it to adjust their
/// own output (API versions, feature toggles, localization tables).
///
/// # Examples
///
/// ```rust
/// use graft::Context;
///
/// let mut context = Context::new();
/// context.insert("api_version", 3u32);
///
/// assert_eq!(context.get::<u32>("api_version"), Some(&3));
/// assert_eq!(context.get::<String>("api_version"), None);
/// assert_eq!(context.get::<u32>("missing"), None);
/// ```
#[derive(Clone, Default)]
pub struct Context {
    entries: HashMap<String, Rc<dyn Any>>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Context::default()
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn insert<T: Any>(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), Rc::new(value));
    }

    /// Returns the entry under `key` if it exists and has type `T`.
    #[must_use]
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key).and_then(|entry| entry.downcast_ref())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the context holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Where an encoder's single slot lives: owned locally, or inside a pending
/// cell some container reserved earlier.
enum Slot {
    Fresh(Option<Node>),
    Bound(PendingCell),
}

/// The root encoder for one value.
///
/// Created fresh at the top of an encoding (or for each nested value), or
/// bound to a reserved slot by [`ObjectEncoder::reserve`] /
/// [`ArrayEncoder::reserve`]. The value being encoded requests exactly one of
/// the three views; once its description is complete, [`Encoder::finish`]
/// resolves the accumulated tree into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use graft::{graft, Encoder};
///
/// let mut encoder = Encoder::new();
/// let mut arr = encoder.array();
/// arr.push_bool(true);
/// arr.push_null();
/// arr.push_str("x");
///
/// assert_eq!(encoder.finish().unwrap(), graft!([true, null, "x"]));
/// ```
pub struct Encoder {
    slot: Slot,
    path: Path,
    context: Rc<Context>,
}

impl Encoder {
    /// Creates a fresh root encoder with an empty context.
    #[must_use]
    pub fn new() -> Self {
        Encoder::with_context(Context::new())
    }

    /// Creates a fresh root encoder carrying `context`.
    #[must_use]
    pub fn with_context(context: Context) -> Self {
        Encoder {
            slot: Slot::Fresh(None),
            path: Path::root(),
            context: Rc::new(context),
        }
    }

    fn nested(path: Path, context: Rc<Context>) -> Self {
        Encoder {
            slot: Slot::Fresh(None),
            path,
            context,
        }
    }

    fn bound(cell: PendingCell, path: Path, context: Rc<Context>) -> Self {
        Encoder {
            slot: Slot::Bound(cell),
            path,
            context,
        }
    }

    /// The position of this encoder's slot in the overall tree.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The caller-supplied context shared across the whole encoding.
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Returns `true` once a value has been written into this encoder.
    ///
    /// A reserved slot that has merely been handed out, with nothing assigned
    /// yet, does not count as written.
    #[must_use]
    pub fn has_value(&self) -> bool {
        match &self.slot {
            Slot::Fresh(slot) => slot.is_some(),
            Slot::Bound(cell) => cell.borrow().is_some(),
        }
    }

    /// Opens the keyed view of this encoder's slot.
    ///
    /// An empty slot is initialized to an empty object; a slot holding an
    /// object (boxed or written earlier as one opaque value) is reused, so
    /// fields already present are kept.
    ///
    /// # Panics
    ///
    /// Panics if the slot already holds non-object content.
    pub fn object(&mut self) -> ObjectEncoder {
        let cell = match &mut self.slot {
            Slot::Fresh(slot) => node::request_object(slot, &self.path),
            Slot::Bound(cell) => {
                let cell = cell.clone();
                let mut inner = cell.borrow_mut();
                node::request_object(&mut inner, &self.path)
            }
        };
        ObjectEncoder {
            cell,
            path: self.path.clone(),
            context: self.context.clone(),
        }
    }

    /// Opens the positional view of this encoder's slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot already holds non-array content.
    pub fn array(&mut self) -> ArrayEncoder {
        let cell = match &mut self.slot {
            Slot::Fresh(slot) => node::request_array(slot, &self.path),
            Slot::Bound(cell) => {
                let cell = cell.clone();
                let mut inner = cell.borrow_mut();
                node::request_array(&mut inner, &self.path)
            }
        };
        ArrayEncoder {
            cell,
            path: self.path.clone(),
            context: self.context.clone(),
        }
    }

    /// Opens the single-value view of this encoder's slot.
    ///
    /// The view accepts at most one write for the lifetime of the encoder;
    /// see [`ScalarEncoder`].
    pub fn scalar(&mut self) -> ScalarEncoder<'_> {
        ScalarEncoder { encoder: self }
    }

    /// Resolves everything written through this encoder into the final
    /// immutable value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValue`] if nothing was ever written. (An
    /// encoder bound to a reserved slot is the exception: unfilled, it
    /// resolves to an empty object.)
    pub fn finish(self) -> Result<Value> {
        let Encoder { slot, path, .. } = self;
        match slot {
            Slot::Fresh(Some(node)) => Ok(node.resolve()),
            Slot::Fresh(None) => Err(Error::empty_value(path)),
            Slot::Bound(cell) => Ok(Node::Pending(cell).resolve()),
        }
    }

    fn occupied_kind(&self) -> Option<&'static str> {
        match &self.slot {
            Slot::Fresh(slot) => slot.as_ref().map(Node::kind_name),
            Slot::Bound(cell) => cell.borrow().as_ref().map(Node::kind_name),
        }
    }

    fn store_node(&mut self, node: Node) {
        match &mut self.slot {
            Slot::Fresh(slot) => *slot = Some(node),
            Slot::Bound(cell) => *cell.borrow_mut() = Some(node),
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder::new()
    }
}

/// Drives `value`'s self-description through a fresh encoder and returns the
/// node it produced.
fn drive<T: Encode + ?Sized>(value: &T, path: Path, context: Rc<Context>) -> Result<Node> {
    let mut encoder = Encoder::nested(path, context);
    value.encode(&mut encoder)?;
    let Encoder { slot, path, .. } = encoder;
    match slot {
        Slot::Fresh(Some(node)) => Ok(node),
        _ => Err(Error::empty_value(path)),
    }
}

/// Writes string-keyed fields into a shared object slot.
///
/// Obtained from [`Encoder::object`], [`ObjectEncoder::nested_object`] or
/// [`ArrayEncoder::nested_object`]. Writing the same key twice keeps the last
/// value; there is no duplicate-key error. The view and its parent slot
/// share storage, so every write is immediately visible in the tree without
/// a copy-back step.
pub struct ObjectEncoder {
    cell: ObjectCell,
    path: Path,
    context: Rc<Context>,
}

impl ObjectEncoder {
    fn insert(&mut self, key: String, node: Node) {
        self.cell.borrow_mut().insert(key, node);
    }

    /// The number of fields written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cell.borrow().len()
    }

    /// Returns `true` if no field has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cell.borrow().is_empty()
    }

    /// Writes a null under `key`.
    pub fn encode_null(&mut self, key: impl Into<String>) {
        self.insert(key.into(), Node::Leaf(Value::Null));
    }

    /// Writes a boolean under `key`.
    pub fn encode_bool(&mut self, key: impl Into<String>, value: bool) {
        self.insert(key.into(), Node::Leaf(Value::Bool(value)));
    }

    /// Writes a signed integer under `key`.
    pub fn encode_i64(&mut self, key: impl Into<String>, value: i64) {
        self.insert(key.into(), Node::Leaf(Value::Number(Number::Integer(value))));
    }

    /// Writes an unsigned integer under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IntegerOverflow`] if `value` exceeds `i64::MAX`;
    /// nothing is stored in that case.
    pub fn encode_u64(&mut self, key: impl Into<String>, value: u64) -> Result<()> {
        let key = key.into();
        if value > i64::MAX as u64 {
            return Err(Error::integer_overflow(
                value,
                self.path.child(PathSegment::Key(key)),
            ));
        }
        self.encode_i64(key, value as i64);
        Ok(())
    }

    /// Writes a double under `key`.
    pub fn encode_f64(&mut self, key: impl Into<String>, value: f64) {
        self.insert(key.into(), Node::Leaf(Value::Number(Number::Float(value))));
    }

    /// Writes an exact decimal under `key`.
    pub fn encode_decimal(&mut self, key: impl Into<String>, value: Decimal) {
        self.insert(key.into(), Node::Leaf(Value::Number(Number::Decimal(value))));
    }

    /// Writes a string under `key`.
    pub fn encode_str(&mut self, key: impl Into<String>, value: &str) {
        self.insert(key.into(), Node::Leaf(Value::String(value.to_string())));
    }

    /// Encodes an arbitrary value under `key` by driving its own
    /// self-description through a nested encoder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValue`] if `value` encodes nothing, or
    /// propagates any error its `Encode` implementation raises.
    pub fn encode<T: Encode + ?Sized>(&mut self, key: impl Into<String>, value: &T) -> Result<()> {
        let key = key.into();
        let child_path = self.path.child(PathSegment::Key(key.clone()));
        let node = drive(value, child_path, self.context.clone())?;
        self.insert(key, node);
        Ok(())
    }

    /// Opens a keyed container under `key`, created and stored immediately.
    ///
    /// If `key` already holds an object (boxed, or written earlier as one
    /// opaque value) that object's storage is reused and its fields are
    /// kept.
    ///
    /// # Panics
    ///
    /// Panics if `key` holds content that is not object-shaped.
    pub fn nested_object(&mut self, key: impl Into<String>) -> ObjectEncoder {
        let key = key.into();
        let path = self.path.child(PathSegment::Key(key.clone()));
        let cell = {
            let mut entries = self.cell.borrow_mut();
            match entries.get_mut(&key) {
                Some(node) => node::promote_object(node, &path),
                None => {
                    let cell = node::new_object_cell();
                    entries.insert(key, Node::Object(cell.clone()));
                    cell
                }
            }
        };
        ObjectEncoder {
            cell,
            path,
            context: self.context.clone(),
        }
    }

    /// Opens a positional container under `key`, created and stored
    /// immediately.
    ///
    /// # Panics
    ///
    /// Panics if `key` holds content that is not array-shaped.
    pub fn nested_array(&mut self, key: impl Into<String>) -> ArrayEncoder {
        let key = key.into();
        let path = self.path.child(PathSegment::Key(key.clone()));
        let cell = {
            let mut entries = self.cell.borrow_mut();
            match entries.get_mut(&key) {
                Some(node) => node::promote_array(node, &path),
                None => {
                    let cell = node::new_array_cell();
                    entries.insert(key, Node::Array(cell.clone()));
                    cell
                }
            }
        };
        ArrayEncoder {
            cell,
            path,
            context: self.context.clone(),
        }
    }

    /// Reserves the slot under `key` now and returns an encoder that fills
    /// it later.
    ///
    /// The returned encoder may be driven at any later point of the same
    /// traversal; the slot resolves to an empty object if it is never
    /// written. Reserving the same key again replaces the earlier
    /// reservation, discarding whatever was written through its handle.
    /// Holding two live handles for one key is unsupported.
    pub fn reserve(&mut self, key: impl Into<String>) -> Encoder {
        let key = key.into();
        let path = self.path.child(PathSegment::Key(key.clone()));
        let cell = node::new_pending_cell();
        self.insert(key, Node::Pending(cell.clone()));
        Encoder::bound(cell, path, self.context.clone())
    }

    /// Reserves the container's base slot (stored under [`BASE_KEY`]) and
    /// returns an encoder that fills it later.
    ///
    /// Layered values use this to let base content encode itself alongside
    /// the fields written here, without agreeing on a field name.
    pub fn reserve_base(&mut self) -> Encoder {
        let path = self.path.child(PathSegment::Base);
        let cell = node::new_pending_cell();
        self.insert(BASE_KEY.to_string(), Node::Pending(cell.clone()));
        Encoder::bound(cell, path, self.context.clone())
    }
}

/// Appends elements, in call order, into a shared array slot.
///
/// Obtained from [`Encoder::array`], [`ObjectEncoder::nested_array`] or
/// [`ArrayEncoder::nested_array`]. The element index recorded in diagnostic
/// paths is captured when each slot is created, so it keeps identifying the
/// same element as the array grows.
pub struct ArrayEncoder {
    cell: ArrayCell,
    path: Path,
    context: Rc<Context>,
}

impl ArrayEncoder {
    fn push_node(&mut self, node: Node) {
        self.cell.borrow_mut().push(node);
    }

    fn next_path(&self) -> Path {
        self.path.child(PathSegment::Index(self.len()))
    }

    /// The number of elements written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cell.borrow().len()
    }

    /// Returns `true` if no element has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cell.borrow().is_empty()
    }

    /// Appends a null.
    pub fn push_null(&mut self) {
        self.push_node(Node::Leaf(Value::Null));
    }

    /// Appends a boolean.
    pub fn push_bool(&mut self, value: bool) {
        self.push_node(Node::Leaf(Value::Bool(value)));
    }

    /// Appends a signed integer.
    pub fn push_i64(&mut self, value: i64) {
        self.push_node(Node::Leaf(Value::Number(Number::Integer(value))));
    }

    /// Appends an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IntegerOverflow`] if `value` exceeds `i64::MAX`;
    /// nothing is appended in that case.
    pub fn push_u64(&mut self, value: u64) -> Result<()> {
        if value > i64::MAX as u64 {
            return Err(Error::integer_overflow(value, self.next_path()));
        }
        self.push_i64(value as i64);
        Ok(())
    }

    /// Appends a double.
    pub fn push_f64(&mut self, value: f64) {
        self.push_node(Node::Leaf(Value::Number(Number::Float(value))));
    }

    /// Appends an exact decimal.
    pub fn push_decimal(&mut self, value: Decimal) {
        self.push_node(Node::Leaf(Value::Number(Number::Decimal(value))));
    }

    /// Appends a string.
    pub fn push_str(&mut self, value: &str) {
        self.push_node(Node::Leaf(Value::String(value.to_string())));
    }

    /// Appends an arbitrary value by driving its own self-description
    /// through a nested encoder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValue`] if `value` encodes nothing, or
    /// propagates any error its `Encode` implementation raises.
    pub fn push<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        let node = drive(value, self.next_path(), self.context.clone())?;
        self.push_node(node);
        Ok(())
    }

    /// Appends an empty keyed container and opens it.
    pub fn nested_object(&mut self) -> ObjectEncoder {
        let path = self.next_path();
        let cell = node::new_object_cell();
        self.push_node(Node::Object(cell.clone()));
        ObjectEncoder {
            cell,
            path,
            context: self.context.clone(),
        }
    }

    /// Appends an empty positional container and opens it.
    pub fn nested_array(&mut self) -> ArrayEncoder {
        let path = self.next_path();
        let cell = node::new_array_cell();
        self.push_node(Node::Array(cell.clone()));
        ArrayEncoder {
            cell,
            path,
            context: self.context.clone(),
        }
    }

    /// Reserves the next element slot now and returns an encoder that fills
    /// it later.
    ///
    /// The element keeps its position even if more elements are appended
    /// before the returned encoder is driven; unfilled, it resolves to an
    /// empty object.
    pub fn reserve(&mut self) -> Encoder {
        let path = self.next_path();
        let cell = node::new_pending_cell();
        self.push_node(Node::Pending(cell.clone()));
        Encoder::bound(cell, path, self.context.clone())
    }
}

/// Writes exactly one leaf value into the encoder's slot.
///
/// Obtained from [`Encoder::scalar`]. The slot accepts a single write for
/// the lifetime of its encoder; a second write panics, since it means the
/// value's `Encode` implementation described itself twice. A reserved slot
/// with nothing assigned yet counts as unwritten.
pub struct ScalarEncoder<'a> {
    encoder: &'a mut Encoder,
}

impl ScalarEncoder<'_> {
    fn store(&mut self, node: Node) {
        if let Some(kind) = self.encoder.occupied_kind() {
            panic!(
                "single-value slot at {} already holds {}",
                self.encoder.path, kind
            );
        }
        self.encoder.store_node(node);
    }

    /// Writes a null.
    pub fn put_null(&mut self) {
        self.store(Node::Leaf(Value::Null));
    }

    /// Writes a boolean.
    pub fn put_bool(&mut self, value: bool) {
        self.store(Node::Leaf(Value::Bool(value)));
    }

    /// Writes a signed integer.
    pub fn put_i64(&mut self, value: i64) {
        self.store(Node::Leaf(Value::Number(Number::Integer(value))));
    }

    /// Writes an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IntegerOverflow`] if `value` exceeds `i64::MAX`;
    /// the slot stays unwritten in that case.
    pub fn put_u64(&mut self, value: u64) -> Result<()> {
        if value > i64::MAX as u64 {
            return Err(Error::integer_overflow(value, self.encoder.path.clone()));
        }
        self.put_i64(value as i64);
        Ok(())
    }

    /// Writes a double.
    pub fn put_f64(&mut self, value: f64) {
        self.store(Node::Leaf(Value::Number(Number::Float(value))));
    }

    /// Writes an exact decimal.
    pub fn put_decimal(&mut self, value: Decimal) {
        self.store(Node::Leaf(Value::Number(Number::Decimal(value))));
    }

    /// Writes a string.
    pub fn put_str(&mut self, value: &str) {
        self.store(Node::Leaf(Value::String(value.to_string())));
    }

    /// Writes an already-formed tree as one opaque value.
    ///
    /// The tree is stored as written, with no further traversal. If a
    /// container view is later requested for this slot, an object- or
    /// array-shaped tree opens up in place with its content kept.
    pub fn put_value(&mut self, value: Value) {
        self.store(Node::Leaf(value));
    }
}

// ---------------------------------------------------------------------------
// Encode implementations for common types
// ---------------------------------------------------------------------------

impl Encode for bool {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_bool(*self);
        Ok(())
    }
}

impl Encode for i8 {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_i64(*self as i64);
        Ok(())
    }
}

impl Encode for i16 {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_i64(*self as i64);
        Ok(())
    }
}

impl Encode for i32 {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_i64(*self as i64);
        Ok(())
    }
}

impl Encode for i64 {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_i64(*self);
        Ok(())
    }
}

impl Encode for u8 {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_i64(*self as i64);
        Ok(())
    }
}

impl Encode for u16 {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_i64(*self as i64);
        Ok(())
    }
}

impl Encode for u32 {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_i64(*self as i64);
        Ok(())
    }
}

impl Encode for u64 {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_u64(*self)
    }
}

impl Encode for f32 {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_f64(*self as f64);
        Ok(())
    }
}

impl Encode for f64 {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_f64(*self);
        Ok(())
    }
}

impl Encode for char {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_str(&self.to_string());
        Ok(())
    }
}

impl Encode for str {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_str(self);
        Ok(())
    }
}

impl Encode for String {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_str(self);
        Ok(())
    }
}

impl Encode for Decimal {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_decimal(*self);
        Ok(())
    }
}

// Dates encode as RFC 3339 string leaves.
impl Encode for DateTime<Utc> {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_str(&self.to_rfc3339());
        Ok(())
    }
}

impl Encode for Value {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.scalar().put_value(self.clone());
        Ok(())
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        match self {
            Some(value) => value.encode(encoder),
            None => {
                encoder.scalar().put_null();
                Ok(())
            }
        }
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        let mut arr = encoder.array();
        for element in self {
            arr.push(element)?;
        }
        Ok(())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        self.as_slice().encode(encoder)
    }
}

impl<T: Encode> Encode for BTreeMap<String, T> {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        let mut obj = encoder.object();
        for (key, value) in self {
            obj.encode(key.clone(), value)?;
        }
        Ok(())
    }
}

impl<T: Encode> Encode for HashMap<String, T> {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        let mut obj = encoder.object();
        for (key, value) in self {
            obj.encode(key.clone(), value)?;
        }
        Ok(())
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        (**self).encode(encoder)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        (**self).encode(encoder)
    }
}
