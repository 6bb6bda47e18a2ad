//! In-progress tree nodes and the shared cells that alias them.
//!
//! While a value describes itself to an encoder, the document under
//! construction is a tree of [`Node`]s. Leaves are stored unboxed; object and
//! array containers live behind reference-counted cells so that a parent slot
//! and the container view currently filling it observe the same storage, with
//! no copy-back step when the view is dropped. A pending cell reserves a slot
//! whose content arrives later through a separately obtained encoder.
//!
//! Everything here is single-threaded scaffolding: the cells exist only for
//! structural aliasing within one synchronous encoding, and the whole
//! structure is consumed by a single recursive [`Node::resolve`] walk at the
//! end.

use crate::path::Path;
use crate::value::Value;
use crate::ValueMap;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

pub(crate) type ObjectCell = Rc<RefCell<IndexMap<String, Node>>>;
pub(crate) type ArrayCell = Rc<RefCell<Vec<Node>>>;
pub(crate) type PendingCell = Rc<RefCell<Option<Node>>>;

/// One position in the tree under construction.
///
/// A `Leaf` holds either a scalar or a complete tree written as one opaque
/// value; the latter stays unboxed until (unless) a container view is later
/// requested for its slot. A `Pending` cell never resolves to another
/// `Pending` cell: reserved slots hand out encoders bound to the cell itself,
/// so nothing ever stores one pending cell inside another.
#[derive(Clone, Debug)]
pub(crate) enum Node {
    Leaf(Value),
    Object(ObjectCell),
    Array(ArrayCell),
    Pending(PendingCell),
}

pub(crate) fn new_object_cell() -> ObjectCell {
    Rc::new(RefCell::new(IndexMap::new()))
}

pub(crate) fn new_array_cell() -> ArrayCell {
    Rc::new(RefCell::new(Vec::new()))
}

pub(crate) fn new_pending_cell() -> PendingCell {
    Rc::new(RefCell::new(None))
}

impl Node {
    /// Short description of what the node currently holds, for panic
    /// messages.
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Node::Leaf(value) => value.kind_name(),
            Node::Object(_) => "an object",
            Node::Array(_) => "an array",
            Node::Pending(cell) => match cell.borrow().as_ref() {
                Some(node) => node.kind_name(),
                None => "a reserved slot",
            },
        }
    }

    /// Converts this node, recursively, into the final immutable value.
    ///
    /// This is the single terminal walk of the whole encoding: cells that are
    /// no longer aliased are unwrapped and consumed in place, and an
    /// unresolved pending cell becomes an empty object.
    pub(crate) fn resolve(self) -> Value {
        match self {
            Node::Leaf(value) => value,
            Node::Object(cell) => {
                let entries = match Rc::try_unwrap(cell) {
                    Ok(inner) => inner.into_inner(),
                    Err(shared) => shared.borrow().clone(),
                };
                Value::Object(
                    entries
                        .into_iter()
                        .map(|(key, node)| (key, node.resolve()))
                        .collect(),
                )
            }
            Node::Array(cell) => {
                let elements = match Rc::try_unwrap(cell) {
                    Ok(inner) => inner.into_inner(),
                    Err(shared) => shared.borrow().clone(),
                };
                Value::Array(elements.into_iter().map(Node::resolve).collect())
            }
            Node::Pending(cell) => {
                let inner = match Rc::try_unwrap(cell) {
                    Ok(inner) => inner.into_inner(),
                    Err(shared) => shared.borrow().clone(),
                };
                match inner {
                    Some(node) => node.resolve(),
                    None => Value::Object(ValueMap::new()),
                }
            }
        }
    }
}

/// Obtains the object cell for `slot`, initializing or promoting as needed.
///
/// An absent slot is initialized to a fresh empty object. A slot already
/// holding an object cell yields that same cell, so every caller observes the
/// same storage. An unboxed object leaf is converted once into the boxed form
/// with each field re-wrapped as an independently promotable leaf. A pending
/// cell forwards the request to whatever it will eventually resolve to.
///
/// # Panics
///
/// Panics if the slot holds anything else: asking for an object where an
/// array or a non-object scalar was already written is a bug in the caller's
/// `Encode` implementation, not a data error.
pub(crate) fn request_object(slot: &mut Option<Node>, path: &Path) -> ObjectCell {
    match slot {
        None => {
            let cell = new_object_cell();
            *slot = Some(Node::Object(cell.clone()));
            cell
        }
        Some(node) => promote_object(node, path),
    }
}

pub(crate) fn promote_object(node: &mut Node, path: &Path) -> ObjectCell {
    match node {
        Node::Object(cell) => cell.clone(),
        Node::Leaf(Value::Object(_)) => {
            let Node::Leaf(Value::Object(map)) = std::mem::replace(node, Node::Leaf(Value::Null))
            else {
                unreachable!()
            };
            let cell: ObjectCell = Rc::new(RefCell::new(
                map.into_iter()
                    .map(|(key, value)| (key, Node::Leaf(value)))
                    .collect(),
            ));
            *node = Node::Object(cell.clone());
            cell
        }
        Node::Pending(cell) => {
            let cell = cell.clone();
            let mut inner = cell.borrow_mut();
            request_object(&mut inner, path)
        }
        other => panic!(
            "cannot open an object at {}: slot already holds {}",
            path,
            other.kind_name()
        ),
    }
}

/// Obtains the array cell for `slot`, initializing or promoting as needed.
///
/// Mirrors [`request_object`] for arrays, including the one-time conversion
/// of an unboxed array leaf and the forwarding through pending cells.
///
/// # Panics
///
/// Panics if the slot holds content that is not array-shaped.
pub(crate) fn request_array(slot: &mut Option<Node>, path: &Path) -> ArrayCell {
    match slot {
        None => {
            let cell = new_array_cell();
            *slot = Some(Node::Array(cell.clone()));
            cell
        }
        Some(node) => promote_array(node, path),
    }
}

pub(crate) fn promote_array(node: &mut Node, path: &Path) -> ArrayCell {
    match node {
        Node::Array(cell) => cell.clone(),
        Node::Leaf(Value::Array(_)) => {
            let Node::Leaf(Value::Array(elements)) =
                std::mem::replace(node, Node::Leaf(Value::Null))
            else {
                unreachable!()
            };
            let cell: ArrayCell = Rc::new(RefCell::new(
                elements.into_iter().map(Node::Leaf).collect(),
            ));
            *node = Node::Array(cell.clone());
            cell
        }
        Node::Pending(cell) => {
            let cell = cell.clone();
            let mut inner = cell.borrow_mut();
            request_array(&mut inner, path)
        }
        other => panic!(
            "cannot open an array at {}: slot already holds {}",
            path,
            other.kind_name()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graft;

    #[test]
    fn test_absent_slot_initializes_object() {
        let mut slot = None;
        let cell = request_object(&mut slot, &Path::root());
        cell.borrow_mut()
            .insert("a".to_string(), Node::Leaf(Value::from(1)));

        let resolved = slot.unwrap().resolve();
        assert_eq!(resolved, graft!({"a": 1}));
    }

    #[test]
    fn test_repeated_request_returns_same_cell() {
        let mut slot = None;
        let first = request_object(&mut slot, &Path::root());
        let second = request_object(&mut slot, &Path::root());
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_object_leaf_promotes_without_losing_fields() {
        let mut slot = Some(Node::Leaf(graft!({"kept": true})));
        let cell = request_object(&mut slot, &Path::root());
        cell.borrow_mut()
            .insert("added".to_string(), Node::Leaf(Value::from(1)));

        let resolved = slot.unwrap().resolve();
        assert_eq!(resolved, graft!({"kept": true, "added": 1}));
    }

    #[test]
    fn test_array_leaf_promotes_preserving_order() {
        let mut slot = Some(Node::Leaf(graft!([1, 2])));
        let cell = request_array(&mut slot, &Path::root());
        cell.borrow_mut().push(Node::Leaf(Value::from(3)));

        let resolved = slot.unwrap().resolve();
        assert_eq!(resolved, graft!([1, 2, 3]));
    }

    #[test]
    fn test_pending_forwards_container_requests() {
        let pending = new_pending_cell();
        let mut slot = Some(Node::Pending(pending.clone()));
        let cell = request_object(&mut slot, &Path::root());
        cell.borrow_mut()
            .insert("x".to_string(), Node::Leaf(Value::Null));

        // The pending cell saw the write even though the slot only holds the
        // pending wrapper.
        assert_eq!(Node::Pending(pending).resolve(), graft!({"x": null}));
    }

    #[test]
    fn test_unfilled_pending_resolves_to_empty_object() {
        let node = Node::Pending(new_pending_cell());
        assert_eq!(node.resolve(), graft!({}));
    }

    #[test]
    #[should_panic(expected = "already holds a string")]
    fn test_object_request_against_string_panics() {
        let mut slot = Some(Node::Leaf(Value::from("scalar")));
        request_object(&mut slot, &Path::root());
    }

    #[test]
    #[should_panic(expected = "already holds an object")]
    fn test_array_request_against_object_panics() {
        let mut slot = Some(Node::Object(new_object_cell()));
        request_array(&mut slot, &Path::root());
    }

    #[test]
    fn test_aliased_cell_resolves_by_clone() {
        let cell = new_array_cell();
        cell.borrow_mut().push(Node::Leaf(Value::from(7)));

        // Two owners of the same cell: resolving one leaves the other usable.
        let first = Node::Array(cell.clone());
        assert_eq!(first.resolve(), graft!([7]));
        assert_eq!(Node::Array(cell).resolve(), graft!([7]));
    }
}
