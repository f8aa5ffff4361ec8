//! Indexable capability over dynamically shaped values
//!
//! Traversal is written against these traits rather than a concrete
//! container. Lookups accept a mapping, a sequence or a bare `Value` as the
//! root of a path. Assignment needs a root that can turn into a mapping, so
//! only `Map` and `Value` implement [`IndexableMut`].

use serde_json::{Map, Value};

use crate::path::parse_index;

/// Keyed lookup by string segment
///
/// `Some(&Value::Null)` means the key is present and null; `None` means it
/// is absent. Sequences resolve canonical decimal segments by position.
pub trait Indexable {
    fn lookup(&self, segment: &str) -> Option<&Value>;
}

/// Mutable lookup plus slot creation for assignment
pub trait IndexableMut: Indexable {
    /// Mutable counterpart of [`Indexable::lookup`]; never creates anything
    fn lookup_mut(&mut self, segment: &str) -> Option<&mut Value>;

    /// Return the slot for `segment`, creating it as `Null` if needed
    fn slot_mut(&mut self, segment: &str) -> &mut Value;
}

impl Indexable for Map<String, Value> {
    fn lookup(&self, segment: &str) -> Option<&Value> {
        self.get(segment)
    }
}

impl IndexableMut for Map<String, Value> {
    fn lookup_mut(&mut self, segment: &str) -> Option<&mut Value> {
        self.get_mut(segment)
    }

    fn slot_mut(&mut self, segment: &str) -> &mut Value {
        self.entry(segment).or_insert(Value::Null)
    }
}

impl Indexable for [Value] {
    fn lookup(&self, segment: &str) -> Option<&Value> {
        parse_index(segment).and_then(|index| self.get(index))
    }
}

impl Indexable for Vec<Value> {
    fn lookup(&self, segment: &str) -> Option<&Value> {
        self.as_slice().lookup(segment)
    }
}

/// Slot at `index`, padding the sequence with `Null` up to it
fn element_slot(items: &mut Vec<Value>, index: usize) -> &mut Value {
    if index >= items.len() {
        items.resize(index + 1, Value::Null);
    }
    &mut items[index]
}

impl Indexable for Value {
    fn lookup(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.lookup(segment),
            Value::Array(items) => items.lookup(segment),
            _ => None,
        }
    }
}

impl IndexableMut for Value {
    fn lookup_mut(&mut self, segment: &str) -> Option<&mut Value> {
        match self {
            Value::Object(map) => map.lookup_mut(segment),
            Value::Array(items) => parse_index(segment).and_then(|index| items.get_mut(index)),
            _ => None,
        }
    }

    /// Sequences take canonical indices and are padded with `Null` past
    /// their end. A sequence addressed by any other segment, `null` and
    /// scalars are replaced by an empty mapping first.
    fn slot_mut(&mut self, segment: &str) -> &mut Value {
        let index = match self {
            Value::Array(_) => parse_index(segment),
            _ => None,
        };
        match (self, index) {
            (Value::Object(map), _) => map.slot_mut(segment),
            (Value::Array(items), Some(index)) => element_slot(items, index),
            (other, _) => {
                *other = Value::Object(Map::new());
                other.slot_mut(segment)
            }
        }
    }
}
