use serde_json::{Map, Value};

use crate::access::IndexableMut;
use crate::errors::{ObjError, Result};
use crate::path::Path;

/// Assign `value` at `path` inside `source`, creating missing levels
///
/// Every segment before the last is materialized as an empty mapping when
/// its current value is absent, `null` or a scalar. Existing mappings are
/// descended. An existing sequence is descended through a canonical index,
/// padded with `null` when the index lies past its end, and replaced by a
/// mapping for any other segment. Numeric-looking segments never create
/// sequences. Whatever sits at the final segment is overwritten, not merged.
///
/// A `Value::Null` (or scalar) root is replaced by a fresh mapping. Returns
/// the same reference it was given.
///
/// # Errors
/// * `EmptyPath` - The path has zero segments; `source` is left untouched
///
/// # Example
/// ```
/// use objutils_core::ops::set;
/// use serde_json::{json, Map};
///
/// let mut root = Map::new();
/// set(&mut root, "a.b.c", json!(1)).unwrap();
/// assert_eq!(serde_json::Value::Object(root), json!({"a": {"b": {"c": 1}}}));
/// ```
pub fn set<'a, S, P>(source: &'a mut S, path: P, value: Value) -> Result<&'a mut S>
where
    S: IndexableMut + ?Sized,
    P: Into<Path>,
{
    let path = path.into();
    assign(source, &path, value)?;
    Ok(source)
}

/// [`set`] for a source that may be absent
///
/// `None` is substituted with a fresh empty mapping, which is returned.
pub fn set_or_init<P>(
    source: Option<Map<String, Value>>,
    path: P,
    value: Value,
) -> Result<Map<String, Value>>
where
    P: Into<Path>,
{
    let mut root = source.unwrap_or_default();
    set(&mut root, path, value)?;
    Ok(root)
}

fn assign<S>(source: &mut S, path: &Path, value: Value) -> Result<()>
where
    S: IndexableMut + ?Sized,
{
    let (last, parents) = path.split_last().ok_or(ObjError::EmptyPath)?;

    let slot = match parents.split_first() {
        None => source.slot_mut(last),
        Some((first, rest)) => {
            let cursor = rest
                .iter()
                .fold(source.slot_mut(first), |cursor, segment| cursor.slot_mut(segment));
            cursor.slot_mut(last)
        }
    };

    tracing::trace!(path = %path, depth = path.len(), "assigning value");
    *slot = value;
    Ok(())
}
