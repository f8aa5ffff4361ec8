use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::access::{Indexable, IndexableMut};
use crate::errors::{ObjError, Result};
use crate::path::Path;

/// Resolve `path` inside `source`
///
/// Walks the path one segment at a time. Traversal fails as soon as a
/// segment is absent or resolves to `null`, including the final segment,
/// so a present `null` reads as "not found". Any other value, `false`, `0`
/// and `""` included, is returned as found. A zero-segment path never
/// resolves.
///
/// Missing paths are never an error; failure is reported as `None`.
///
/// # Example
/// ```
/// use objutils_core::ops::get;
/// use serde_json::json;
///
/// let data = json!({"items": [{"id": 2}], "active": false});
/// assert_eq!(get(&data, "items.0.id"), Some(&json!(2)));
/// assert_eq!(get(&data, "active"), Some(&json!(false)));
/// assert_eq!(get(&data, "items.1.id"), None);
/// ```
pub fn get<'a, S, P>(source: &'a S, path: P) -> Option<&'a Value>
where
    S: Indexable + ?Sized,
    P: Into<Path>,
{
    let path = path.into();
    let (first, rest) = path.segments().split_first()?;

    let mut cursor = usable(source.lookup(first), &path, 0)?;
    for (offset, segment) in rest.iter().enumerate() {
        cursor = usable(cursor.lookup(segment), &path, offset + 1)?;
    }
    Some(cursor)
}

/// Resolve `path`, falling back to `default` when traversal fails
pub fn get_or<'a, S, P>(source: &'a S, path: P, default: &'a Value) -> &'a Value
where
    S: Indexable + ?Sized,
    P: Into<Path>,
{
    get(source, path).unwrap_or(default)
}

/// Mutable counterpart of [`get`] with the same failure policy
///
/// Nothing is created along the way; use [`set`](crate::ops::set) for that.
pub fn get_mut<'a, S, P>(source: &'a mut S, path: P) -> Option<&'a mut Value>
where
    S: IndexableMut + ?Sized,
    P: Into<Path>,
{
    let path = path.into();
    let (first, rest) = path.segments().split_first()?;

    let mut cursor = source.lookup_mut(first).filter(|v| !v.is_null())?;
    for segment in rest {
        cursor = cursor.lookup_mut(segment).filter(|v| !v.is_null())?;
    }
    Some(cursor)
}

/// Whether `path` resolves to a non-null value
pub fn contains<S, P>(source: &S, path: P) -> bool
where
    S: Indexable + ?Sized,
    P: Into<Path>,
{
    get(source, path).is_some()
}

/// Resolve `path` and deserialize the found value into `T`
///
/// # Returns
/// `Ok(None)` when the path does not resolve.
///
/// # Errors
/// * `Deserialize` - The value was found but does not fit `T`
pub fn get_as<T, S, P>(source: &S, path: P) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: Indexable + ?Sized,
    P: Into<Path>,
{
    let path = path.into();
    get(source, &path)
        .map(|value| {
            T::deserialize(value).map_err(|err| ObjError::Deserialize {
                path: path.to_string(),
                message: err.to_string(),
            })
        })
        .transpose()
}

fn usable<'a>(found: Option<&'a Value>, path: &Path, depth: usize) -> Option<&'a Value> {
    match found {
        Some(Value::Null) => {
            tracing::trace!(path = %path, depth, "traversal stopped at null");
            None
        }
        None => {
            tracing::trace!(path = %path, depth, "traversal stopped at missing segment");
            None
        }
        value => value,
    }
}
