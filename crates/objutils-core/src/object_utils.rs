//! `ObjectUtils` facade with lifecycle logging
//!
//! Each associated function delegates to [`ops`](crate::ops) and owns the
//! `start`/`end`/`end_error` events for its call.

use std::time::Instant;

use serde_json::{Map, Value};

use crate::access::{Indexable, IndexableMut};
use crate::errors::Result;
use crate::ops::{self, Projection};
use crate::path::Path;
use crate::schema::{OP_FILTER, OP_GET, OP_OMIT, OP_SET};
use crate::{log_op_end, log_op_error, log_op_start};

/// Stateless entry point for path access and key projection
pub struct ObjectUtils;

impl ObjectUtils {
    /// See [`ops::get`]
    pub fn get<'a, S, P>(source: &'a S, path: P) -> Option<&'a Value>
    where
        S: Indexable + ?Sized,
        P: Into<Path>,
    {
        let path = path.into();
        log_op_start!(OP_GET, path = %path, segment_count = path.len());
        let start = Instant::now();

        let found = ops::get(source, &path);

        log_op_end!(
            OP_GET,
            duration_ms = start.elapsed().as_millis() as u64,
            path = %path,
            found = found.is_some()
        );
        found
    }

    /// See [`ops::get_or`]
    pub fn get_or<'a, S, P>(source: &'a S, path: P, default: &'a Value) -> &'a Value
    where
        S: Indexable + ?Sized,
        P: Into<Path>,
    {
        Self::get(source, path).unwrap_or(default)
    }

    /// See [`ops::set`]
    ///
    /// # Errors
    /// * `EmptyPath` - The path has zero segments
    pub fn set<'a, S, P>(source: &'a mut S, path: P, value: Value) -> Result<&'a mut S>
    where
        S: IndexableMut + ?Sized,
        P: Into<Path>,
    {
        let path = path.into();
        log_op_start!(OP_SET, path = %path, segment_count = path.len());
        let start = Instant::now();

        let result = ops::set(source, &path, value).map_err(|e| {
            log_op_error!(
                OP_SET,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path
            );
            e
        })?;

        log_op_end!(
            OP_SET,
            duration_ms = start.elapsed().as_millis() as u64,
            path = %path
        );
        Ok(result)
    }

    /// See [`ops::filter`]
    pub fn filter<'a, K>(source: &'a Map<String, Value>, keys: &[K]) -> Projection<'a>
    where
        K: AsRef<str>,
    {
        log_op_start!(OP_FILTER, key_count = keys.len());
        let start = Instant::now();

        let projection = ops::filter(source, keys);

        log_op_end!(
            OP_FILTER,
            duration_ms = start.elapsed().as_millis() as u64,
            result_len = projection.len()
        );
        projection
    }

    /// See [`ops::omit`]
    pub fn omit<'a, K>(source: &'a Map<String, Value>, keys: &[K]) -> Projection<'a>
    where
        K: AsRef<str>,
    {
        log_op_start!(OP_OMIT, key_count = keys.len());
        let start = Instant::now();

        let projection = ops::omit(source, keys);

        log_op_end!(
            OP_OMIT,
            duration_ms = start.elapsed().as_millis() as u64,
            result_len = projection.len()
        );
        projection
    }
}
