//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Path identifiers
pub const FIELD_PATH: &str = "path";
pub const FIELD_DEPTH: &str = "depth";

// Collection sizes
pub const FIELD_SEGMENT_COUNT: &str = "segment_count";
pub const FIELD_KEY_COUNT: &str = "key_count";
pub const FIELD_RESULT_LEN: &str = "result_len";

// Outcome
pub const FIELD_FOUND: &str = "found";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERROR: &str = "error";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_GET: &str = "get";
pub const OP_SET: &str = "set";
pub const OP_FILTER: &str = "filter";
pub const OP_OMIT: &str = "omit";
