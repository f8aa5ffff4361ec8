use thiserror::Error;

/// Result type alias using ObjError
pub type Result<T> = std::result::Result<T, ObjError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling
/// and test assertions. Missing paths are not errors: `get` reports them
/// through its return value, so there is no `NotFound` kind here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Path
    EmptyPath,

    // Conversion
    Deserialize,

    // Input
    InvalidInput,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::EmptyPath => "ERR_EMPTY_PATH",
            ExErrorKind::Deserialize => "ERR_DESERIALIZE",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the path
/// context needed to debug a failed operation.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the dotted path the operation was given
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for objutils operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjError {
    /// Path has no segments, so there is no final key to assign
    #[error("Path is empty: at least one segment is required")]
    EmptyPath,

    /// A value was found but could not be converted to the requested type
    #[error("Value at '{path}' could not be deserialized: {message}")]
    Deserialize { path: String, message: String },

    /// Caller-supplied input could not be interpreted
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

/// Conversion from ObjError to the canonical ExError
impl From<ObjError> for ExError {
    fn from(err: ObjError) -> Self {
        match err {
            ObjError::EmptyPath => ExError::new(ExErrorKind::EmptyPath)
                .with_path("")
                .with_message("Path is empty"),

            ObjError::Deserialize { path, message } => ExError::new(ExErrorKind::Deserialize)
                .with_path(path)
                .with_message(message),

            ObjError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
        }
    }
}
