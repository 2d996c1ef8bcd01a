use docdiff_core_types::ComparisonId;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Aggregation and formatting are total and never produce these. Errors only
/// arise at the boundary: decoding engine output, reading files, parsing
/// configuration, resolving a hovered id. Each kind maps to a stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    /// Engine output is not a JSON object/null, or a difference list is not an array
    InvalidDifferenceSet,
    NotFound,

    // Configuration
    Config,

    // Integration/IO
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidDifferenceSet => "ERR_INVALID_DIFFERENCE_SET",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, difference id, comparison id, file path) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    difference_id: Option<String>,
    comparison_id: Option<ComparisonId>,
    path: Option<PathBuf>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            difference_id: None,
            comparison_id: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add difference id context
    pub fn with_difference_id(mut self, id: impl Into<String>) -> Self {
        self.difference_id = Some(id.into());
        self
    }

    /// Add comparison id context
    pub fn with_comparison_id(mut self, comparison_id: ComparisonId) -> Self {
        self.comparison_id = Some(comparison_id);
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the difference id context, if any
    pub fn difference_id(&self) -> Option<&str> {
        self.difference_id.as_deref()
    }

    /// Get the comparison id context, if any
    pub fn comparison_id(&self) -> Option<&ComparisonId> {
        self.comparison_id.as_ref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(id) = &self.difference_id {
            write!(f, " (difference_id: {})", id)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        if let Some(comparison_id) = &self.comparison_id {
            write!(f, " (comparison_id: {})", comparison_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures at the ingest/config boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocDiffError {
    /// Input bytes are not valid UTF-8
    #[error("Input is not valid UTF-8: {reason}")]
    InvalidUtf8 { reason: String },

    /// Input is not valid JSON
    #[error("Input is not valid JSON: {reason}")]
    MalformedJson { reason: String },

    /// JSON root is neither an object nor null
    #[error("Difference set root must be an object or null, got {found}")]
    UnexpectedRoot { found: String },

    /// A difference list field is present but not an array
    #[error("Field `{field}` must be an array, got {found}")]
    ListNotArray { field: String, found: String },

    /// No record with the requested id exists in the set
    #[error("Difference not found: {difference_id}")]
    UnknownDifference { difference_id: String },

    /// Legend configuration could not be parsed
    #[error("Invalid legend configuration: {reason}")]
    ConfigParse { reason: String },

    /// A file could not be read
    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },
}

impl From<DocDiffError> for ExError {
    fn from(err: DocDiffError) -> Self {
        let message = err.to_string();
        match err {
            DocDiffError::InvalidUtf8 { .. }
            | DocDiffError::MalformedJson { .. }
            | DocDiffError::UnexpectedRoot { .. }
            | DocDiffError::ListNotArray { .. } => {
                ExError::new(ExErrorKind::InvalidDifferenceSet).with_message(message)
            }

            DocDiffError::UnknownDifference { difference_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_difference_id(difference_id)
                    .with_message(message)
            }

            DocDiffError::ConfigParse { .. } => {
                ExError::new(ExErrorKind::Config).with_message(message)
            }

            DocDiffError::ReadFailed { path, .. } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(message),
        }
    }
}
