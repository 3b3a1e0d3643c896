use foresight_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using ForesightError
pub type Result<T> = std::result::Result<T, ForesightError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on without
/// parsing messages (CLI exit reporting, tests, JSON output).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A caller-supplied argument is outside its domain (e.g. scenario count <= 0)
    InvalidArgument,
    /// Caller-supplied data failed validation (e.g. blank feedback)
    InvalidInput,
    /// Configuration is unreadable or semantically invalid
    InvalidConfig,
    /// An injected collaborator (classifier, storage adapter) failed
    ExternalService,
    Io,
    Serialization,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus correlation ids
/// attached by the engine layer.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

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

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
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
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failure sites of the Foresight core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForesightError {
    /// Scenario generation was asked for a non-positive number of scenarios
    #[error(
        "Scenario count must be between 1 and {}, got {count}",
        crate::ops::scenario_gen::MAX_SCENARIO_COUNT
    )]
    InvalidScenarioCount { count: i64 },

    /// A metric distribution cannot be sampled
    #[error("Invalid distribution for {metric}: {reason}")]
    InvalidDistribution { metric: String, reason: String },

    #[error("Feedback list is empty")]
    EmptyFeedback,

    #[error("Feedback at index {index} is blank")]
    BlankFeedback { index: usize },

    /// The injected sentiment classifier reported a failure
    #[error("Classifier failed: {message}")]
    ClassifierFailed { message: String },

    #[error("Failed to read config {path}: {message}")]
    ConfigRead { path: String, message: String },

    #[error("Failed to parse config: {message}")]
    ConfigParse { message: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<ForesightError> for ExError {
    fn from(err: ForesightError) -> Self {
        let message = err.to_string();
        let kind = match err {
            ForesightError::InvalidScenarioCount { .. }
            | ForesightError::InvalidDistribution { .. } => ExErrorKind::InvalidArgument,
            ForesightError::EmptyFeedback | ForesightError::BlankFeedback { .. } => {
                ExErrorKind::InvalidInput
            }
            ForesightError::ClassifierFailed { .. } => ExErrorKind::ExternalService,
            ForesightError::ConfigRead { .. } => ExErrorKind::Io,
            ForesightError::ConfigParse { .. } | ForesightError::InvalidConfig { .. } => {
                ExErrorKind::InvalidConfig
            }
            ForesightError::Serialization { .. } => ExErrorKind::Serialization,
        };
        ExError::new(kind).with_message(message)
    }
}

impl From<serde_json::Error> for ForesightError {
    fn from(err: serde_json::Error) -> Self {
        ForesightError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ForesightError {
    fn from(err: toml::de::Error) -> Self {
        ForesightError::ConfigParse {
            message: err.to_string(),
        }
    }
}
