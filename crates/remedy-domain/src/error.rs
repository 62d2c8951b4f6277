//! Error handling types

use std::sync::Arc;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Shared, cloneable error source
///
/// Failed resource fetches are delivered to every caller awaiting the same key,
/// so every variant has to be cloneable.
pub type ErrorSource = Arc<dyn std::error::Error + Send + Sync>;

/// Main error type for remedy
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The resource key has no backing content
    #[error("Resource not found: {resource}")]
    ResourceNotFound {
        /// Canonical key of the missing resource
        resource: String,
    },

    /// The fetch transport failed while resolving a resource
    #[error("Failed to fetch resource {resource}: {message}")]
    ResourceFetch {
        /// Canonical key of the resource being fetched
        resource: String,
        /// Description of the transport failure
        message: String,
    },

    /// A code action provider failed
    #[error("Code action provider '{provider}' failed: {message}")]
    Provider {
        /// Name of the failing provider
        provider: String,
        /// Description of the provider failure
        message: String,
    },

    /// Overlapping or out-of-range edit operations
    #[error("Invalid edit for {resource}: {message}")]
    InvalidEdit {
        /// Canonical key of the edited resource
        resource: String,
        /// Description of the invalid operation
        message: String,
    },

    /// One or more failures from a fan-out computation
    #[error("{}", summarize(.errors))]
    Aggregate {
        /// The collected failures
        errors: Vec<Error>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<ErrorSource>,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {message}")]
    Json {
        /// Description of the JSON error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<ErrorSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

fn summarize(errors: &[Error]) -> String {
    match errors {
        [] => "Aggregate error with no failures".to_string(),
        [single] => single.to_string(),
        many => {
            let messages: Vec<String> = many.iter().map(ToString::to_string).collect();
            format!("{} errors occurred: {}", many.len(), messages.join("; "))
        }
    }
}

// Pipeline error creation methods
impl Error {
    /// Create a resource not found error
    pub fn resource_not_found<S: Into<String>>(resource: S) -> Self {
        Self::ResourceNotFound {
            resource: resource.into(),
        }
    }

    /// Create a resource fetch (transport) error
    pub fn resource_fetch<R: Into<String>, M: Into<String>>(resource: R, message: M) -> Self {
        Self::ResourceFetch {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Create a code action provider error
    pub fn provider<P: Into<String>, M: Into<String>>(provider: P, message: M) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create an invalid edit error
    pub fn invalid_edit<R: Into<String>, M: Into<String>>(resource: R, message: M) -> Self {
        Self::InvalidEdit {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Wrap failures from a fan-out into one aggregate error
    ///
    /// Nested aggregates are flattened so the result is always one level deep.
    pub fn aggregate<I: IntoIterator<Item = Error>>(errors: I) -> Self {
        let mut flat = Vec::new();
        for error in errors {
            match error {
                Self::Aggregate { errors } => flat.extend(errors),
                other => flat.push(other),
            }
        }
        Self::Aggregate { errors: flat }
    }

    /// Whether retrying the same operation later may succeed
    ///
    /// Fetch and provider failures are transient; missing resources and
    /// invalid edits fail the same way every time for the same inputs.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::ResourceFetch { .. } | Self::Provider { .. } | Self::Io { .. } => true,
            Self::Aggregate { errors } => errors.iter().any(Error::is_transient),
            _ => false,
        }
    }
}

// Ambient error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source: Some(Arc::new(source)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            message: source.to_string(),
        }
    }
}
