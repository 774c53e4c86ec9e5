//! Error types for pool-fetch
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Every variant belongs to exactly one [`ErrorKind`]. The kind carries the
//! fixed, human-readable reason printed in per-entry diagnostics, while the
//! variant's `Display` adds whatever detail is known about the failure.

use thiserror::Error;

/// The main error type for pool-fetch
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Resource Errors
    // ============================================================================
    #[error("out of memory (needed {requested} more bytes for response body)")]
    OutOfMemory { requested: usize },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("GET request could not be performed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GET request could not be performed: HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("json could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("json entries are invalid: {message}")]
    InvalidSchema { message: String },

    #[error("malformed URL returned by API for direct file link: {url}")]
    MalformedUrl { url: String },

    /// A fatal failure while handling one page of the pool
    #[error("critical error on page {page}: {source}")]
    Page {
        page: u64,
        #[source]
        source: Box<Error>,
    },

    // ============================================================================
    // Argument Errors
    // ============================================================================
    #[error("bad command line argument: {argument:?}")]
    BadArgument { argument: String },

    #[error("command line argument empty")]
    EmptyArgument,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Memory could not be reserved
    OutOfMemory,
    /// Network or transport failure, including timeouts and non-2xx statuses
    RequestFailed,
    /// The body was not valid JSON
    ParseError,
    /// Well-formed JSON missing or mistyping an expected field
    InvalidSchema,
    /// A file URL that is not a well-formed HTTPS URL
    MalformedUrl,
    /// The pool argument holds no trailing digits
    BadArgument,
    /// The pool argument is empty
    EmptyArgument,
    /// Writing to an output stream failed
    Io,
    /// Invalid fetcher configuration
    Config,
}

impl ErrorKind {
    /// Fixed reason text used in diagnostics
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::OutOfMemory => "out of memory",
            ErrorKind::RequestFailed => "GET request could not be performed",
            ErrorKind::ParseError => "json could not be parsed",
            ErrorKind::InvalidSchema => "json entries are invalid",
            ErrorKind::MalformedUrl => "malformed URL returned by API for direct file link",
            ErrorKind::BadArgument => "bad command line argument",
            ErrorKind::EmptyArgument => "command line argument empty",
            ErrorKind::Io => "output could not be written",
            ErrorKind::Config => "invalid configuration",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

impl Error {
    /// Create an invalid schema error
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
        }
    }

    /// Create a malformed URL error
    pub fn malformed_url(url: impl Into<String>) -> Self {
        Self::MalformedUrl { url: url.into() }
    }

    /// Create a bad argument error
    pub fn bad_argument(argument: impl Into<String>) -> Self {
        Self::BadArgument {
            argument: argument.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap an error as fatal for the given page
    pub fn on_page(self, page: u64) -> Self {
        Self::Page {
            page,
            source: Box::new(self),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            Error::Http(_) | Error::HttpStatus { .. } => ErrorKind::RequestFailed,
            Error::Parse(_) => ErrorKind::ParseError,
            Error::InvalidSchema { .. } => ErrorKind::InvalidSchema,
            Error::MalformedUrl { .. } => ErrorKind::MalformedUrl,
            Error::Page { source, .. } => source.kind(),
            Error::BadArgument { .. } => ErrorKind::BadArgument,
            Error::EmptyArgument => ErrorKind::EmptyArgument,
            Error::Config { .. } | Error::InvalidUrl(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// The page this error aborted, if it is a page-level failure
    pub fn page(&self) -> Option<u64> {
        match self {
            Error::Page { page, .. } => Some(*page),
            _ => None,
        }
    }
}

/// Result type alias for pool-fetch
pub type Result<T> = std::result::Result<T, Error>;
