//! Error types for skill conversion.
//!
//! All errors in the workspace use this type, providing consistent error
//! handling across the converter crates. Conversion failures are reported
//! through the structured response envelope at the request boundary; this
//! type never crosses that boundary as a raised error.
//!
//! # Examples
//!
//! ```
//! use skillsmith_core::{Error, Result};
//!
//! fn parse_document(raw: &str) -> Result<()> {
//!     if raw.is_empty() {
//!         return Err(Error::Parse {
//!             message: "Empty source document".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = parse_document("").unwrap_err();
//! assert!(err.is_parse_error());
//! ```

use crate::SourceType;
use thiserror::Error;

/// Main error type for skill conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// Source document is malformed or structurally incomplete.
    ///
    /// The message identifies the missing or invalid field and is surfaced
    /// verbatim to the caller. There is no partial recovery: a structurally
    /// invalid document fails the whole conversion.
    #[error("{message}")]
    Parse {
        /// Human-readable description of what is malformed or missing
        message: String,
    },

    /// A converter bound to one source type received a request for another.
    ///
    /// This is a request-level client error, reported before any parsing
    /// is attempted.
    #[error("this converter only handles {expected} conversions (request was {actual})")]
    TypeMismatch {
        /// Source type the converter is bound to
        expected: SourceType,
        /// Source type the request declared
        actual: SourceType,
    },

    /// The request named a source type no converter handles.
    #[error("unsupported source type: {value}")]
    UnsupportedSourceType {
        /// The unrecognized type tag
        value: String,
    },

    /// Unexpected failure during generation.
    ///
    /// Caught at the request boundary and converted to a generic failure
    /// response rather than propagated raw.
    #[error("unexpected conversion failure: {message}")]
    Unknown {
        /// Description of the unexpected failure
        message: String,
    },
}

impl Error {
    /// Returns `true` if this is a parse error.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillsmith_core::Error;
    ///
    /// let err = Error::Parse {
    ///     message: "missing field `baseUrl`".to_string(),
    /// };
    /// assert!(err.is_parse_error());
    /// ```
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns `true` if this is a source-type mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillsmith_core::{Error, SourceType};
    ///
    /// let err = Error::TypeMismatch {
    ///     expected: SourceType::RestApi,
    ///     actual: SourceType::OpenApi,
    /// };
    /// assert!(err.is_type_mismatch());
    /// ```
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns `true` if this is an unsupported-source-type error.
    #[must_use]
    pub const fn is_unsupported_source_type(&self) -> bool {
        matches!(self, Self::UnsupportedSourceType { .. })
    }

    /// Returns `true` if this is an unexpected generation failure.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

/// Result type alias for conversion operations.
///
/// # Examples
///
/// ```
/// use skillsmith_core::{Error, Result};
///
/// fn checked(value: i32) -> Result<i32> {
///     if value < 0 {
///         return Err(Error::Unknown {
///             message: "negative value".to_string(),
///         });
///     }
///     Ok(value)
/// }
///
/// assert!(checked(5).is_ok());
/// assert!(checked(-1).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
