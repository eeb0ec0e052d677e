//! Common error infrastructure for mechlab-core.
//!
//! This module provides the shared severity classification and the trait every
//! error type in the crate implements. Domain-specific errors (e.g.
//! `RangeProfileError`, `StatExprError`) live next to the code that raises them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each subsystem has its own error type with specific variants
//! - **Severity Classification**: Data inconsistencies are told apart from caller mistakes
//! - **Pure**: No error carries I/O state; loaders attach file context on top

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected and reported to the caller
/// - **Internal**: Unexpected inconsistency between data and the model
/// - **Fatal**: Data that cannot be interpreted at all; loading must stop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: malformed stat expression, duplicate item id
    Validation,

    /// Model inconsistency that indicates a bug in data preparation.
    Internal,

    /// Unrecognized enumeration text in static data.
    ///
    /// Examples: unknown modifier operation, unknown interpolation
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates broken data or a bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all mechlab-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to fix the problem, not by impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while interpreting enumeration text from static data.
///
/// Operations and interpolation kinds are closed enums in the engine, so an
/// unknown value can only show up while parsing. It is always fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("unknown modifier operation '{0}'")]
    UnknownOperation(String),

    #[error("unknown interpolation type '{0}'")]
    UnknownInterpolation(String),

    #[error("unknown modifier type '{0}'")]
    UnknownModifierType(String),
}

impl EngineError for ModelError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownOperation(_) => "MODEL_UNKNOWN_OPERATION",
            Self::UnknownInterpolation(_) => "MODEL_UNKNOWN_INTERPOLATION",
            Self::UnknownModifierType(_) => "MODEL_UNKNOWN_MODIFIER_TYPE",
        }
    }
}
