//! Common error infrastructure for force-core.
//!
//! Domain-specific errors (`CatalogError`, `MutationError`) live next to the
//! code that raises them and implement [`ForceError`] for uniform
//! classification. Constraint violations are not errors: see
//! [`crate::validation`].

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input, rejected without touching state
/// - **Fatal**: the catalog snapshot cannot be used at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown unit definition, unit instance not in the roster
    Validation,

    /// Fatal error - the data cannot be used.
    ///
    /// Examples: duplicate ids or dangling references in a catalog
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all force-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable identifiers suitable for logs and tests
pub trait ForceError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
