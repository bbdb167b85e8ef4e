//! Error types for argument binding.
//!
//! This module defines `ArgumentBinderError`, a `thiserror`-based enum with
//! one variant per failure a single field can produce, and `BindErrors`, the
//! aggregate returned by the orchestrator when one or more fields failed.
//!
//! Per-field errors never abort a bind call. They are collected in order
//! (binder kind first, then field declaration order) and surfaced together.

use std::fmt;

/// Marker substituted for values that must not be printed.
pub const HIDDEN_STRING: &str = "******";

/// Marker printed for values that are absent.
pub const NULL_STRING: &str = "[null]";

/// Failure produced while binding a single field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ArgumentBinderError {
    /// The descriptor itself is malformed (bad range, empty enum, missing name, ...).
    #[error("errors when validating descriptor on '{target}.{field}':\n{message}")]
    AttributeValidation {
        /// Name of the type being bound.
        target: String,
        /// Name of the field carrying the descriptor.
        field: String,
        /// One line per problem found in the descriptor.
        message: String,
    },

    /// The field's declared type cannot hold the descriptor's value type.
    #[error(
        "the field '{target}.{field}' is of type '{field_type}', which is not compatible \
        with a {descriptor} descriptor, which expects a type of '{expected}'"
    )]
    InvalidFieldType {
        /// Name of the type being bound.
        target: String,
        /// Name of the field carrying the descriptor.
        field: String,
        /// Type name of the field.
        field_type: String,
        /// Kind of descriptor attached to the field.
        descriptor: String,
        /// Type name the descriptor produces.
        expected: String,
    },

    /// A required argument was not supplied by any configured source.
    #[error("argument '{0}' is required, but was never specified")]
    MissingRequiredArgument(String),

    /// The raw value could not be converted to the target type.
    #[error("could not convert value specified in argument '{argument}' to type '{expected_type}'")]
    ArgumentFormat {
        /// Argument name.
        argument: String,
        /// Type name the value should have converted to.
        expected_type: String,
    },

    /// An integer value is greater than the descriptor's maximum.
    #[error(
        "value specified in argument '{argument}' is greater than the maximum value of '{maximum}'"
    )]
    ArgumentTooLarge {
        /// Argument name.
        argument: String,
        /// Inclusive maximum.
        maximum: i32,
    },

    /// An integer value is less than the descriptor's minimum.
    #[error(
        "value specified in argument '{argument}' is less than the minimum value of '{minimum}'"
    )]
    ArgumentTooSmall {
        /// Argument name.
        argument: String,
        /// Inclusive minimum.
        minimum: i32,
    },

    /// A value resolved to null where one is needed.
    #[error(
        "value specified in argument '{0}' is null, but a value is needed. \
        This could mean a descriptor is configured incorrectly"
    )]
    ArgumentValueNull(String),

    /// A path that must exist is not a file.
    #[error("file must exist before executing the task: {path}")]
    FileNotFound {
        /// The path, or [`HIDDEN_STRING`] when the argument is secret.
        path: String,
    },

    /// A path that must exist is not a directory.
    #[error("directory must exist before executing the task: {path}")]
    DirectoryNotFound {
        /// The path, or [`HIDDEN_STRING`] when the argument is secret.
        path: String,
    },
}

impl ArgumentBinderError {
    /// Returns the argument name this error refers to, if it refers to one.
    pub fn argument_name(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredArgument(argument) | Self::ArgumentValueNull(argument) => {
                Some(argument)
            }
            Self::ArgumentFormat { argument, .. }
            | Self::ArgumentTooLarge { argument, .. }
            | Self::ArgumentTooSmall { argument, .. } => Some(argument),
            Self::AttributeValidation { .. }
            | Self::InvalidFieldType { .. }
            | Self::FileNotFound { .. }
            | Self::DirectoryNotFound { .. } => None,
        }
    }
}

/// Aggregate failure of one bind call.
///
/// Holds every per-field error in the order it was produced. Never empty when
/// returned from [`ArgumentBinder`](crate::ArgumentBinder).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BindErrors {
    errors: Vec<ArgumentBinderError>,
}

impl BindErrors {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, error: ArgumentBinderError) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArgumentBinderError> {
        self.errors.iter()
    }

    pub fn errors(&self) -> &[ArgumentBinderError] {
        &self.errors
    }
}

impl fmt::Display for BindErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "errors when binding arguments ({} error(s))", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for BindErrors {}

impl IntoIterator for BindErrors {
    type Item = ArgumentBinderError;
    type IntoIter = std::vec::IntoIter<ArgumentBinderError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a BindErrors {
    type Item = &'a ArgumentBinderError;
    type IntoIter = std::slice::Iter<'a, ArgumentBinderError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
