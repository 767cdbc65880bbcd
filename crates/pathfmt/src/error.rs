// File: src/error.rs
// Purpose: Error types for compiling, matching, binding and rendering

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;

use thiserror::Error;

/// A static template segment did not equal the path token at the same index.
///
/// Carries both the template and the path so the message is useful on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("path {path:?} does not match template {template:?}: expected {expected:?} at segment {index}, got {actual:?}")]
pub struct MismatchError {
    pub template: String,
    pub path: String,
    pub index: usize,
    pub expected: String,
    pub actual: String,
}

/// Rejections from [`Template::parse`](crate::Template::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("empty variable `{{}}` at segment {index}")]
    EmptyVariable { index: usize },

    #[error("unbalanced braces in segment {index}: {segment:?}")]
    UnbalancedBraces { index: usize, segment: String },

    #[error("variable `{name}` appears more than once")]
    DuplicateVariable { name: String },
}

/// Failure to turn a matched string into a field's scalar type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error(transparent)]
    Bool(#[from] ParseBoolError),

    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),
}

/// Errors from binding a path onto a [`PathRecord`](crate::PathRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error(transparent)]
    Mismatch(#[from] MismatchError),

    /// A tagged field the record declares as not settable.
    #[error("field `{field}` is tagged `{tag}` but is not settable")]
    InaccessibleField {
        field: &'static str,
        tag: &'static str,
    },

    #[error("cannot bind {value:?} to field `{field}` of type {type_name}: {source}")]
    Coercion {
        field: &'static str,
        value: String,
        type_name: &'static str,
        #[source]
        source: CoercionError,
    },
}

impl BindError {
    /// Name of the record field involved, if the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BindError::Mismatch(_) => None,
            BindError::InaccessibleField { field, .. } | BindError::Coercion { field, .. } => {
                Some(*field)
            }
        }
    }
}

/// Errors from rendering a template back into a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("no field is tagged `{variable}`")]
    FieldNotFound { variable: String },

    #[error("field `{field}` is tagged `{variable}` but its type cannot be rendered")]
    UnsupportedField {
        variable: String,
        field: &'static str,
    },
}
