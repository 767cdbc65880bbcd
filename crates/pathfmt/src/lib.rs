//! # pathfmt
//!
//! Path templates with named placeholders:
//! - Compile templates like `/items/{id}/subitems/{subid}`
//! - Extract variable values from concrete paths
//! - Bind values onto tagged struct fields with type coercion
//! - Render structs (or maps) back into paths
//!
//! ## Matching Rules
//!
//! Matching is strictly positional. Both template and path drop one leading
//! `/` and split on `/`, then segment `i` pairs with token `i`:
//! - Variables capture the token
//! - Static segments must equal the token, or matching fails
//! - Whichever side is longer has its extra segments ignored
//!
//! No normalization, percent-decoding, wildcards or optional segments.
//!
//! ## Example
//!
//! ```
//! use pathfmt::{PathRecord, Template};
//!
//! #[derive(Debug, Default, PartialEq, PathRecord)]
//! pub struct MyPath {
//!     #[pathfmt("a")]
//!     pub a: String,
//!     #[pathfmt("b")]
//!     pub b: i32,
//!     #[pathfmt("c")]
//!     pub c: f64,
//!     #[pathfmt("d")]
//!     pub d: bool,
//! }
//!
//! let template = Template::new("/a/{a}/b/{b}/c/{c}/d/{d}");
//!
//! let params = template.to_map("/a/abc/b/123").unwrap();
//! assert_eq!(params.get("a"), Some(&"abc".to_string()));
//!
//! let path: MyPath = template.extract("/a/abc/b/123/c/2.5/d/true").unwrap();
//! assert_eq!(
//!     path,
//!     MyPath { a: "abc".to_string(), b: 123, c: 2.5, d: true }
//! );
//! ```
//!
//! ## Records
//!
//! `#[derive(PathRecord)]` only accepts structs with named fields:
//!
//! ```compile_fail
//! use pathfmt::PathRecord;
//!
//! #[derive(PathRecord)]
//! pub enum NotARecord {
//!     A,
//! }
//! ```

extern crate self as pathfmt;

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod matcher;
pub mod path;
mod record;
pub mod template;

pub use error::{BindError, CoercionError, MismatchError, RenderError, TemplateError};
pub use matcher::PathParams;
pub use record::{bind_params, FieldKind, FieldSlot, FieldView, PathField, PathRecord, PathScalar};
pub use template::{classify_segment, Segment, Template};

/// Derive macro for [`PathRecord`]
///
/// Tag fields with `#[pathfmt("variable")]`, or a bare `#[pathfmt]` to use
/// the field's own name. Only `pub` fields can be bound; tagging a private
/// field makes binding fail with [`BindError::InaccessibleField`].
pub use pathfmt_derive::PathRecord;
