//! Record binding and rendering.
//!
//! A record describes its fields through [`PathRecord`], normally generated by
//! `#[derive(PathRecord)]`:
//!
//! ```
//! use pathfmt::{PathRecord, Template};
//!
//! #[derive(Debug, Default, PathRecord)]
//! pub struct UserIdentifier {
//!     #[pathfmt("org_num")]
//!     pub org_num: i32,
//!     #[pathfmt("id")]
//!     pub id: String,
//! }
//!
//! let template = Template::new("/organizations/{org_num}/users/{id}");
//!
//! let mut user = UserIdentifier::default();
//! template.bind("/organizations/123/users/nick", &mut user).unwrap();
//! assert_eq!(user.org_num, 123);
//! assert_eq!(user.id, "nick");
//!
//! assert_eq!(template.render(&user).unwrap(), "/organizations/123/users/nick");
//! ```
//!
//! Field descriptors are rebuilt on every call; nothing is cached.

mod bind;
mod render;
mod scalar;

pub use bind::bind_params;
pub use scalar::{FieldKind, PathScalar};

/// A record whose fields can be bound from, and rendered into, paths
///
/// Implementations list **every** field in declaration order, tagged or not.
/// Hand-written implementations are fine when deriving is not an option:
///
/// ```
/// use pathfmt::{FieldSlot, FieldView, PathField, PathRecord, Template};
///
/// #[derive(Default)]
/// struct Page {
///     number: u32,
/// }
///
/// impl PathRecord for Page {
///     fn path_fields(&mut self) -> Vec<PathField<'_>> {
///         vec![PathField {
///             name: "number",
///             tag: Some("page"),
///             settable: true,
///             slot: FieldSlot::Scalar(&mut self.number),
///         }]
///     }
///
///     fn path_values(&self) -> Vec<FieldView<'_>> {
///         vec![FieldView {
///             name: "number",
///             tag: Some("page"),
///             value: Some(&self.number),
///         }]
///     }
/// }
///
/// let template = Template::new("/docs/{page}");
/// let page: Page = template.extract("/docs/0x10").unwrap();
/// assert_eq!(page.number, 16);
/// ```
pub trait PathRecord {
    /// Mutable descriptors for binding
    fn path_fields(&mut self) -> Vec<PathField<'_>>;

    /// Shared descriptors for rendering
    fn path_values(&self) -> Vec<FieldView<'_>>;
}

/// One record field, ready to be assigned
pub struct PathField<'a> {
    /// Rust field name, used in error messages
    pub name: &'static str,
    /// Template variable this field is associated with
    pub tag: Option<&'static str>,
    /// Whether the binder may assign this field
    pub settable: bool,
    pub slot: FieldSlot<'a>,
}

/// Where a bound value goes
pub enum FieldSlot<'a> {
    /// A field of one of the supported scalar kinds
    Scalar(&'a mut dyn PathScalar),
    /// Any other type; the binder leaves it untouched
    Unsupported,
}

/// One record field, ready to be rendered
pub struct FieldView<'a> {
    pub name: &'static str,
    pub tag: Option<&'static str>,
    /// `None` for unsupported field types
    pub value: Option<&'a dyn PathScalar>,
}

impl std::fmt::Debug for PathField<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.slot {
            FieldSlot::Scalar(value) => Some(value.kind()),
            FieldSlot::Unsupported => None,
        };
        f.debug_struct("PathField")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("settable", &self.settable)
            .field("kind", &kind)
            .finish()
    }
}

impl std::fmt::Debug for FieldView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldView")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("value", &self.value.map(|v| v.to_path_string()))
            .finish()
    }
}
