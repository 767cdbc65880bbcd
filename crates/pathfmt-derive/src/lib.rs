// Procedural macros for pathfmt

use proc_macro::TokenStream;

use syn::{parse_macro_input, DeriveInput};

mod record;

/// Derive macro for the `PathRecord` trait
///
/// Generates field descriptors so a `Template` can bind path values into the
/// struct and render the struct back into a path.
///
/// # Example
///
/// ```ignore
/// use pathfmt::{PathRecord, Template};
///
/// #[derive(Default, PathRecord)]
/// pub struct UserIdentifier {
///     #[pathfmt("org_num")]
///     pub org_num: i32,
///
///     #[pathfmt]
///     pub id: String,
///
///     // Untagged: never touched
///     pub cached: Option<String>,
/// }
///
/// let template = Template::new("/organizations/{org_num}/users/{id}");
/// let user: UserIdentifier = template.extract("/organizations/123/users/nick")?;
/// ```
///
/// # Field Attributes
///
/// - `#[pathfmt("name")]` - Associate the field with template variable `name`
/// - `#[pathfmt = "name"]` - Same as above
/// - `#[pathfmt]` - Associate the field with a variable of the same name
///
/// # Field Types
///
/// `bool`, `i8`..`i64`, `isize`, `u8`..`u64`, `usize`, `f32`, `f64` and
/// `String` are bound and rendered. Fields of any other type are accepted but
/// skipped when binding, and cannot be rendered.
///
/// # Visibility
///
/// Only `pub` fields (including `pub(crate)` and friends) are settable. A
/// tagged private field is reported at bind time as an inaccessible field.
#[proc_macro_derive(PathRecord, attributes(pathfmt))]
pub fn derive_path_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::impl_path_record(&input).into()
}
