// File: src/record/bind.rs
// Purpose: Assign matched path values onto a record's tagged fields

use tracing::{debug, trace};

use super::{FieldSlot, PathRecord};
use crate::{BindError, PathParams, Template};

/// Assigns values from `params` to the tagged fields of `target`
///
/// Fields are visited in declaration order:
/// - untagged fields are skipped
/// - a tagged field that is not settable fails with
///   [`BindError::InaccessibleField`]
/// - a tag with no entry in `params` leaves the field as it was
/// - unsupported field types are skipped
/// - a value that does not parse fails with [`BindError::Coercion`]
///
/// Binding stops at the first error. Fields assigned before it keep their new
/// values.
pub fn bind_params<R>(params: &PathParams, target: &mut R) -> Result<(), BindError>
where
    R: PathRecord + ?Sized,
{
    for field in target.path_fields() {
        let Some(tag) = field.tag else {
            continue;
        };

        if !field.settable {
            return Err(BindError::InaccessibleField {
                field: field.name,
                tag,
            });
        }

        let Some(raw) = params.get(tag) else {
            trace!(field = field.name, tag, "no value for tag, leaving field as is");
            continue;
        };

        match field.slot {
            FieldSlot::Scalar(slot) => {
                slot.assign_path_str(raw).map_err(|source| {
                    debug!(field = field.name, tag, value = raw.as_str(), %source, "coercion failed");
                    BindError::Coercion {
                        field: field.name,
                        value: raw.clone(),
                        type_name: slot.type_name(),
                        source,
                    }
                })?;
            }
            FieldSlot::Unsupported => {
                trace!(field = field.name, tag, "unsupported field type, skipping");
            }
        }
    }

    Ok(())
}

impl Template {
    /// Matches `path` and binds the result onto `target`
    ///
    /// Composes [`Template::to_map`] and [`bind_params`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathfmt::{PathRecord, Template};
    ///
    /// #[derive(Default, PathRecord)]
    /// pub struct Item {
    ///     #[pathfmt("id")]
    ///     pub id: u64,
    /// }
    ///
    /// let template = Template::new("/items/{id}");
    /// let mut item = Item::default();
    /// template.bind("/items/42", &mut item).unwrap();
    /// assert_eq!(item.id, 42);
    /// ```
    pub fn bind<R>(&self, path: &str, target: &mut R) -> Result<(), BindError>
    where
        R: PathRecord + ?Sized,
    {
        let params = self.to_map(path)?;
        bind_params(&params, target)
    }

    /// Binds `path` into a fresh `R::default()`
    pub fn extract<R>(&self, path: &str) -> Result<R, BindError>
    where
        R: PathRecord + Default,
    {
        let mut target = R::default();
        self.bind(path, &mut target)?;
        Ok(target)
    }
}
