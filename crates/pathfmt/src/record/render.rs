// File: src/record/render.rs
// Purpose: Build a concrete path from a template and a record or mapping

use super::PathRecord;
use crate::path::join_segments;
use crate::{PathParams, RenderError, Segment, Template};

impl Template {
    /// Renders a path from the tagged fields of `source`
    ///
    /// Static segments are copied, each variable is replaced by the first field
    /// tagged with its name. The result starts with `/` when the template does.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathfmt::{PathRecord, Template};
    ///
    /// #[derive(PathRecord)]
    /// pub struct Sub {
    ///     #[pathfmt("id")]
    ///     pub id: i32,
    ///     #[pathfmt("subid")]
    ///     pub subid: String,
    /// }
    ///
    /// let template = Template::new("/items/{id}/subitems/{subid}");
    /// let path = template
    ///     .render(&Sub { id: 7, subid: "x".to_string() })
    ///     .unwrap();
    /// assert_eq!(path, "/items/7/subitems/x");
    /// ```
    pub fn render<R>(&self, source: &R) -> Result<String, RenderError>
    where
        R: PathRecord + ?Sized,
    {
        let fields = source.path_values();

        let rendered = self
            .segments()
            .iter()
            .map(|segment| match segment {
                Segment::Static(text) => Ok(text.clone()),
                Segment::Variable(name) => {
                    let field = fields
                        .iter()
                        .find(|field| field.tag == Some(name.as_str()))
                        .ok_or_else(|| RenderError::FieldNotFound {
                            variable: name.clone(),
                        })?;

                    field
                        .value
                        .map(|value| value.to_path_string())
                        .ok_or_else(|| RenderError::UnsupportedField {
                            variable: name.clone(),
                            field: field.name,
                        })
                }
            })
            .collect::<Result<Vec<String>, RenderError>>()?;

        Ok(join_segments(rendered, self.has_leading_slash()))
    }

    /// Renders a path from a variable → value mapping
    ///
    /// # Examples
    ///
    /// ```
    /// use pathfmt::{PathParams, Template};
    ///
    /// let template = Template::new("/users/{id}");
    /// let mut params = PathParams::new();
    /// params.insert("id".to_string(), "123".to_string());
    ///
    /// assert_eq!(template.render_params(&params).unwrap(), "/users/123");
    /// ```
    pub fn render_params(&self, params: &PathParams) -> Result<String, RenderError> {
        let rendered = self
            .segments()
            .iter()
            .map(|segment| match segment {
                Segment::Static(text) => Ok(text.as_str()),
                Segment::Variable(name) => {
                    params
                        .get(name)
                        .map(String::as_str)
                        .ok_or_else(|| RenderError::FieldNotFound {
                            variable: name.clone(),
                        })
                }
            })
            .collect::<Result<Vec<&str>, RenderError>>()?;

        Ok(join_segments(rendered, self.has_leading_slash()))
    }
}
