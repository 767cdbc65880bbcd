/// Template module for compiled path patterns
///
/// Contains the `Template` type and the pure functional pieces that build it:
/// - `segment` - classify a raw token as static text or a variable
/// - `parser` - split, compile and validate a whole template string
///
/// A `Template` is immutable after construction and can be shared across
/// threads without synchronization.

pub mod parser;
pub mod segment;

use std::fmt;
use std::str::FromStr;

pub use segment::{classify_segment, Segment};

use crate::TemplateError;

/// A compiled path template such as `/items/{id}/subitems/{subid}`
///
/// # Examples
///
/// ```
/// use pathfmt::{Segment, Template};
///
/// let template = Template::new("/items/{id}/subitems/{subid}");
/// assert_eq!(template.len(), 4);
/// assert_eq!(template.segments()[1], Segment::Variable("id".to_string()));
/// assert_eq!(template.variables().collect::<Vec<_>>(), vec!["id", "subid"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Compiles a template without validation
    ///
    /// Always succeeds. Tokens that are not `{name}` (including `{}` and
    /// stray braces) become static segments holding the raw token.
    pub fn new(template: impl Into<String>) -> Self {
        let source = template.into();
        let segments = parser::compile_segments(&source);
        Template { source, segments }
    }

    /// Compiles a template and rejects malformed placeholders
    ///
    /// # Examples
    ///
    /// ```
    /// use pathfmt::{Template, TemplateError};
    ///
    /// assert!(Template::parse("/users/{id}").is_ok());
    /// assert_eq!(
    ///     Template::parse("/users/{id}/{id}"),
    ///     Err(TemplateError::DuplicateVariable { name: "id".to_string() })
    /// );
    /// ```
    pub fn parse(template: impl Into<String>) -> Result<Self, TemplateError> {
        let template = Template::new(template);
        parser::validate_segments(&template.segments)?;
        Ok(template)
    }

    /// The template text as given
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: even `""` compiles to one empty static segment
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Variable names in segment order
    pub fn variables(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(Segment::variable)
    }

    /// Whether the template text began with `/`
    pub fn has_leading_slash(&self) -> bool {
        self.source.starts_with('/')
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

impl From<&str> for Template {
    fn from(template: &str) -> Self {
        Template::new(template)
    }
}

impl From<String> for Template {
    fn from(template: String) -> Self {
        Template::new(template)
    }
}

impl AsRef<str> for Template {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Template {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.source)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Template {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let source = String::deserialize(deserializer)?;
        Template::parse(source).map_err(serde::de::Error::custom)
    }
}
