//! Segment classification for path templates
//!
//! Pure functional parsing of raw template tokens into typed segments.
//! All functions are **pure**: same input → same output, no side effects.

/// A single compiled template segment
///
/// # Examples
///
/// ```
/// use pathfmt::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("items"), Segment::Static("items".to_string()));
/// assert_eq!(classify_segment("{id}"), Segment::Variable("id".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text that must equal the path token
    Static(String),
    /// Named placeholder, name is never empty
    Variable(String),
}

impl Segment {
    /// Returns the variable name, if this is a variable segment
    pub fn variable(&self) -> Option<&str> {
        match self {
            Segment::Variable(name) => Some(name),
            Segment::Static(_) => None,
        }
    }

    /// Returns the literal text, if this is a static segment
    pub fn as_static(&self) -> Option<&str> {
        match self {
            Segment::Static(text) => Some(text),
            Segment::Variable(_) => None,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Segment::Variable(_))
    }
}

/// Classifies a raw token into a segment (pure function)
///
/// # Parsing Rules
///
/// 1. **Variable**: `{name}` where `name` is non-empty. Exactly one leading `{`
///    and one trailing `}` are removed, so `{{id}}` yields the name `{id}`.
/// 2. **Static**: any other text, kept verbatim. This includes `{}`,
///    `{id` and `id}`.
///
/// # Examples
///
/// ```
/// use pathfmt::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("{}"), Segment::Static("{}".to_string()));
/// assert_eq!(classify_segment("{id"), Segment::Static("{id".to_string()));
/// assert_eq!(classify_segment(""), Segment::Static(String::new()));
/// ```
pub fn classify_segment(token: &str) -> Segment {
    match token.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(name) if !name.is_empty() => Segment::Variable(name.to_string()),
        _ => Segment::Static(token.to_string()),
    }
}
