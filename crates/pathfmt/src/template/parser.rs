/// Template compilation and validation
///
/// Pure functional parsers that transform template strings into segment lists.
/// All functions are **pure**: same input → same output, no side effects.

use std::collections::HashSet;

use super::segment::{classify_segment, Segment};
use crate::path::split_path;
use crate::TemplateError;

/// Compiles a template string into its segments (pure function)
///
/// Never fails. Degenerate input degrades to static segments.
///
/// # Examples
///
/// ```
/// use pathfmt::template::parser::compile_segments;
/// use pathfmt::Segment;
///
/// let segments = compile_segments("/items/{id}");
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Static("items".to_string()),
///         Segment::Variable("id".to_string()),
///     ]
/// );
///
/// // Trailing slash keeps an empty static segment
/// let segments = compile_segments("/items/");
/// assert_eq!(segments.last(), Some(&Segment::Static(String::new())));
/// ```
///
/// # Performance
///
/// - O(n) where n is template length
/// - Single pass, one allocation per segment
pub fn compile_segments(template: &str) -> Vec<Segment> {
    split_path(template).map(classify_segment).collect()
}

/// Checks compiled segments for malformed placeholders (pure function)
///
/// # Rules (first violation wins, in segment order)
///
/// - `{}` → [`TemplateError::EmptyVariable`]
/// - a static segment containing `{` or `}`, or a variable name containing
///   either → [`TemplateError::UnbalancedBraces`]
/// - a variable name seen twice → [`TemplateError::DuplicateVariable`]
///
/// # Examples
///
/// ```
/// use pathfmt::template::parser::{compile_segments, validate_segments};
/// use pathfmt::TemplateError;
///
/// assert!(validate_segments(&compile_segments("/items/{id}")).is_ok());
///
/// let err = validate_segments(&compile_segments("/items/{}")).unwrap_err();
/// assert_eq!(err, TemplateError::EmptyVariable { index: 1 });
/// ```
pub fn validate_segments(segments: &[Segment]) -> Result<(), TemplateError> {
    let mut seen = HashSet::new();

    for (index, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Static(text) if text == "{}" => {
                return Err(TemplateError::EmptyVariable { index });
            }
            Segment::Static(text) if has_brace(text) => {
                return Err(TemplateError::UnbalancedBraces {
                    index,
                    segment: text.clone(),
                });
            }
            Segment::Variable(name) if has_brace(name) => {
                return Err(TemplateError::UnbalancedBraces {
                    index,
                    segment: format!("{{{}}}", name),
                });
            }
            Segment::Variable(name) => {
                if !seen.insert(name.as_str()) {
                    return Err(TemplateError::DuplicateVariable { name: name.clone() });
                }
            }
            Segment::Static(_) => {}
        }
    }

    Ok(())
}

fn has_brace(text: &str) -> bool {
    text.contains(['{', '}'])
}
