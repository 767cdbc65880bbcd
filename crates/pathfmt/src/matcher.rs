//! Path matching against a compiled template.
//!
//! # Design Decisions
//! - Strict: a static segment that differs from its path token is an error
//! - Positional: segment `i` of the template pairs with token `i` of the path
//! - Length-tolerant: only the shorter of the two sequences is walked, so
//!   shorter and longer paths both match
//! - Duplicate variable names resolve to the value at the highest index

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::path::split_path;
use crate::{MismatchError, Segment, Template};

/// Variable name → matched path token
pub type PathParams = HashMap<String, String>;

impl Template {
    /// Extracts variable values from a concrete path
    ///
    /// # Examples
    ///
    /// ```
    /// use pathfmt::Template;
    ///
    /// let template = Template::new("/items/{id}/subitems/{subid}");
    ///
    /// let params = template.to_map("/items/123/subitems/456").unwrap();
    /// assert_eq!(params.get("id"), Some(&"123".to_string()));
    /// assert_eq!(params.get("subid"), Some(&"456".to_string()));
    ///
    /// // Shorter paths bind what they can
    /// let params = template.to_map("/items/123/subitems").unwrap();
    /// assert_eq!(params.len(), 1);
    ///
    /// // Static text must match
    /// let err = template.to_map("/items/123/invalid/456").unwrap_err();
    /// assert_eq!(err.expected, "subitems");
    /// assert_eq!(err.actual, "invalid");
    /// ```
    pub fn to_map(&self, path: &str) -> Result<PathParams, MismatchError> {
        let mut params = PathParams::new();

        // zip stops at the shorter side and keeps ascending index order
        for (index, (segment, token)) in self.segments().iter().zip(split_path(path)).enumerate() {
            match segment {
                Segment::Variable(name) => {
                    params.insert(name.clone(), token.to_string());
                }
                Segment::Static(expected) if expected == token => {}
                Segment::Static(expected) => {
                    debug!(
                        template = %self,
                        path,
                        index,
                        expected = expected.as_str(),
                        actual = token,
                        "static segment mismatch"
                    );
                    return Err(MismatchError {
                        template: self.as_str().to_string(),
                        path: path.to_string(),
                        index,
                        expected: expected.clone(),
                        actual: token.to_string(),
                    });
                }
            }
        }

        trace!(template = %self, path, params = params.len(), "matched path");
        Ok(params)
    }

    /// Returns true when [`to_map`](Self::to_map) would succeed
    pub fn matches(&self, path: &str) -> bool {
        self.segments()
            .iter()
            .zip(split_path(path))
            .all(|(segment, token)| match segment {
                Segment::Static(expected) => expected == token,
                Segment::Variable(_) => true,
            })
    }
}
