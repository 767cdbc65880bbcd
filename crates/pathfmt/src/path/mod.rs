//! Path splitting shared by templates and concrete paths
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.
//!
//! Paths are never normalized. `//`, trailing slashes and `..` survive as
//! ordinary (possibly empty) segments.

/// Splits a path into its raw segments
///
/// Strips a single leading `/`, then splits on `/`. Empty segments are kept,
/// so a trailing slash produces a trailing `""`.
///
/// # Examples
///
/// ```
/// use pathfmt::path::split_path;
///
/// let segments: Vec<&str> = split_path("/items/123").collect();
/// assert_eq!(segments, vec!["items", "123"]);
///
/// let segments: Vec<&str> = split_path("items/123/").collect();
/// assert_eq!(segments, vec!["items", "123", ""]);
///
/// let segments: Vec<&str> = split_path("/").collect();
/// assert_eq!(segments, vec![""]);
/// ```
///
/// # Performance
///
/// - O(n) where n is path length
/// - Lazy, borrows from the input (no allocations)
pub fn split_path(path: &str) -> std::str::Split<'_, char> {
    path.strip_prefix('/').unwrap_or(path).split('/')
}

/// Joins rendered segments back into a path
///
/// Inverse of [`split_path`] when `leading_slash` matches the split input.
pub(crate) fn join_segments<I, S>(segments: I, leading_slash: bool) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    if leading_slash {
        out.push('/');
    }

    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        out.push_str(segment.as_ref());
    }

    out
}
