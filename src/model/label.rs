//! Bounded labels for exam names, quiz names, and pragma keys.

use crate::err;

/// The maximum number of characters kept in a label.
///
/// Anything past this is silently dropped.
pub const MAX_LEN: usize = 63;

/// Copies `s` into a fresh string, keeping at most [MAX_LEN] characters.
///
/// Truncation happens on character boundaries, so multi-byte characters are
/// never split.  The copy's storage is reserved fallibly.
///
/// # Errors
///
/// Fails with [err::Error::Alloc] if the copy can't be allocated.
///
/// # Examples
///
/// ```
/// use quiz::model::label;
///
/// assert_eq!(label::truncate("short").unwrap(), "short");
///
/// let long = "x".repeat(100);
/// assert_eq!(label::truncate(&long).unwrap().len(), label::MAX_LEN);
/// ```
pub fn truncate(s: &str) -> err::Result<String> {
    let kept = &s[..boundary(s)];
    let mut out = String::new();
    out.try_reserve_exact(kept.len())?;
    out.push_str(kept);
    Ok(out)
}

/// Finds the byte offset just past the last character kept by [truncate].
fn boundary(s: &str) -> usize {
    s.char_indices().nth(MAX_LEN).map_or(s.len(), |(i, _)| i)
}
