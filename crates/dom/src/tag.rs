//! Tag and attribute name normalization for element construction.

use std::borrow::Cow;

/// Fold a name for HTML-namespace matching.
///
/// Policy: ASCII letters are lowercased; non-ASCII code points are
/// preserved as-is, so a name with a non-ASCII capital matches its own
/// original casing and nothing else. Borrows when no fold is needed.
pub fn fold_tag_name(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}
