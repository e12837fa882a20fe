//! Inline style-attribute stripping.
//!
//! Raw HTML embedded in the docs occasionally carries `style="..."`
//! attributes. The target site styles these elements from its own
//! stylesheets, so the inline presentational attribute is dropped.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// A `style` attribute with its preceding whitespace.
static STYLE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+style="[^"]*""#).unwrap());

/// Remove inline `style="..."` attributes wherever they appear.
///
/// The attribute and the whitespace before it are removed; everything
/// else, including the order of remaining attributes, is preserved.
/// Stateless single-pass substitution; a line may lose several
/// attributes.
#[must_use]
pub fn strip_styles(input: &str) -> Cow<'_, str> {
    STYLE_ATTR.replace_all(input, "")
}
