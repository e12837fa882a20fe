//! Markdown attribute-list stripping.
//!
//! Python-Markdown's `attr_list`/`annotate` extensions leave `{ .annotate }`
//! marker lines in the source. MDX parses `{}` as an expression, so these
//! lines must go before the output can compile.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// A line consisting solely of `{ .annotate }`, surrounding whitespace
/// allowed.
static ANNOTATE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\{\s*\.annotate\s*\}\s*$").unwrap());

/// Remove whole-line `{ .annotate }` annotations.
///
/// Only lines consisting solely of the annotation are affected; the
/// token appearing mid-line is left untouched. Stateless and
/// order-independent with respect to [`convert`](crate::convert).
#[must_use]
pub fn strip_attributes(input: &str) -> Cow<'_, str> {
    ANNOTATE_LINE.replace_all(input, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_annotation_line_emptied() {
        let input = "before\n{ .annotate }\nafter\n";
        assert_eq!(strip_attributes(input), "before\n\nafter\n");
    }

    #[test]
    fn test_annotation_line_with_surrounding_whitespace() {
        let input = "before\n   {  .annotate  }  \nafter";
        assert_eq!(strip_attributes(input), "before\n\nafter");
    }

    #[test]
    fn test_annotation_followed_by_blank_line() {
        // The trailing whitespace match absorbs the annotation's own
        // newline when a blank line follows.
        let input = "before\n{ .annotate }\n\nafter";
        assert_eq!(strip_attributes(input), "before\n\nafter");
    }

    #[test]
    fn test_mid_line_annotation_untouched() {
        let input = "text { .annotate } more\n";
        assert_eq!(strip_attributes(input), input);
    }

    #[test]
    fn test_other_attribute_lists_untouched() {
        let input = "{ .wide }\n{: #anchor }\n";
        assert_eq!(strip_attributes(input), input);
    }

    #[test]
    fn test_multiple_occurrences() {
        let input = "a\n{ .annotate }\nb\n{.annotate}\nc";
        assert_eq!(strip_attributes(input), "a\n\nb\n\nc");
    }

    #[test]
    fn test_no_annotations_borrows() {
        let input = "plain text\n";
        assert!(matches!(strip_attributes(input), Cow::Borrowed(_)));
    }
}
