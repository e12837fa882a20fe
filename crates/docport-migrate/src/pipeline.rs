//! Per-document transform pipeline.
//!
//! Applies the conversion passes in order (block conversion, attribute
//! stripping, style stripping) and prepends the tab-component imports
//! when the document uses the `<Tabs>` container without importing it.

use docport_convert::{convert, strip_attributes, strip_styles};

/// Import preamble for documents using the tab container component.
const TABS_IMPORTS: &str =
    "import Tabs from '@theme/Tabs';\nimport TabItem from '@theme/TabItem';\n\n";

/// Container tag that requires the imports.
const TABS_TAG: &str = "<Tabs>";

/// Probe for an already-present import line.
const TABS_IMPORT_PROBE: &str = "import Tabs";

/// Run the full transform pipeline over one document.
///
/// Note the converter flattens tab groups to their labels and never
/// emits `<Tabs>` itself, so the import preamble only fires for
/// documents that already carry the container tag in raw form.
pub(crate) fn apply(input: &str) -> String {
    let converted = convert(input);
    let stripped = strip_attributes(&converted);
    let stripped = strip_styles(&stripped);

    let mut output = stripped.into_owned();
    if output.contains(TABS_TAG) && !output.contains(TABS_IMPORT_PROBE) {
        output.insert_str(0, TABS_IMPORTS);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_passes_compose() {
        let input = concat!(
            "!!! note \"Styled\"\n",
            "    <span style=\"color:red\">red</span>\n",
            "{ .annotate }\n",
            "tail\n",
        );
        let expected = ":::note[Styled]\n<span>red</span>\n:::\n\ntail\n";
        assert_eq!(apply(input), expected);
    }

    #[test]
    fn test_plain_document_unchanged() {
        let input = "# Title\n\nNothing to port here.\n";
        assert_eq!(apply(input), input);
    }

    #[test]
    fn test_imports_added_for_existing_tabs_tag() {
        let input = "<Tabs>\n<TabItem value=\"a\">a</TabItem>\n</Tabs>\n";
        let output = apply(input);

        assert!(output.starts_with("import Tabs from '@theme/Tabs';\n"));
        assert!(output.contains("import TabItem from '@theme/TabItem';\n\n<Tabs>"));
    }

    #[test]
    fn test_imports_not_duplicated() {
        let input = "import Tabs from '@theme/Tabs';\n\n<Tabs>\n</Tabs>\n";
        assert_eq!(apply(input), input);
    }

    #[test]
    fn test_flattened_tabs_do_not_trigger_imports() {
        let input = "=== \"macOS\"\n    brew install docport\n";
        let output = apply(input);

        assert_eq!(output, "**macOS**\nbrew install docport\n");
        assert!(!output.contains("import Tabs"));
    }
}
