//! Line-by-line block conversion.
//!
//! Converts MkDocs indentation-delimited blocks to MDX explicit-delimiter
//! blocks:
//!
//! - `!!! note "Title"` becomes `:::note[Title]`, closed by a `:::` line
//!   once indentation returns to the opener's level (or at end of input).
//! - `=== "Label"` becomes `**Label**` (tab groups are flattened to their
//!   labels; no container element is produced).
//!
//! Body lines lose one indentation unit. Block boundaries are derived
//! purely from indentation: a non-blank line indented at or below a
//! block's opening column is already outside the block.

use crate::markers::{
    has_whitespace_prefix, indent_of, parse_admonition, parse_tab, strip_chars,
};

/// Indentation unit of the source dialect (four spaces).
const INDENT_UNIT: usize = 4;

/// Kind of block tracked by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    /// `!!! type` callout. Closed with an explicit `:::` terminator.
    Admonition,
    /// `=== "Label"` tab item. Ends implicitly on dedent; no terminator.
    TabGroup,
}

/// An open block and the indentation column it was opened at.
///
/// The opening column is the only state needed to decide closure: a
/// non-blank line indented at or below it ends the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    kind: BlockKind,
    start_indent: usize,
}

impl Block {
    fn new(kind: BlockKind, start_indent: usize) -> Self {
        Self { kind, start_indent }
    }

    /// Indentation expected of body lines: one unit past the opener.
    fn body_indent(&self) -> usize {
        self.start_indent + INDENT_UNIT
    }

    /// Whether a non-blank line at `indent` still belongs to the body.
    fn contains(&self, indent: usize) -> bool {
        indent > self.start_indent
    }
}

/// Conversion state for a single document.
///
/// At most one admonition and one tab group are open at a time; opening
/// a new block of a kind replaces any same-kind open block. Deeper
/// nesting is not modeled.
#[derive(Debug, Default)]
struct ConversionState {
    admonition: Option<Block>,
    tab_group: Option<Block>,
}

impl ConversionState {
    /// Record a newly opened block, replacing any open block of its kind.
    fn open(&mut self, block: Block) {
        match block.kind {
            BlockKind::Admonition => self.admonition = Some(block),
            BlockKind::TabGroup => self.tab_group = Some(block),
        }
    }
}

/// Convert one document from the MkDocs dialect to the MDX dialect.
///
/// Total: malformed or unmatched markup falls through unchanged rather
/// than erroring. State is freshly initialized per call and never
/// shared, so separate documents can be converted from separate threads.
///
/// # Example
///
/// ```
/// use docport_convert::convert;
///
/// let output = convert("!!! note \"Heads up\"\n    Indented body.\nAfter.");
/// assert_eq!(output, ":::note[Heads up]\nIndented body.\n:::\nAfter.");
/// ```
#[must_use]
pub fn convert(input: &str) -> String {
    let mut state = ConversionState::default();
    let mut out: Vec<String> = Vec::new();

    for line in input.split('\n') {
        push_line(&mut state, line, &mut out);
    }

    // A block left open by the last line still gets its terminator.
    if let Some(block) = state.admonition.take() {
        out.push(terminator(block.start_indent));
    }

    out.join("\n")
}

/// Process one input line, appending converted output lines.
///
/// Rules apply in priority order; a rule that consumes the line returns.
/// A line that closes an admonition is *not* consumed by the close: it
/// falls through and is reprocessed as a tab body or ordinary line.
fn push_line(state: &mut ConversionState, line: &str, out: &mut Vec<String>) {
    // Admonition opener. An opener at or above the open block's column
    // closes it first; a deeper opener replaces the open block without a
    // terminator. Tab state is untouched either way.
    if let Some(marker) = parse_admonition(line) {
        let indent = marker.indent.chars().count();
        if let Some(open) = state.admonition
            && !open.contains(indent)
        {
            out.push(terminator(open.start_indent));
        }
        out.push(match marker.title {
            Some(title) if !title.is_empty() => {
                format!("{}:::{}[{title}]", marker.indent, marker.kind)
            }
            _ => format!("{}:::{}", marker.indent, marker.kind),
        });
        state.open(Block::new(BlockKind::Admonition, indent));
        return;
    }

    // Tab opener. Flattened: the label is emitted as strong emphasis and
    // no container element or terminator is ever produced.
    if let Some(marker) = parse_tab(line) {
        let indent = marker.indent.chars().count();
        if let Some(open) = state.admonition
            && !open.contains(indent)
        {
            out.push(terminator(open.start_indent));
            state.admonition = None;
        }
        state.open(Block::new(BlockKind::TabGroup, indent));
        out.push(format!("{}**{}**", marker.indent, marker.label));
        return;
    }

    let blank = line.trim().is_empty();

    // Admonition body. Blank lines pass through without closing the
    // block; their indentation is not evaluated.
    if let Some(open) = state.admonition {
        if blank {
            out.push(line.to_owned());
            return;
        }
        let indent = indent_of(line);
        if open.contains(indent) {
            let body = open.body_indent();
            let converted = if has_whitespace_prefix(line, body) {
                strip_chars(line, body).to_owned()
            } else {
                // Short of a full unit: drop the opener's columns and
                // trim what indentation remains.
                strip_chars(line, open.start_indent).trim_start().to_owned()
            };
            out.push(converted);
            return;
        }
        out.push(terminator(open.start_indent));
        state.admonition = None;
        // Falls through: the closing line is still a tab body or an
        // ordinary line.
    }

    // Tab body. Ends implicitly on dedent, with no compensating close.
    if let Some(open) = state.tab_group {
        if blank {
            out.push(line.to_owned());
            return;
        }
        let indent = indent_of(line);
        if open.contains(indent) {
            let body = open.body_indent();
            let converted = if has_whitespace_prefix(line, body) {
                strip_chars(line, body).to_owned()
            } else {
                // Irregular indentation: leave the line as written.
                line.to_owned()
            };
            out.push(converted);
            return;
        }
        state.tab_group = None;
    }

    out.push(line.to_owned());
}

/// Terminator line for a block opened at `start_indent`.
///
/// Always built from spaces, regardless of the whitespace the opener
/// used.
fn terminator(start_indent: usize) -> String {
    format!("{}:::", " ".repeat(start_indent))
}
