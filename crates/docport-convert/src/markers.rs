//! Block marker parsing.
//!
//! Parses the two MkDocs block openers handled by the converter:
//! `!!! type "Title"` admonitions and `=== "Label"` content tabs.

/// Parsed admonition opener: `!!! type "Title"`.
///
/// The title is optional; `title` is `None` when it is absent or its
/// closing quote is missing. Text after the matched portion is not part
/// of the marker and is discarded by the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AdmonitionMarker<'a> {
    /// Leading whitespace, exactly as written.
    pub indent: &'a str,
    /// Admonition type keyword (e.g. "note", "warning").
    pub kind: &'a str,
    /// Quoted title, without the quotes.
    pub title: Option<&'a str>,
}

/// Parsed tab opener: `=== "Label"`.
///
/// The quoted label is required; `=== Plain` is not a tab opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TabMarker<'a> {
    /// Leading whitespace, exactly as written.
    pub indent: &'a str,
    /// Quoted label, without the quotes. May be empty.
    pub label: &'a str,
}

/// Parse a line as an admonition opener.
///
/// Grammar: leading whitespace, `!!!`, at least one whitespace, a word
/// keyword, then optionally at least one whitespace and a double-quoted
/// title (shortest match).
pub(crate) fn parse_admonition(line: &str) -> Option<AdmonitionMarker<'_>> {
    let (indent, rest) = split_indent(line);
    let rest = rest.strip_prefix("!!!")?;

    // At least one whitespace between the marker and the keyword.
    let after_ws = rest.trim_start();
    if after_ws.len() == rest.len() {
        return None;
    }

    let kind_len = after_ws
        .chars()
        .take_while(|&c| is_word_char(c))
        .map(char::len_utf8)
        .sum::<usize>();
    if kind_len == 0 {
        return None;
    }
    let kind = &after_ws[..kind_len];

    Some(AdmonitionMarker {
        indent,
        kind,
        title: parse_quoted_title(&after_ws[kind_len..]),
    })
}

/// Parse a line as a tab opener.
///
/// Grammar: leading whitespace, `===`, optional whitespace, a
/// double-quoted label (shortest match, closing quote required).
pub(crate) fn parse_tab(line: &str) -> Option<TabMarker<'_>> {
    let (indent, rest) = split_indent(line);
    let rest = rest.strip_prefix("===")?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('"')?;
    let label = &rest[..rest.find('"')?];
    Some(TabMarker { indent, label })
}

/// Split a line into its leading whitespace run and the remainder.
pub(crate) fn split_indent(line: &str) -> (&str, &str) {
    let rest = line.trim_start();
    let (indent, _) = line.split_at(line.len() - rest.len());
    (indent, rest)
}

/// Indentation level of a line: count of leading whitespace characters.
pub(crate) fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Whether the first `count` characters exist and are all whitespace.
pub(crate) fn has_whitespace_prefix(line: &str, count: usize) -> bool {
    let mut seen = 0;
    for c in line.chars().take(count) {
        if !c.is_whitespace() {
            return false;
        }
        seen += 1;
    }
    seen == count
}

/// The line with its first `count` characters removed.
///
/// Returns the empty string when the line is shorter than `count`.
pub(crate) fn strip_chars(line: &str, count: usize) -> &str {
    line.char_indices()
        .nth(count)
        .map_or("", |(offset, _)| &line[offset..])
}

/// Title grammar: at least one whitespace, then `"..."` up to the first
/// closing quote. Anything else means "no title".
fn parse_quoted_title(rest: &str) -> Option<&str> {
    let after_ws = rest.trim_start();
    if after_ws.len() == rest.len() {
        return None;
    }
    let after_quote = after_ws.strip_prefix('"')?;
    Some(&after_quote[..after_quote.find('"')?])
}

/// Word characters as matched by the opener keyword: alphanumerics and
/// underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
