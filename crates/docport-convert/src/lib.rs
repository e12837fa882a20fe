//! MkDocs to MDX markup conversion passes.
//!
//! This crate provides the text transforms used to port MkDocs-dialect
//! documentation to the MDX dialect:
//!
//! - [`convert`]: the block converter. A line-by-line state machine that
//!   rewrites indentation-delimited `!!! type "Title"` admonitions into
//!   `:::type[Title]` ... `:::` blocks and flattens `=== "Label"` tab
//!   items into `**Label**` lines, unindenting block bodies by one unit.
//! - [`strip_attributes`]: removes whole-line `{ .annotate }` markers.
//! - [`strip_styles`]: removes inline `style="..."` attributes from raw
//!   HTML.
//!
//! All three operate purely on in-memory text, never fail, and hold no
//! state beyond one call.
//!
//! # Example
//!
//! ```
//! use docport_convert::convert;
//!
//! let mkdocs = "!!! warning\n    Mind the gap.\n\nDone.";
//! assert_eq!(convert(mkdocs), ":::warning\nMind the gap.\n\n:::\nDone.");
//! ```

mod attributes;
mod converter;
mod markers;
mod styles;

pub use attributes::strip_attributes;
pub use converter::convert;
pub use styles::strip_styles;
