//! In-place documentation tree migration.
//!
//! Walks a docs directory, runs every markdown file through the
//! conversion pipeline ([`docport_convert`] passes plus tab-component
//! import injection), and rewrites only the files whose content
//! actually changed. Each converted file is reported through the
//! returned [`MigrateResult`] and logged at INFO level.

mod error;
mod executor;
mod pipeline;
mod result;
mod scanner;

pub use error::MigrateError;
pub use executor::Migrator;
pub use result::MigrateResult;
