//! schmoji - emoji asset pipeline
//!
//! Transforms a vendor-supplied emoji artwork tree into two derived asset
//! sets: a flattened, Unicode-codepoint-named mirror of the source tree,
//! and a curated subset of that mirror for the downstream game.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod mapping;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod types;

pub use discovery::{scan_assets, select_variant, EmojiEntry, Skintone, SkintoneVariant};
pub use error::{Result, SchmojiError};
pub use mapping::{normalize_name, CodeSequence, CodepointMap};
pub use pipeline::{flatten, select, FlattenOptions, SelectOptions, SelectionSpec};
pub use report::{Diagnostic, RunReport, Severity};
pub use types::Style;
