//! The two asset pipelines.
//!
//! `flatten` mirrors the vendor tree into a Unicode-named layout;
//! `select` curates a subset of that mirror for the downstream game.
//! Both share one shape: discover, resolve, materialize, and recover from
//! per-entry failures with warnings.

mod flatten;
mod select;

pub use flatten::{flatten, FlattenOptions};
pub use select::{select, SelectOptions, SelectionSpec};
