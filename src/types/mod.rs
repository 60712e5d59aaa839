//! Core domain types for schmoji.
//!
//! - `Style` - the artwork styles shipped by the vendor tree
//! - `CodeSequence` and the codepoint table live in `crate::mapping`

mod style;

pub use style::Style;
