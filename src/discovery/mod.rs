//! Discovery of emoji entries in the vendor asset tree.
//!
//! The tree is grouped by emoji name, then (optionally) by skintone, then
//! by style: `assets/<Emoji name>/[<Skintone>/]<Style>/<files>`.

mod scanner;
mod skintone;

pub use scanner::{scan_assets, style_files, EmojiEntry};
pub use skintone::{select_variant, Skintone, SkintoneVariant};
