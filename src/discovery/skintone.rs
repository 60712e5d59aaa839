//! Skintone variants and the deterministic collapse rule.
//!
//! An emoji with skintone artwork ships one directory per tone, each with
//! its own style subdirectories. The flatten pipeline collapses these to a
//! single canonical variant: Default wins outright, a lone variant stands
//! in, and anything else is ambiguous and gets skipped.

use std::fmt;
use std::path::PathBuf;

use crate::error::{Result, SchmojiError};
use crate::types::Style;

/// A skintone label used by the vendor tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Skintone {
    Default,
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl Skintone {
    /// The directory name used by the vendor tree.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Skintone::Default => "Default",
            Skintone::Light => "Light",
            Skintone::MediumLight => "Medium-Light",
            Skintone::Medium => "Medium",
            Skintone::MediumDark => "Medium-Dark",
            Skintone::Dark => "Dark",
        }
    }

    /// Parse a tone from a directory name. Case-insensitive; accepts
    /// space or underscore in place of the hyphen.
    pub fn parse(input: &str) -> Option<Skintone> {
        let folded = input.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match folded.as_str() {
            "default" => Some(Skintone::Default),
            "light" => Some(Skintone::Light),
            "medium-light" => Some(Skintone::MediumLight),
            "medium" => Some(Skintone::Medium),
            "medium-dark" => Some(Skintone::MediumDark),
            "dark" => Some(Skintone::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Skintone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One discovered artwork variant: a tone label and the directory holding
/// its files. At entry level the directory is the tone directory; once
/// narrowed to a style it is the style subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkintoneVariant {
    pub tone: Skintone,
    pub dir: PathBuf,
}

/// Pick exactly one variant for an emoji/style pair.
///
/// Operates on the explicit ordered list, never on filesystem enumeration
/// order, so the result is the same on every run:
/// - a Default variant always wins, wherever it sits in the list;
/// - a lone variant is returned as-is;
/// - an empty list returns `None`;
/// - multiple variants without a Default fail with `AmbiguousSkintone`
///   (callers log a warning and skip, never pick arbitrarily).
pub fn select_variant<'a>(
    name: &str,
    style: Style,
    variants: &'a [SkintoneVariant],
) -> Result<Option<&'a SkintoneVariant>> {
    if let Some(default) = variants.iter().find(|v| v.tone == Skintone::Default) {
        return Ok(Some(default));
    }

    match variants {
        [] => Ok(None),
        [only] => Ok(Some(only)),
        _ => Err(SchmojiError::AmbiguousSkintone {
            name: name.to_string(),
            style: style.to_string(),
            labels: variants
                .iter()
                .map(|v| v.tone.dir_name())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}
