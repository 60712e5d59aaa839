//! Artwork styles.
//!
//! The vendor tree groups every emoji's files into a fixed set of style
//! directories. The enum is closed: directories with other names are not
//! styles and are ignored by discovery.

use std::fmt;

/// An artwork style directory in the vendor tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Style {
    Color,
    Flat,
    HighContrast,
    ThreeD,
}

impl Style {
    /// All styles, in the order the pipelines visit them.
    pub const ALL: [Style; 4] = [
        Style::Color,
        Style::Flat,
        Style::HighContrast,
        Style::ThreeD,
    ];

    /// The directory name used by the vendor tree and the output trees.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Style::Color => "Color",
            Style::Flat => "Flat",
            Style::HighContrast => "High Contrast",
            Style::ThreeD => "3D",
        }
    }

    /// Parse a style from user input or a directory name.
    ///
    /// Case-insensitive; accepts space, hyphen, or underscore in
    /// "High Contrast".
    pub fn parse(input: &str) -> Option<Style> {
        let folded = input.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match folded.as_str() {
            "color" => Some(Style::Color),
            "flat" => Some(Style::Flat),
            "high contrast" => Some(Style::HighContrast),
            "3d" => Some(Style::ThreeD),
            _ => None,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
