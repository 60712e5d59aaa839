//! Name-to-codepoint resolution.
//!
//! The heart of the flatten pipeline: a bundled, immutable table mapping
//! human-readable emoji names to their canonical Unicode codepoint
//! sequences. Loaded once per run and never mutated.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SchmojiError};

/// Bundled name -> codepoint manifest, compiled into the binary.
const BUNDLED_MANIFEST: &str = include_str!("../../data/codepoints.json");

/// One or more Unicode scalar values representing a single emoji glyph.
///
/// Renders as hyphen-joined lowercase hex (`1f954`, `263a-fe0f`), which is
/// the filename contract for both output trees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeSequence(Vec<u32>);

impl CodeSequence {
    /// Parse a sequence from hex parts separated by hyphens, spaces, or
    /// underscores. Case-insensitive. Trees written by older tooling use
    /// space separators, so those still parse.
    pub fn parse(input: &str) -> Result<CodeSequence> {
        let invalid = || SchmojiError::InvalidCodeSequence {
            input: input.to_string(),
        };

        let mut points = Vec::new();
        for part in input.split(['-', ' ', '_']).filter(|p| !p.is_empty()) {
            let value = u32::from_str_radix(part, 16).map_err(|_| invalid())?;
            if value > 0x10FFFF {
                return Err(invalid());
            }
            points.push(value);
        }

        if points.is_empty() {
            return Err(invalid());
        }
        Ok(CodeSequence(points))
    }

    /// The scalar values in order.
    pub fn points(&self) -> &[u32] {
        &self.0
    }

    /// This sequence with U+FE0F (variation selector 16) appended.
    /// Used as a match fallback during selection.
    pub fn with_vs16(&self) -> CodeSequence {
        let mut points = self.0.clone();
        if points.last() != Some(&0xFE0F) {
            points.push(0xFE0F);
        }
        CodeSequence(points)
    }

    /// Whether this sequence starts with `prefix`.
    pub fn extends(&self, prefix: &CodeSequence) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for CodeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{:x}", point)?;
        }
        Ok(())
    }
}

impl FromStr for CodeSequence {
    type Err = SchmojiError;

    fn from_str(s: &str) -> Result<Self> {
        CodeSequence::parse(s)
    }
}

/// Normalize a human-readable emoji name for table lookup.
///
/// Lowercases and folds every punctuation run to a single space, so
/// "T-rex", "t_rex", and "T Rex" all resolve the same entry.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}

/// Immutable table from normalized emoji name to codepoint sequence.
#[derive(Debug, Clone)]
pub struct CodepointMap {
    entries: BTreeMap<String, CodeSequence>,
}

impl CodepointMap {
    /// Load the manifest bundled with the binary.
    pub fn bundled() -> Result<CodepointMap> {
        Self::parse(BUNDLED_MANIFEST)
    }

    /// Parse a manifest from a JSON object of name -> hex sequence.
    pub fn parse(json: &str) -> Result<CodepointMap> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|e| SchmojiError::Manifest {
                message: format!("not a JSON object of name to hex sequence: {}", e),
                help: Some("expected e.g. {\"potato\": \"1f954\"}".to_string()),
            })?;

        let mut entries = BTreeMap::new();
        for (name, hex) in raw {
            let sequence = CodeSequence::parse(&hex).map_err(|_| SchmojiError::Manifest {
                message: format!("entry '{}' has invalid sequence '{}'", name, hex),
                help: None,
            })?;
            entries.insert(normalize_name(&name), sequence);
        }

        Ok(CodepointMap { entries })
    }

    /// Resolve a human-readable name to its codepoint sequence.
    ///
    /// Deterministic and total over the table; fails with `UnresolvedName`
    /// for anything not in it.
    pub fn resolve(&self, name: &str) -> Result<&CodeSequence> {
        self.entries
            .get(&normalize_name(name))
            .ok_or_else(|| SchmojiError::UnresolvedName {
                name: name.to_string(),
            })
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sequence_display_hyphen_joined() {
        let seq = CodeSequence::parse("263A FE0F").unwrap();
        assert_eq!(seq.to_string(), "263a-fe0f");
    }

    #[test]
    fn test_sequence_parse_separators() {
        let canonical = CodeSequence::parse("263a-fe0f").unwrap();
        assert_eq!(CodeSequence::parse("263a fe0f").unwrap(), canonical);
        assert_eq!(CodeSequence::parse("263A_FE0F").unwrap(), canonical);
    }

    #[test]
    fn test_sequence_parse_rejects_garbage() {
        assert!(CodeSequence::parse("").is_err());
        assert!(CodeSequence::parse("xyz").is_err());
        assert!(CodeSequence::parse("110000").is_err());
        assert!(CodeSequence::parse("--").is_err());
    }

    #[test]
    fn test_with_vs16() {
        let seq = CodeSequence::parse("26f8").unwrap();
        assert_eq!(seq.with_vs16().to_string(), "26f8-fe0f");
        // Already qualified sequences stay as-is
        assert_eq!(seq.with_vs16().with_vs16().to_string(), "26f8-fe0f");
    }

    #[test]
    fn test_extends() {
        let base = CodeSequence::parse("26f8").unwrap();
        let qualified = CodeSequence::parse("26f8-fe0f").unwrap();
        assert!(qualified.extends(&base));
        assert!(base.extends(&base));
        assert!(!base.extends(&qualified));
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Potato"), "potato");
        assert_eq!(normalize_name("T-rex"), "t rex");
        assert_eq!(normalize_name("  Red  apple "), "red apple");
        assert_eq!(normalize_name("Woman's clothes"), "woman s clothes");
    }

    #[test]
    fn test_bundled_resolves_potato() {
        let map = CodepointMap::bundled().unwrap();
        assert_eq!(map.resolve("potato").unwrap().to_string(), "1f954");
        assert_eq!(map.resolve("Potato").unwrap().to_string(), "1f954");
    }

    #[test]
    fn test_bundled_is_deterministic() {
        let a = CodepointMap::bundled().unwrap();
        let b = CodepointMap::bundled().unwrap();
        for name in ["potato", "red apple", "ice skate", "exploding head"] {
            assert_eq!(a.resolve(name).unwrap(), b.resolve(name).unwrap());
        }
    }

    #[test]
    fn test_resolve_unknown_name() {
        let map = CodepointMap::bundled().unwrap();
        let err = map.resolve("definitely not an emoji").unwrap_err();
        assert!(matches!(
            err,
            SchmojiError::UnresolvedName { ref name } if name == "definitely not an emoji"
        ));
    }

    #[test]
    fn test_parse_rejects_bad_manifest() {
        assert!(CodepointMap::parse("[]").is_err());
        assert!(CodepointMap::parse("{\"potato\": \"zz\"}").is_err());
    }
}
