//! File system scanner for the vendor asset tree.
//!
//! Walks the asset root one level deep: every directory is one emoji
//! entry. Inside an entry, skintone directories (if any) and style
//! directories are discovered; per-emoji `metadata.json` files supply a
//! codepoint override when present.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::{Result, SchmojiError};
use crate::mapping::CodeSequence;
use crate::types::Style;

use super::skintone::{Skintone, SkintoneVariant};

/// Files never treated as assets.
const IGNORE_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Vendor metadata sitting next to an emoji's artwork.
/// Only the codepoint field matters here; everything else is ignored.
#[derive(Debug, Deserialize)]
struct EmojiMetadata {
    unicode: Option<String>,
}

/// One emoji directory discovered under the asset root.
#[derive(Debug, Clone)]
pub struct EmojiEntry {
    /// The directory name, used as the human-readable emoji name.
    pub name: String,
    /// Absolute or root-relative path to the entry directory.
    pub dir: PathBuf,
    /// Codepoints from `metadata.json`, overriding name resolution.
    pub codepoints: Option<CodeSequence>,
    /// Skintone directories in sorted order; empty for tone-less emoji.
    pub tones: Vec<SkintoneVariant>,
}

impl EmojiEntry {
    /// Skintone variants that actually carry files for `style`.
    ///
    /// Tone-less entries expose their root style directory as a single
    /// Default variant, so the selector sees one uniform shape.
    pub fn variants_for_style(&self, style: Style) -> Vec<SkintoneVariant> {
        if self.tones.is_empty() {
            let dir = self.dir.join(style.dir_name());
            if has_files(&dir) {
                return vec![SkintoneVariant {
                    tone: Skintone::Default,
                    dir,
                }];
            }
            return Vec::new();
        }

        self.tones
            .iter()
            .filter_map(|tone| {
                let dir = tone.dir.join(style.dir_name());
                has_files(&dir).then_some(SkintoneVariant {
                    tone: tone.tone,
                    dir,
                })
            })
            .collect()
    }
}

/// Scan the asset root into a sorted list of emoji entries.
///
/// A missing root is fatal; an empty root yields an empty list and is
/// handled by the pipeline's zero-success rule.
pub fn scan_assets(root: &Path) -> Result<Vec<EmojiEntry>> {
    if !root.is_dir() {
        return Err(SchmojiError::MissingRoot {
            path: root.to_path_buf(),
            help: Some("expected an asset tree like assets/<Emoji>/<Style>/".to_string()),
        });
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        entries.push(read_entry(name, entry.path().to_path_buf()));
    }

    Ok(entries)
}

fn read_entry(name: String, dir: PathBuf) -> EmojiEntry {
    let codepoints = read_metadata_codes(&dir.join("metadata.json"));

    let mut tones = Vec::new();
    for child in WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !child.file_type().is_dir() {
            continue;
        }
        if let Some(tone) = Skintone::parse(&child.file_name().to_string_lossy()) {
            tones.push(SkintoneVariant {
                tone,
                dir: child.path().to_path_buf(),
            });
        }
    }

    EmojiEntry {
        name,
        dir,
        codepoints,
        tones,
    }
}

/// Read the `unicode` field of a vendor metadata file.
///
/// A missing or malformed file is not an error: the entry falls back to
/// name resolution, and the pipeline reports that failure if it happens.
fn read_metadata_codes(path: &Path) -> Option<CodeSequence> {
    let content = std::fs::read_to_string(path).ok()?;
    let meta: EmojiMetadata = serde_json::from_str(&content).ok()?;
    CodeSequence::parse(&meta.unicode?).ok()
}

/// List the asset files of one style directory, sorted by name.
///
/// Hidden files and OS droppings are skipped. Returns an empty list for a
/// missing directory.
pub fn style_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') && !IGNORE_FILES.contains(&name.as_ref())
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

fn has_files(dir: &Path) -> bool {
    !style_files(dir).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"<svg/>").unwrap();
    }

    #[test]
    fn test_scan_missing_root_is_fatal() {
        let err = scan_assets(Path::new("/nonexistent/assets")).unwrap_err();
        assert!(matches!(err, SchmojiError::MissingRoot { .. }));
    }

    #[test]
    fn test_scan_sorted_entries() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("Potato/Color/potato_color.svg"));
        touch(&dir.path().join("Avocado/Color/avocado_color.svg"));
        fs::create_dir_all(dir.path().join(".git")).unwrap();

        let entries = scan_assets(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Avocado", "Potato"]);
    }

    #[test]
    fn test_metadata_codes_override() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("Potato/Color/potato_color.svg"));
        fs::write(
            dir.path().join("Potato/metadata.json"),
            r#"{"cldr": "potato", "unicode": "1f954"}"#,
        )
        .unwrap();

        let entries = scan_assets(dir.path()).unwrap();
        assert_eq!(entries[0].codepoints.as_ref().unwrap().to_string(), "1f954");
    }

    #[test]
    fn test_malformed_metadata_is_ignored() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("Potato/Color/potato_color.svg"));
        fs::write(dir.path().join("Potato/metadata.json"), "not json").unwrap();

        let entries = scan_assets(dir.path()).unwrap();
        assert!(entries[0].codepoints.is_none());
    }

    #[test]
    fn test_tone_dirs_are_discovered() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("Ok hand/Default/Color/ok_hand_color.svg"));
        touch(&dir.path().join("Ok hand/Light/Color/ok_hand_light_color.svg"));

        let entries = scan_assets(dir.path()).unwrap();
        let tones: Vec<_> = entries[0].tones.iter().map(|v| v.tone).collect();
        assert_eq!(tones, vec![Skintone::Default, Skintone::Light]);
    }

    #[test]
    fn test_variants_for_style_toneless() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("Potato/Color/potato_color.svg"));

        let entries = scan_assets(dir.path()).unwrap();
        let variants = entries[0].variants_for_style(Style::Color);
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].tone, Skintone::Default);
        assert!(variants[0].dir.ends_with("Potato/Color"));

        assert!(entries[0].variants_for_style(Style::Flat).is_empty());
    }

    #[test]
    fn test_variants_for_style_with_tones() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("Ok hand/Default/Color/a.svg"));
        touch(&dir.path().join("Ok hand/Light/Color/b.svg"));
        touch(&dir.path().join("Ok hand/Light/3D/c.png"));

        let entries = scan_assets(dir.path()).unwrap();
        let color = entries[0].variants_for_style(Style::Color);
        assert_eq!(color.len(), 2);

        // Only Light ships 3D artwork
        let three_d = entries[0].variants_for_style(Style::ThreeD);
        assert_eq!(three_d.len(), 1);
        assert_eq!(three_d[0].tone, Skintone::Light);
    }

    #[test]
    fn test_style_files_skips_hidden() {
        let dir = tempdir().unwrap();
        let style_dir = dir.path().join("Potato/Color");
        touch(&style_dir.join("potato_color.svg"));
        touch(&style_dir.join(".DS_Store"));
        touch(&style_dir.join(".hidden.svg"));

        let files = style_files(&style_dir);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("potato_color.svg"));
    }
}
