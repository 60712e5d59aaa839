//! Flatten pipeline: vendor tree -> Unicode-named mirror.
//!
//! For every emoji entry, resolve its codepoint sequence (metadata
//! override first, bundled table otherwise), collapse skintone variants
//! per style, and copy each chosen file to
//! `<out>/<Style>/<codepoints-joined-by-dash><ext>`.
//!
//! Re-runs overwrite in place, so identical inputs always produce a
//! byte-identical output tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::{scan_assets, select_variant, style_files, EmojiEntry};
use crate::error::{Result, SchmojiError};
use crate::mapping::{CodeSequence, CodepointMap};
use crate::output::{display_path, Printer};
use crate::report::{Diagnostic, RunReport};
use crate::types::Style;

/// Options for one flatten run.
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    /// Root of the vendor asset tree.
    pub source_root: PathBuf,
    /// Root of the Unicode-named output tree.
    pub out_root: PathBuf,
    /// Resolve and log without touching the filesystem.
    pub dry_run: bool,
}

/// Run the flatten pipeline.
///
/// A missing source root is fatal. Everything else recovers per entry:
/// unresolved names and ambiguous skintones are logged and skipped. The
/// caller applies the zero-success rule to the returned report.
pub fn flatten(map: &CodepointMap, opts: &FlattenOptions, printer: &Printer) -> Result<RunReport> {
    let entries = scan_assets(&opts.source_root)?;

    // Style folders exist even when nothing lands in them, so downstream
    // tooling can rely on the layout.
    if !opts.dry_run {
        for style in Style::ALL {
            let dir = opts.out_root.join(style.dir_name());
            fs::create_dir_all(&dir).map_err(|e| SchmojiError::Io {
                path: dir,
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    let mut report = RunReport::new();
    for entry in &entries {
        flatten_entry(entry, map, opts, printer, &mut report)?;
    }

    Ok(report)
}

fn flatten_entry(
    entry: &EmojiEntry,
    map: &CodepointMap,
    opts: &FlattenOptions,
    printer: &Printer,
    report: &mut RunReport,
) -> Result<()> {
    let codes = match resolve_codes(entry, map) {
        Ok(codes) => codes,
        Err(SchmojiError::UnresolvedName { name }) => {
            report.warn(
                printer,
                Diagnostic::warning(
                    "schmoji::resolve",
                    format!("no codepoint mapping for '{}'", name),
                )
                .with_help("add the name to data/codepoints.json or ship a metadata.json"),
            );
            report.entries_skipped += 1;
            return Ok(());
        }
        Err(other) => return Err(other),
    };

    let mut wrote = false;
    let mut ambiguous = false;
    for style in Style::ALL {
        let variants = entry.variants_for_style(style);
        let chosen = match select_variant(&entry.name, style, &variants) {
            Ok(Some(variant)) => variant.dir.clone(),
            Ok(None) => continue,
            Err(e) => {
                ambiguous = true;
                report.warn(printer, Diagnostic::warning("schmoji::skintone", e.to_string()));
                continue;
            }
        };

        let style_out = opts.out_root.join(style.dir_name());
        for src in style_files(&chosen) {
            let dest = style_out.join(flat_name(&codes, &src));
            copy_file(&src, &dest, opts.dry_run, printer)?;
            report.files_copied += 1;
            wrote = true;
        }
    }

    if wrote {
        report.entries_copied += 1;
    } else {
        // Ambiguous styles already warned above; only bare entries need one.
        if !ambiguous {
            report.warn(
                printer,
                Diagnostic::warning(
                    "schmoji::flatten",
                    format!("no artwork found for '{}'", entry.name),
                ),
            );
        }
        report.entries_skipped += 1;
    }

    Ok(())
}

/// Resolution order: per-emoji metadata override, then the bundled table
/// keyed by the directory name.
fn resolve_codes(entry: &EmojiEntry, map: &CodepointMap) -> Result<CodeSequence> {
    if let Some(codes) = &entry.codepoints {
        return Ok(codes.clone());
    }
    map.resolve(&entry.name).cloned()
}

/// Output filename: canonical sequence plus the source extension.
fn flat_name(codes: &CodeSequence, src: &Path) -> String {
    match src.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}", codes, ext),
        None => codes.to_string(),
    }
}

fn copy_file(src: &Path, dest: &Path, dry_run: bool, printer: &Printer) -> Result<()> {
    let line = format!("{} -> {}", display_path(src), display_path(dest));
    if dry_run {
        printer.status("Copying", &format!("{} {}", line, printer.dim("(dry run)")));
        return Ok(());
    }
    fs::copy(src, dest).map_err(|e| SchmojiError::Io {
        path: dest.to_path_buf(),
        message: format!("Failed to copy {}: {}", display_path(src), e),
    })?;
    printer.status("Copying", &line);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path, content: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn run(source_root: &Path, out_root: &Path, dry_run: bool) -> Result<RunReport> {
        let map = CodepointMap::bundled().unwrap();
        let opts = FlattenOptions {
            source_root: source_root.to_path_buf(),
            out_root: out_root.to_path_buf(),
            dry_run,
        };
        flatten(&map, &opts, &Printer::new())
    }

    #[test]
    fn test_flatten_potato_end_to_end() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        let out = dir.path().join("unicode");
        touch(&assets.join("Potato/Color/potato_color.svg"), b"<svg>potato</svg>");

        let report = run(&assets, &out, false).unwrap();

        assert_eq!(report.entries_copied, 1);
        assert_eq!(report.files_copied, 1);
        let flat = out.join("Color/1f954.svg");
        assert_eq!(fs::read(flat).unwrap(), b"<svg>potato</svg>");
        // Empty style folders still exist
        assert!(out.join("3D").is_dir());
        assert!(out.join("High Contrast").is_dir());
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        let out = dir.path().join("unicode");
        touch(&assets.join("Potato/Color/potato_color.svg"), b"<svg>potato</svg>");
        touch(&assets.join("Potato/3D/potato_3d.png"), b"png-bytes");

        run(&assets, &out, false).unwrap();
        let first = fs::read(out.join("Color/1f954.svg")).unwrap();

        let report = run(&assets, &out, false).unwrap();
        assert_eq!(report.files_copied, 2);
        assert_eq!(fs::read(out.join("Color/1f954.svg")).unwrap(), first);
        assert_eq!(fs::read(out.join("3D/1f954.png")).unwrap(), b"png-bytes");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        let out = dir.path().join("unicode");
        touch(&assets.join("Potato/Color/potato_color.svg"), b"<svg/>");

        let report = run(&assets, &out, true).unwrap();

        assert_eq!(report.entries_copied, 1);
        assert_eq!(report.files_copied, 1);
        assert!(!out.exists());
    }

    #[test]
    fn test_unresolved_name_is_skipped() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        let out = dir.path().join("unicode");
        touch(&assets.join("Blorbfish/Color/blorbfish.svg"), b"<svg/>");
        touch(&assets.join("Potato/Color/potato_color.svg"), b"<svg/>");

        let report = run(&assets, &out, false).unwrap();

        assert_eq!(report.entries_copied, 1);
        assert_eq!(report.entries_skipped, 1);
        assert!(report.has_warnings());
        assert!(out.join("Color/1f954.svg").exists());
    }

    #[test]
    fn test_metadata_override_beats_table() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        let out = dir.path().join("unicode");
        touch(&assets.join("Potato/Color/potato_color.svg"), b"<svg/>");
        // Vendor metadata says something else; it wins.
        touch(
            &assets.join("Potato/metadata.json"),
            br#"{"unicode": "1f955"}"#,
        );

        run(&assets, &out, false).unwrap();
        assert!(out.join("Color/1f955.svg").exists());
        assert!(!out.join("Color/1f954.svg").exists());
    }

    #[test]
    fn test_default_skintone_collapses() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        let out = dir.path().join("unicode");
        touch(&assets.join("Ok hand/Default/Color/ok_default.svg"), b"default");
        touch(&assets.join("Ok hand/Light/Color/ok_light.svg"), b"light");
        touch(&assets.join("Ok hand/Dark/Color/ok_dark.svg"), b"dark");

        let report = run(&assets, &out, false).unwrap();

        assert_eq!(report.entries_copied, 1);
        assert_eq!(fs::read(out.join("Color/1f44c.svg")).unwrap(), b"default");
    }

    #[test]
    fn test_ambiguous_skintone_skips_with_warning() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        let out = dir.path().join("unicode");
        touch(&assets.join("Ok hand/Light/Color/ok_light.svg"), b"light");
        touch(&assets.join("Ok hand/Dark/Color/ok_dark.svg"), b"dark");
        touch(&assets.join("Potato/Color/potato_color.svg"), b"<svg/>");

        let report = run(&assets, &out, false).unwrap();

        // Potato still lands; Ok hand is skipped, never picked arbitrarily.
        assert_eq!(report.entries_copied, 1);
        assert!(report.has_warnings());
        assert!(!out.join("Color/1f44c.svg").exists());
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = tempdir().unwrap();
        let err = run(
            &dir.path().join("does-not-exist"),
            &dir.path().join("unicode"),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, SchmojiError::MissingRoot { .. }));
    }

    #[test]
    fn test_multi_codepoint_sequence_name() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        let out = dir.path().join("unicode");
        touch(&assets.join("Ice skate/Color/ice_skate_color.svg"), b"<svg/>");

        run(&assets, &out, false).unwrap();
        assert!(out.join("Color/26f8-fe0f.svg").exists());
    }
}
