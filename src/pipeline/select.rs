//! Selection pipeline: flattened tree -> curated game subset.
//!
//! Copies only the requested codes and styles out of the Unicode-named
//! mirror. Requested codes are matched exact first, then with U+FE0F
//! appended, then by any sequence extending the request, so trees written
//! with or without variation selectors both match. Destination names are
//! normalized to the requested code and stale files for the same code are
//! removed first, so re-runs never accumulate duplicates.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::style_files;
use crate::error::{Result, SchmojiError};
use crate::mapping::CodeSequence;
use crate::output::{display_path, Printer};
use crate::report::{Diagnostic, RunReport};
use crate::types::Style;

/// The built-in game code set, grouped by game colour.
const GAME_CODES: &[&str] = &[
    // blue
    "1f40b", "1f456", "1f48e", "1f699", "1f6f8", "1f976", "1f9ca", "1f41f", "1fa72", "26f8",
    // brown
    "1f954",
    // green
    "1f340", "1f36c", "1f40d", "1f422", "1f438", "1f966", "1f96c", "1f996", "1f432", "1f951",
    // orange
    "1f34a", "1f357", "1f415", "1f431", "1f436", "1f439", "1f955", "1f981", "1f9f6", "1f621",
    // pink
    "1f338", "1f351", "1f437", "1f498", "1f9a9", "1f9c1", "1f9e0", "1f9fc", "1fa79", "1fa81",
    // purple
    "1f346", "1f347", "1f45a", "1f45b", "1f47e", "1f52e", "1f9aa", "1fa71", "1f97c", "1f43c",
    // red
    "1f336", "1f34e", "1f353", "1f3b8", "1f444", "1f479", "1f680", "1f681", "1f969", "1f980",
    // yellow
    "1f34c", "1f355", "1f44c", "1f4a1", "1f4aa", "1f603", "1f60e", "1f618", "1f602", "1f92f",
];

/// What the selection pipeline should copy.
#[derive(Debug, Clone)]
pub struct SelectionSpec {
    pub styles: Vec<Style>,
    pub codes: Vec<CodeSequence>,
}

impl SelectionSpec {
    /// Styles copied when none are requested.
    pub fn default_styles() -> Vec<Style> {
        vec![Style::Color, Style::ThreeD]
    }

    /// The built-in game code set.
    pub fn default_codes() -> Vec<CodeSequence> {
        GAME_CODES
            .iter()
            .filter_map(|c| CodeSequence::parse(c).ok())
            .collect()
    }

    /// Build a spec from raw CLI values.
    ///
    /// Empty lists fall back to the defaults. Unknown style names and
    /// unparsable codes are warnings, never errors; duplicates are
    /// dropped while preserving request order.
    pub fn from_args(
        styles: &[String],
        codes: &[String],
        printer: &Printer,
        report: &mut RunReport,
    ) -> SelectionSpec {
        let styles = if styles.is_empty() {
            Self::default_styles()
        } else {
            let mut parsed = Vec::new();
            for raw in styles {
                match Style::parse(raw) {
                    Some(style) if !parsed.contains(&style) => parsed.push(style),
                    Some(_) => {}
                    None => report.warn(
                        printer,
                        Diagnostic::warning(
                            "schmoji::select",
                            format!("unknown style '{}'", raw),
                        )
                        .with_help("known styles: Color, Flat, High Contrast, 3D"),
                    ),
                }
            }
            parsed
        };

        let codes = if codes.is_empty() {
            Self::default_codes()
        } else {
            let mut parsed: Vec<CodeSequence> = Vec::new();
            for raw in codes {
                match CodeSequence::parse(raw) {
                    Ok(code) if !parsed.contains(&code) => parsed.push(code),
                    Ok(_) => {}
                    Err(_) => report.warn(
                        printer,
                        Diagnostic::warning(
                            "schmoji::select",
                            format!("invalid code sequence '{}'", raw),
                        ),
                    ),
                }
            }
            parsed
        };

        SelectionSpec { styles, codes }
    }
}

/// Options for one selection run.
#[derive(Debug, Clone)]
pub struct SelectOptions {
    /// Root of the flattened Unicode tree (input).
    pub unicode_root: PathBuf,
    /// Root of the curated output tree.
    pub out_root: PathBuf,
    /// Resolve and log without touching the filesystem.
    pub dry_run: bool,
}

/// Run the selection pipeline.
///
/// A missing unicode root is fatal; a missing style folder or an
/// unmatched code is a warning and the run still succeeds.
pub fn select(spec: &SelectionSpec, opts: &SelectOptions, printer: &Printer) -> Result<RunReport> {
    if !opts.unicode_root.is_dir() {
        return Err(SchmojiError::MissingRoot {
            path: opts.unicode_root.clone(),
            help: Some("run `schmoji unicode` first to produce the flattened tree".to_string()),
        });
    }

    let mut report = RunReport::new();
    for &style in &spec.styles {
        let src_dir = opts.unicode_root.join(style.dir_name());
        if !src_dir.is_dir() {
            report.warn(
                printer,
                Diagnostic::warning(
                    "schmoji::select",
                    format!("missing style folder: {}", display_path(&src_dir)),
                )
                .with_help("regenerate the unicode tree with `schmoji unicode`"),
            );
            continue;
        }

        let dst_dir = opts.out_root.join(style.dir_name());
        if !opts.dry_run {
            fs::create_dir_all(&dst_dir).map_err(|e| SchmojiError::Io {
                path: dst_dir.clone(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }

        let index = index_tree(&src_dir);
        for code in &spec.codes {
            match match_code(&index, code) {
                Some(files) => {
                    purge_stale(&dst_dir, code, opts.dry_run, printer, &mut report);
                    for src in files {
                        let dest = dst_dir.join(flat_name(code, src));
                        copy_file(src, &dest, opts.dry_run, printer)?;
                        report.files_copied += 1;
                    }
                    report.entries_copied += 1;
                }
                None => {
                    report.warn(
                        printer,
                        Diagnostic::warning(
                            "schmoji::select",
                            format!("not found: {}/{}.*", display_path(&src_dir), code),
                        ),
                    );
                    report.entries_skipped += 1;
                }
            }
        }
    }

    Ok(report)
}

/// Map every parsable filename in a style folder to its sequence.
/// Files whose stem is not a hex sequence are not assets and are ignored.
fn index_tree(dir: &Path) -> BTreeMap<CodeSequence, Vec<PathBuf>> {
    let mut index: BTreeMap<CodeSequence, Vec<PathBuf>> = BTreeMap::new();
    for file in style_files(dir) {
        let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Ok(sequence) = CodeSequence::parse(stem) {
            index.entry(sequence).or_default().push(file);
        }
    }
    index
}

/// Pick the source files for a requested code.
///
/// Preference order: exact sequence, then the VS16-qualified sequence,
/// then the first (sorted) sequence extending the request.
fn match_code<'a>(
    index: &'a BTreeMap<CodeSequence, Vec<PathBuf>>,
    code: &CodeSequence,
) -> Option<&'a [PathBuf]> {
    if let Some(files) = index.get(code) {
        return Some(files);
    }
    if let Some(files) = index.get(&code.with_vs16()) {
        return Some(files);
    }
    index
        .iter()
        .find(|(sequence, _)| sequence.extends(code))
        .map(|(_, files)| files.as_slice())
}

/// Remove previously-copied files for a code so re-runs never leave
/// stale variants behind. Dry runs print the removals instead.
fn purge_stale(
    dst_dir: &Path,
    code: &CodeSequence,
    dry_run: bool,
    printer: &Printer,
    report: &mut RunReport,
) {
    for old in style_files(dst_dir) {
        let Some(stem) = old.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Ok(sequence) = CodeSequence::parse(stem) else {
            continue;
        };
        if !sequence.extends(code) {
            continue;
        }
        if dry_run {
            printer.status(
                "Removing",
                &format!("{} {}", display_path(&old), printer.dim("(dry run)")),
            );
        } else if let Err(e) = fs::remove_file(&old) {
            report.warn(
                printer,
                Diagnostic::warning(
                    "schmoji::select",
                    format!("could not remove {}: {}", display_path(&old), e),
                ),
            );
        } else {
            printer.status("Removing", &display_path(&old));
        }
    }
}

/// Destination filename: the requested code plus the source extension.
fn flat_name(code: &CodeSequence, src: &Path) -> String {
    match src.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}", code, ext),
        None => code.to_string(),
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
