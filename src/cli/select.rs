//! Select command implementation.
//!
//! Pipeline 2: copy the curated game subset out of the flattened tree.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{select, SelectOptions, SelectionSpec};
use crate::report::RunReport;

/// Copy a curated subset of the flattened tree for the game
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Flattened tree produced by `schmoji unicode`
    #[arg(long, default_value = "unicode")]
    pub unicode_root: PathBuf,

    /// Destination root for the curated subset
    #[arg(long, short, default_value = "schmoji")]
    pub out: PathBuf,

    /// Styles to copy (default: Color,3D)
    #[arg(long, value_delimiter = ',')]
    pub styles: Vec<String>,

    /// Hex code sequences to copy (default: the built-in game set)
    #[arg(long, value_delimiter = ',')]
    pub codes: Vec<String>,

    /// Resolve and log without copying
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

pub fn run(args: SelectArgs) -> Result<()> {
    let printer = Printer::new();

    let mut report = RunReport::new();
    let spec = SelectionSpec::from_args(&args.styles, &args.codes, &printer, &mut report);

    let opts = SelectOptions {
        unicode_root: args.unicode_root,
        out_root: args.out,
        dry_run: args.dry_run,
    };
    report.merge(select(&spec, &opts, &printer)?);

    let summary = format!(
        "{} copied, {} -> {}",
        plural(report.entries_copied, "code", "codes"),
        plural(report.warning_count(), "warning", "warnings"),
        display_path(&opts.out_root),
    );
    if args.dry_run {
        printer.info("Finished", &format!("{} {}", summary, printer.dim("(dry run)")));
    } else {
        printer.info("Finished", &summary);
    }

    // Unmatched codes and styles are warnings only; the run still succeeds.
    Ok(())
}
