//! Unicode command implementation.
//!
//! Pipeline 1: flatten the vendor tree into `unicode/<Style>/<seq><ext>`.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SchmojiError};
use crate::mapping::CodepointMap;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{flatten, FlattenOptions};

/// Flatten the vendor asset tree into a Unicode-named mirror
#[derive(Args, Debug)]
pub struct UnicodeArgs {
    /// Repo root or asset folder (uses `<ROOT>/assets` when it exists)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output directory root
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Resolve and log without copying
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

pub fn run(args: UnicodeArgs) -> Result<()> {
    let printer = Printer::new();
    let map = CodepointMap::bundled()?;

    let source_root = if args.root.join("assets").is_dir() {
        args.root.join("assets")
    } else {
        args.root.clone()
    };
    let out_root = args.out.unwrap_or_else(|| args.root.join("unicode"));

    let opts = FlattenOptions {
        source_root,
        out_root,
        dry_run: args.dry_run,
    };
    let report = flatten(&map, &opts, &printer)?;

    let summary = format!(
        "{} flattened, {} skipped -> {}",
        plural(report.entries_copied, "entry", "entries"),
        report.entries_skipped,
        display_path(&opts.out_root),
    );
    if args.dry_run {
        printer.info("Finished", &format!("{} {}", summary, printer.dim("(dry run)")));
    } else {
        printer.info("Finished", &summary);
    }

    // Non-zero exit only when nothing at all succeeded.
    if report.entries_copied == 0 {
        return Err(SchmojiError::Pipeline {
            message: format!(
                "no entries were flattened from {}",
                display_path(&opts.source_root)
            ),
            help: Some(
                "check the asset tree layout and the bundled codepoint manifest".to_string(),
            ),
        });
    }

    Ok(())
}
