//! All command implementation.
//!
//! Runs both pipelines back to back with their defaults, the way the
//! original one-shot build did.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::Printer;

use super::{select, unicode};

/// Run both pipelines with their defaults
#[derive(Args, Debug)]
pub struct AllArgs {
    /// Repo root (uses `<ROOT>/assets` when it exists)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Resolve and log without copying
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

pub fn run(args: AllArgs) -> Result<()> {
    let unicode_root = args.root.join("unicode");

    unicode::run(unicode::UnicodeArgs {
        root: args.root.clone(),
        out: Some(unicode_root.clone()),
        dry_run: args.dry_run,
    })?;

    // A dry run materializes nothing, so selection has no tree to read
    // unless one already exists from an earlier real run.
    if args.dry_run && !unicode_root.is_dir() {
        Printer::new().info(
            "Skipping",
            "selection: no unicode tree to read in a dry run",
        );
        return Ok(());
    }

    select::run(select::SelectArgs {
        unicode_root,
        out: args.root.join("schmoji"),
        styles: Vec::new(),
        codes: Vec::new(),
        dry_run: args.dry_run,
    })
}
