//! Clean command implementation.
//!
//! Removes the generated output trees. Missing trees are fine.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SchmojiError};
use crate::output::{display_path, Printer};

/// Remove the generated output trees
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Trees to remove
    #[arg(default_values_os_t = default_trees())]
    pub trees: Vec<PathBuf>,
}

fn default_trees() -> Vec<PathBuf> {
    vec![PathBuf::from("unicode"), PathBuf::from("schmoji")]
}

pub fn run(args: CleanArgs) -> Result<()> {
    let printer = Printer::new();

    for tree in &args.trees {
        if !tree.exists() {
            continue;
        }
        fs::remove_dir_all(tree).map_err(|e| SchmojiError::Io {
            path: tree.clone(),
            message: format!("Failed to remove tree: {}", e),
        })?;
        printer.status("Removing", &display_path(tree));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_clean_removes_trees() {
        let dir = tempdir().unwrap();
        let unicode = dir.path().join("unicode");
        let schmoji = dir.path().join("schmoji");
        fs::create_dir_all(unicode.join("Color")).unwrap();
        fs::create_dir_all(schmoji.join("Color")).unwrap();

        run(CleanArgs {
            trees: vec![unicode.clone(), schmoji.clone()],
        })
        .unwrap();

        assert!(!unicode.exists());
        assert!(!schmoji.exists());
    }

    #[test]
    fn test_clean_tolerates_missing_trees() {
        let dir = tempdir().unwrap();
        run(CleanArgs {
            trees: vec![dir.path().join("not-there")],
        })
        .unwrap();
    }
}
