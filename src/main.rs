//! # clean-build-dirs
//!
//! A small CLI tool that resets a project tree to a source-only state by
//! deleting known build output directories (compiler/IDE output folders).
//!
//! The removal targets are compiled in: per-project `x64/`, `Debug/` and
//! `Release/` folders under the known project subdirectories, plus `build/`,
//! `out/`, `x64/`, `Debug/` and `Release/` at the tree root. Targets that do
//! not exist are silently skipped.
//!
//! ## Usage
//!
//! ```bash
//! # Clean the current directory (the original script behavior)
//! clean-build-dirs
//!
//! # Clean another tree
//! clean-build-dirs ~/code/some-project
//!
//! # Preview without deleting
//! clean-build-dirs --dry-run
//! ```

use anyhow::{Result, bail};
use clap::Parser;
use clean_build_dirs::{
    cleaner::{clean_tree, print_summary},
    cli::Cli,
};
use colored::Colorize;
use humansize::{DECIMAL, format_size};
use std::process::exit;

/// Entry point for the clean-build-dirs application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and
/// printing any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Runs the cleanup sequence over the requested tree
/// 3. Prints a dry-run or cleanup summary
/// 4. Fails if any deletion failed for a reason other than "not found"
///
/// # Errors
///
/// Returns an error when one or more existing candidates could not be
/// removed; the per-candidate details have already been printed to stderr.
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    let options = args.clean_options();

    let stats = clean_tree(&args.root, &options);

    if options.dry_run {
        println!(
            "\n{} {}",
            "🧪 Dry run complete!".yellow(),
            format!(
                "Would free up {}",
                format_size(stats.reclaimed, DECIMAL)
            )
            .bright_white()
        );
        return Ok(());
    }

    if stats.removed == 0 && stats.errors.is_empty() {
        println!("{}", "✨ No build directories found!".green());
        return Ok(());
    }

    print_summary(&stats);

    if !stats.errors.is_empty() {
        bail!("failed to remove {} directories", stats.errors.len());
    }

    Ok(())
}
