//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

use crate::cleaner::CleanOptions;

#[derive(Parser)]
#[command(name = "clean-build-dirs")]
#[command(version)]
#[command(about = "Delete known build output directories to reset a project tree to a source-only state")]
pub struct Cli {
    /// The project tree to clean
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Report what would be removed without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Also report candidates that were skipped because they do not exist
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Convert the parsed arguments into cleanup execution options.
    #[must_use]
    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }
}
