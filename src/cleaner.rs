//! Build directory cleanup functionality.
//!
//! This module provides the core cleanup logic for removing the hardcoded
//! build output directories from a project tree. It handles missing targets,
//! error collection, and provides statistics about the cleanup operation.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use colored::Colorize;
use humansize::{DECIMAL, format_size};
use walkdir::WalkDir;

use crate::targets::{PROJECT_GARBAGE, PROJECT_SUBDIRS, ROOT_GARBAGE};

/// Options controlling how the cleanup pass executes.
#[derive(Clone, Default)]
pub struct CleanOptions {
    /// Report what would be removed without deleting anything
    pub dry_run: bool,

    /// Also report candidates that were skipped because they do not exist
    pub verbose: bool,
}

/// Accumulated outcome of one or more cleanup passes.
///
/// Deletion failures other than "not found" are collected here rather than
/// aborting the run; the caller decides what to do with them once every
/// candidate has been attempted.
#[derive(Default)]
pub struct CleanStats {
    /// Number of directories removed (or that would be removed in dry-run mode)
    pub removed: usize,

    /// Total size in bytes of the removed directories
    pub reclaimed: u64,

    /// Number of candidates skipped because they did not exist
    pub skipped: usize,

    /// Messages for candidates that existed but could not be removed
    pub errors: Vec<String>,
}

impl CleanStats {
    /// Fold the outcome of another pass into this one.
    pub fn merge(&mut self, other: CleanStats) {
        self.removed += other.removed;
        self.reclaimed += other.reclaimed;
        self.skipped += other.skipped;
        self.errors.extend(other.errors);
    }
}

/// Attempt to remove each `base_dir/name` candidate.
///
/// For each name the candidate path is removed recursively with everything
/// under it. Candidates that do not exist are counted as skipped, not as
/// errors. Candidates that exist but cannot be removed (permissions, the
/// path is a file, I/O errors) are recorded in [`CleanStats::errors`] and do
/// not stop the remaining removals.
///
/// # Arguments
///
/// * `base_dir` - Directory the candidate names are resolved against
/// * `names` - Directory names considered disposable under `base_dir`
/// * `options` - Execution options (dry-run, verbosity)
///
/// # Returns
///
/// A [`CleanStats`] describing what was removed, skipped, and failed.
#[must_use]
pub fn clean(base_dir: &Path, names: &[&str], options: &CleanOptions) -> CleanStats {
    let mut stats = CleanStats::default();

    for name in names {
        remove_candidate(&base_dir.join(name), options, &mut stats);
    }

    stats
}

/// Run the full cleanup sequence for a project tree.
///
/// First cleans the per-project build output under each of the known project
/// subdirectories, then the build directories directly at `root`. The
/// candidates are disjoint, so the order has no observable effect.
#[must_use]
pub fn clean_tree(root: &Path, options: &CleanOptions) -> CleanStats {
    let mut stats = CleanStats::default();

    for project_dir in PROJECT_SUBDIRS {
        stats.merge(clean(&root.join(project_dir), PROJECT_GARBAGE, options));
    }

    stats.merge(clean(root, ROOT_GARBAGE, options));

    stats
}

/// Attempt to remove a single candidate path, updating `stats`.
fn remove_candidate(path: &Path, options: &CleanOptions, stats: &mut CleanStats) {
    if !path.exists() {
        stats.skipped += 1;

        if options.verbose {
            println!("Skipped {} (not found)", path.display());
        }

        return;
    }

    // Measure before deleting; afterwards there is nothing left to measure.
    let size = directory_size(path);

    if options.dry_run {
        println!(
            "Would remove {} ({})",
            path.display(),
            format_size(size, DECIMAL)
        );

        stats.removed += 1;
        stats.reclaimed += size;

        return;
    }

    match fs::remove_dir_all(path) {
        Ok(()) => {
            println!(
                "Removed {} ({})",
                path.display(),
                format_size(size, DECIMAL)
            );

            stats.removed += 1;
            stats.reclaimed += size;
        }
        // The candidate vanished between the existence check and the removal.
        Err(e) if e.kind() == ErrorKind::NotFound => {
            stats.skipped += 1;
        }
        Err(e) => {
            stats
                .errors
                .push(format!("Failed to remove {}: {e}", path.display()));
        }
    }
}

/// Print the end-of-run report for a cleanup pass.
///
/// Failure details go to stderr; counts and the total space freed go to
/// stdout.
pub fn print_summary(stats: &CleanStats) {
    if !stats.errors.is_empty() {
        println!("\n{}", "⚠️  Some errors occurred during cleanup:".yellow());
        for error in &stats.errors {
            eprintln!("  {}", error.red());
        }
    }

    println!("\n{}", "📊 Cleanup Summary:".bold());
    println!(
        "  ✅ Removed: {} directories",
        stats.removed.to_string().green()
    );

    if !stats.errors.is_empty() {
        println!(
            "  ❌ Failed to remove: {} directories",
            stats.errors.len().to_string().red()
        );
    }

    println!(
        "  💾 Total space freed: {}",
        format_size(stats.reclaimed, DECIMAL).bright_green().bold()
    );
}

/// Calculate the total size of a directory and all its contents.
///
/// Recursively sums the sizes of all files under `path`. Entries that cannot
/// be read are skipped so that size accounting never makes a removal fail.
fn directory_size(path: &Path) -> u64 {
    let mut total_size = 0u64;

    for entry in WalkDir::new(path).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file()
            && let Ok(metadata) = entry.metadata()
        {
            total_size += metadata.len();
        }
    }

    total_size
}
