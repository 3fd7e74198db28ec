//! Hardcoded cleanup targets.
//!
//! The tool operates on a fixed project layout: a handful of project
//! subdirectories that each accumulate compiler output, plus a set of build
//! directories that appear directly at the tree root. The lists are compiled
//! in; there is no configuration surface.

/// Project subdirectories that accumulate their own build output.
pub const PROJECT_SUBDIRS: &[&str] = &["UnitTests", "Benchmark", "pretty"];

/// Build output directory names found inside each project subdirectory.
pub const PROJECT_GARBAGE: &[&str] = &["x64", "Debug", "Release"];

/// Build output directory names found directly at the tree root.
pub const ROOT_GARBAGE: &[&str] = &["build", "out", "x64", "Debug", "Release"];
