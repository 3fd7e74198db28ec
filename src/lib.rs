//! # clean-build-dirs
//!
//! A small CLI tool that resets a project tree to a source-only state by
//! deleting known build output directories (compiler/IDE output folders).
//!
//! This library provides the core functionality for the clean-build-dirs CLI
//! tool: the fixed lists of removal targets and the cleanup logic that
//! removes them while treating already-absent targets as a no-op.

pub mod cleaner;
pub mod cli;
pub mod targets;
