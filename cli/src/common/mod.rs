//! # VELOS Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Boundary utilities that keep I/O out of the response engine:
//!
//! - **`dataset`**: Loads the JSON knowledge base from disk.
//! - **`fs`**: Filesystem helpers with path-aware error context.
//!

/// Knowledge base file loading.
pub mod dataset;
/// Utilities for filesystem operations.
pub mod fs;
