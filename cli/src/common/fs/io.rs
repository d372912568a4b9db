//! # VELOS Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that attach the offending path to any I/O
//! error using `anyhow::Context`, so failures surface as
//! `Failed to read file "context.json": No such file or directory`.
//!
//! ## Usage
//!
//! ```text
//! use crate::common::fs::io;
//!
//! let content = io::read_file_to_string(Path::new("context.json"))?;
//! ```
//!
use crate::core::error::{Result, VelosError};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// Returns an `Err` if the path is a directory, or if the file cannot be found,
/// opened, or read, with context naming the file.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    if path.is_dir() {
        anyhow::bail!(VelosError::Config(format!(
            "Expected a file but found a directory: {:?}",
            path
        )));
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))?;
    debug!("Read {} bytes from {:?}", content.len(), path);
    Ok(content)
}
