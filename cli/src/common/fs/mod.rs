//! # VELOS Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem helpers shared by the loaders. Import the submodule directly,
//! e.g. `crate::common::fs::io::read_file_to_string`.
//!

/// Contains basic file I/O operations (e.g., `read_file_to_string`).
pub mod io;
