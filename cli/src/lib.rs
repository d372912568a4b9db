//! # VELOS Library
//!
//! File: cli/src/lib.rs
//!
//! Public library interface for the `velos` crate. The binary (`main.rs`) is a
//! thin argument-parsing shell over these modules, and integration tests in
//! `tests/` import them as `velos::...`.
//!
//! - `engine`: The response pipeline (pure, no I/O)
//! - `common`: Knowledge base loading and filesystem helpers
//! - `core`: Configuration and error types
//! - `commands`: The `chat`, `ask` and `explain` front ends
//!
pub mod commands;
pub mod common;
pub mod core;
pub mod engine;
