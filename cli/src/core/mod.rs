//! # VELOS Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the command handlers:
//! configuration loading and the error types.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//!
//! ## Usage
//!
//! ```text
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{VelosError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
