//! # VELOS Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements configuration loading, merging, validation, and
//! access for VELOS. It combines defaults, user settings, project settings and
//! command-line overrides into one validated [`Config`].
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line overrides (`--knowledge`, `--seed`, `--label`)
//! 2. An explicit `--config <FILE>`, or else the project-specific `.velos.toml`
//!    in the current directory or nearest ancestor (the search stops at a
//!    directory containing `.git`)
//! 3. User-specific `<config dir>/velos/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [knowledge]
//! path = "~/velos/context.json"
//!
//! [chat]
//! label = "VELOS"
//! seed = 42
//!
//! [matching]
//! candidates = 5
//! context_threshold = 0.5
//! max_pair_distance = 5
//! ```
//!
//! Loading and using configuration:
//!
//! ```text
//! let cfg = config::load_config(&Overrides::default())?;
//! let knowledge = dataset::load_knowledge_base(&cfg.knowledge_path())?;
//! let responder = Responder::with_settings(&knowledge, cfg.matching.settings());
//! ```
//!
use crate::core::error::{Result, VelosError};
use crate::engine::context::DEFAULT_CONTEXT_THRESHOLD;
use crate::engine::pair::DEFAULT_MAX_PAIR_DISTANCE;
use crate::engine::pipeline::{ResponderSettings, DEFAULT_CANDIDATES};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Where the knowledge base document lives.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeConfig {
    /// Path to the JSON knowledge base (can use ~). Relative paths are
    /// resolved against the working directory.
    #[serde(default = "default_knowledge_path")]
    pub path: String,
}

/// Settings for the interactive and one-shot front ends.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Prefix printed before every reply (`VELOS: ...`).
    #[serde(default = "default_label")]
    pub label: String,
    /// Fixed random seed for reproducible replies. Unset means fresh entropy per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Tuning for the response engine.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MatchingConfig {
    /// Answer variants generated per turn.
    #[serde(default = "default_candidates")]
    pub candidates: usize,
    /// Minimum possibility for a scored context match, in `[0, 1]`.
    #[serde(default = "default_context_threshold")]
    pub context_threshold: f64,
    /// Largest edit distance at which the nearest stored question is used.
    #[serde(default = "default_max_pair_distance")]
    pub max_pair_distance: usize,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: default_knowledge_path(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            seed: None,
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            context_threshold: default_context_threshold(),
            max_pair_distance: default_max_pair_distance(),
        }
    }
}

impl MatchingConfig {
    pub fn settings(&self) -> ResponderSettings {
        ResponderSettings {
            candidates: self.candidates,
            context_threshold: self.context_threshold,
            max_pair_distance: self.max_pair_distance,
        }
    }
}

impl Config {
    pub fn knowledge_path(&self) -> PathBuf {
        PathBuf::from(&self.knowledge.path)
    }
}

fn default_knowledge_path() -> String {
    "context.json".to_string()
}
fn default_label() -> String {
    "VELOS".to_string()
}
fn default_candidates() -> usize {
    DEFAULT_CANDIDATES
}
fn default_context_threshold() -> f64 {
    DEFAULT_CONTEXT_THRESHOLD
}
fn default_max_pair_distance() -> usize {
    DEFAULT_MAX_PAIR_DISTANCE
}

/// Values supplied on the command line. `None` leaves the file/default value in place.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    /// Load this file instead of searching for `.velos.toml`.
    pub config_file: Option<PathBuf>,
    pub knowledge: Option<PathBuf>,
    pub seed: Option<u64>,
    pub label: Option<String>,
}

const PROJECT_CONFIG_FILENAME: &str = ".velos.toml";

pub fn load_config(overrides: &Overrides) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = match &overrides.config_file {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        None => load_project_config()?,
    };
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    apply_overrides(&mut merged_config, overrides);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Velos", "velos") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.velos.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = Config::default();
    merged.knowledge.path = if project_cfg.knowledge.path != defaults.knowledge.path {
        project_cfg.knowledge.path
    } else {
        user.knowledge.path
    };
    merged.chat.label = if project_cfg.chat.label != defaults.chat.label {
        project_cfg.chat.label
    } else {
        user.chat.label
    };
    merged.chat.seed = project_cfg.chat.seed.or(user.chat.seed);
    merged.matching.candidates = if project_cfg.matching.candidates != defaults.matching.candidates
    {
        project_cfg.matching.candidates
    } else {
        user.matching.candidates
    };
    merged.matching.context_threshold =
        if project_cfg.matching.context_threshold != defaults.matching.context_threshold {
            project_cfg.matching.context_threshold
        } else {
            user.matching.context_threshold
        };
    merged.matching.max_pair_distance =
        if project_cfg.matching.max_pair_distance != defaults.matching.max_pair_distance {
            project_cfg.matching.max_pair_distance
        } else {
            user.matching.max_pair_distance
        };
    merged
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    if let Some(path) = &overrides.knowledge {
        config.knowledge.path = path.to_string_lossy().into_owned();
    }
    if let Some(seed) = overrides.seed {
        config.chat.seed = Some(seed);
    }
    if let Some(label) = &overrides.label {
        config.chat.label = label.clone();
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.knowledge.path = shellexpand::tilde(&config.knowledge.path).into_owned();
    debug!("Expanded knowledge base path: {}", config.knowledge.path);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.knowledge.path.trim().is_empty() {
        return Err(anyhow!(VelosError::Config(
            "Knowledge base path cannot be empty.".to_string()
        )));
    }
    if config.chat.label.trim().is_empty() {
        return Err(anyhow!(VelosError::Config(
            "Reply label cannot be empty.".to_string()
        )));
    }
    if config.matching.candidates == 0 {
        return Err(anyhow!(VelosError::Config(
            "matching.candidates must be at least 1.".to_string()
        )));
    }
    if !(0.0..=1.0).contains(&config.matching.context_threshold) {
        return Err(anyhow!(VelosError::Config(format!(
            "matching.context_threshold must be between 0 and 1, got {}.",
            config.matching.context_threshold
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
