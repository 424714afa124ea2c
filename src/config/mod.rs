// src/config/mod.rs

//! Configuration loading and validation for clipinc.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants (`validate.rs`).
//!
//! The config file is optional; every field has a default.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    default_config_path, load_and_validate, load_config, load_from_path, load_optional,
};
pub use model::{ClipboardSection, ConfigFile, RawConfigFile, WatchSection};
