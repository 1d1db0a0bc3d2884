//! Configuration module for Saving Money Cat
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CatPaths;
pub use settings::{ChartOutput, Settings};
