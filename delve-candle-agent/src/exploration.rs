//! Exploration strategies over discrete action spaces.
mod base;
mod config;
mod deep_exploration;
pub use base::{ExplorationModule, ExplorerError};
pub use config::DeepExplorationConfig;
pub use deep_exploration::DeepExploration;
