#![warn(missing_docs)]
//! A library for online reinforcement learning.
//!
//! This crate provides the abstractions for agents interacting with
//! environments and a driver that runs episodes of online learning,
//! optionally rendering the per-episode returns as a PNG line chart.
//! Concrete agents are implemented in backend crates such as
//! `delve-candle-agent`.
pub mod online_learning;
pub mod plot;

mod base;
pub use base::{Act, ActionSpace, Agent, DiscreteActionSpace, Env, Info, Obs, Step};
