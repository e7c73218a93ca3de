//! Environment.
use super::{Act, ActionSpace, Info, Obs, Step};
use anyhow::Result;

/// Represents an environment, typically an MDP.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Action space of the environment, reported on reset.
    type ActionSpace: ActionSpace;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the environment, returning the initial observation and the
    /// action space available to the agent.
    fn reset(&mut self) -> Result<(Self::Obs, Self::ActionSpace)>;

    /// Performs an environment step.
    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>>
    where
        Self: Sized;
}
