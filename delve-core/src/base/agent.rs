//! Agent.
use super::{Env, Step};
use anyhow::Result;

/// Represents a trainable policy on an environment.
///
/// The agent owns whatever state it needs across steps, such as a replay
/// buffer or the parameters of a policy learner. The online learning loop
/// only drives the methods below, in the order `reset`, then repeated
/// `act`/`observe` (with optional `learn`) until the episode ends.
pub trait Agent<E: Env> {
    /// Prepares the agent for a new episode with the initial observation
    /// and the action space of the environment.
    fn reset(&mut self, obs: &E::Obs, action_space: &E::ActionSpace);

    /// Selects an action for the current state.
    ///
    /// With `exploit` set, the agent takes the best known action;
    /// otherwise it is free to explore.
    fn act(&mut self, exploit: bool) -> E::Act;

    /// Feeds the result of the last environment step back to the agent.
    fn observe(&mut self, step: Step<E>);

    /// Performs one learning update.
    ///
    /// `batch_size` overrides the configured default batch size for this
    /// update only. With `dynamic_size` set, the agent sizes each learning
    /// batch to the current buffer length.
    fn learn(&mut self, batch_size: Option<usize>, dynamic_size: bool) -> Result<()>;

    /// Returns the configured default learning batch size.
    ///
    /// A learning update silently does nothing when fewer transitions than
    /// this are buffered, which the episodic runner compensates for at
    /// episode boundaries.
    fn batch_size(&self) -> usize;
}
