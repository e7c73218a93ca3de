//! Exploration module interface.
use anyhow::Result;
use candle_core::Tensor;
use candle_nn::Module;
use delve_core::DiscreteActionSpace;
use thiserror::Error;

/// Errors of exploration modules.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The action space has no actions to choose from.
    #[error("empty action space")]
    EmptyActionSpace,
}

/// A stateful action-selection strategy of a policy learner.
///
/// All strategies share the `act`/`reset` capability pair: `act` picks an
/// action index for the current state, and `reset` is called once at every
/// episode boundary so that the strategy can refresh whatever internal
/// state drives its exploration.
pub trait ExplorationModule {
    /// Selects an action index for the given state.
    ///
    /// `subjective_state` is the current observation as a tensor of shape
    /// `(state_dim,)`. The remaining optional arguments are hints some
    /// strategies consume, accepted here for interface uniformity:
    /// a precomputed exploit action, precomputed action values, an action
    /// availability mask, and a representation network mapping
    /// observations to states. Implementations may ignore any of them.
    fn act<S: DiscreteActionSpace>(
        &self,
        subjective_state: &Tensor,
        action_space: &S,
        exploit_action: Option<i64>,
        values: Option<&Tensor>,
        action_availability_mask: Option<&Tensor>,
        representation: Option<&dyn Module>,
    ) -> Result<i64>;

    /// Refreshes the exploration state at an episode boundary.
    fn reset(&mut self);
}
