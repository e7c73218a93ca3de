//! Interface of ensemble Q-networks.
use candle_core::Tensor;

/// An ensemble of Q-value estimators with a sampled active member.
///
/// The ensemble represents uncertainty about the value function through
/// disagreement across its members. One member at a time is active,
/// identified by the epistemic index, and answers value queries until the
/// index is resampled. Training of the ensemble happens elsewhere; this
/// interface only covers what exploration strategies need.
pub trait EnsembleQNetwork {
    /// Returns Q-values for a batch of (state, action) pairs.
    ///
    /// `state_batch` has shape `(batch_size, state_dim)` and
    /// `action_batch` has shape `(batch_size, action_dim)` with one-hot
    /// encoded actions. With `persistent` set, the active member answers
    /// the whole batch; otherwise the ensemble is free to resample per
    /// query.
    fn get_q_values(
        &self,
        state_batch: &Tensor,
        action_batch: &Tensor,
        persistent: bool,
    ) -> candle_core::Result<Tensor>;

    /// Draws a new epistemic index, making another member active.
    fn resample_epistemic_index(&mut self);
}
