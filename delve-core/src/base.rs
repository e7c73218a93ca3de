//! Core functionalities.
mod agent;
mod env;
mod step;
pub use agent::Agent;
pub use env::Env;
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Old versions of related libraries supported vectorized environments,
/// where an observation object held a batch of observations. Vectorized
/// environments are not supported here, so an [`Obs`] is always a single
/// observation.
pub trait Obs: Clone + Debug {}

/// An action of the environment.
pub trait Act: Clone + Debug {}

/// The set of actions an environment accepts.
///
/// The action space is produced by [`Env::reset`] and handed to
/// [`Agent::reset`] at the beginning of every episode.
pub trait ActionSpace: Clone + Debug {}

/// An action space with a finite, enumerable set of actions.
pub trait DiscreteActionSpace: ActionSpace {
    /// Returns the number of actions in the space.
    ///
    /// Actions are identified by indices `0..n()`.
    fn n(&self) -> usize;
}
