//! Posterior-sampling exploration over an ensemble of Q-networks.
use super::{
    base::{ExplorationModule, ExplorerError},
    config::DeepExplorationConfig,
};
use crate::EnsembleQNetwork;
use anyhow::Result;
use candle_core::{DType, Device, Tensor};
use candle_nn::Module;
use delve_core::DiscreteActionSpace;
use log::trace;

/// An exploration strategy that follows a greedy policy with respect to a
/// randomly drawn value function.
///
/// At the beginning of every episode, [`reset`] draws a new member of an
/// ensemble of Q-networks (the epistemic index) and [`act`] is greedy with
/// respect to that member until the next draw. Committing to one sampled
/// value function for a whole episode is what makes the exploration
/// temporally consistent; resampling mid-episode would break it.
///
/// The approach follows the line of work on posterior sampling and
/// randomized value functions:
///
/// * Osband, Russo, Van Roy, (More) efficient reinforcement learning via
///   posterior sampling, NeurIPS 2013, <https://arxiv.org/abs/1306.0940>.
/// * Osband, Van Roy, Russo, Wen, Deep exploration via randomized value
///   functions, JMLR 2019, <https://arxiv.org/abs/1703.07608>.
/// * Osband, Blundell, Pritzel, Van Roy, Deep exploration via
///   bootstrapped DQN, NeurIPS 2016, <https://arxiv.org/abs/1602.04621>.
///
/// [`reset`]: ExplorationModule::reset
/// [`act`]: ExplorationModule::act
pub struct DeepExploration<Q: EnsembleQNetwork> {
    ensemble: Q,
    device: Device,
}

impl<Q: EnsembleQNetwork> DeepExploration<Q> {
    /// Constructs [`DeepExploration`] over the given ensemble.
    ///
    /// The ensemble is assumed to be trained elsewhere; this module only
    /// queries it.
    pub fn build(config: DeepExplorationConfig, ensemble: Q) -> Self {
        let device: Device = config
            .device
            .expect("No device is given for DeepExploration")
            .into();

        Self { ensemble, device }
    }

    /// Returns a reference to the underlying ensemble.
    pub fn ensemble(&self) -> &Q {
        &self.ensemble
    }
}

impl<Q: EnsembleQNetwork> ExplorationModule for DeepExploration<Q> {
    /// Returns the action with the highest Q-value under the active
    /// ensemble member.
    ///
    /// All `(state, action)` pairs are stacked into one batch, so scoring
    /// the whole action space takes a single forward pass. The hint
    /// arguments are ignored by this strategy. Ties between equal
    /// Q-values are broken by the underlying argmax, which takes the
    /// lowest index; this is implementation-defined and not part of the
    /// contract.
    fn act<S: DiscreteActionSpace>(
        &self,
        subjective_state: &Tensor,
        action_space: &S,
        _exploit_action: Option<i64>,
        _values: Option<&Tensor>,
        _action_availability_mask: Option<&Tensor>,
        _representation: Option<&dyn Module>,
    ) -> Result<i64> {
        let n = action_space.n();
        if n == 0 {
            return Err(ExplorerError::EmptyActionSpace.into());
        }

        // (n_actions, state_dim)
        let states = subjective_state
            .to_device(&self.device)?
            .unsqueeze(0)?
            .repeat((n, 1))?;

        // (n_actions, n_actions), row i one-hot encodes action i
        let actions = Tensor::eye(n, DType::F32, &self.device)?;

        // Inference only, no learning side effect.
        let q_values = self
            .ensemble
            .get_q_values(&states, &actions, true)?
            .detach();
        trace!("scored {} actions under the active member", n);

        let ix = q_values.flatten_all()?.argmax(0)?.to_scalar::<u32>()?;
        Ok(ix as i64)
    }

    /// Draws a new epistemic index for the next episode.
    fn reset(&mut self) {
        self.ensemble.resample_epistemic_index();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Device as ConfigDevice;
    use delve_core::ActionSpace;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    #[derive(Clone, Debug)]
    struct NActions(usize);

    impl ActionSpace for NActions {}

    impl DiscreteActionSpace for NActions {
        fn n(&self) -> usize {
            self.0
        }
    }

    /// Walks through its members in order on every resample.
    struct CyclingEnsemble {
        members: Vec<Vec<f32>>,
        active: usize,
        resamples: usize,
    }

    impl EnsembleQNetwork for CyclingEnsemble {
        fn get_q_values(
            &self,
            state_batch: &Tensor,
            action_batch: &Tensor,
            persistent: bool,
        ) -> candle_core::Result<Tensor> {
            let n = action_batch.dims()[0];
            assert_eq!(state_batch.dims()[0], n);
            assert!(persistent);

            let member = &self.members[self.active];
            Tensor::from_slice(&member[..n], (n,), state_batch.device())
        }

        fn resample_epistemic_index(&mut self) {
            self.active = (self.active + 1) % self.members.len();
            self.resamples += 1;
        }
    }

    /// Samples a member uniformly on every resample.
    struct RandomEnsemble {
        members: Vec<Vec<f32>>,
        active: usize,
        rng: SmallRng,
    }

    impl EnsembleQNetwork for RandomEnsemble {
        fn get_q_values(
            &self,
            _state_batch: &Tensor,
            action_batch: &Tensor,
            _persistent: bool,
        ) -> candle_core::Result<Tensor> {
            let n = action_batch.dims()[0];
            let member = &self.members[self.active];
            Tensor::from_slice(&member[..n], (n,), action_batch.device())
        }

        fn resample_epistemic_index(&mut self) {
            self.active = self.rng.gen_range(0..self.members.len());
        }
    }

    fn state() -> Tensor {
        Tensor::from_slice(&[0.1f32, 0.2, 0.3], (3,), &candle_core::Device::Cpu).unwrap()
    }

    fn build_exploration<Q: EnsembleQNetwork>(ensemble: Q) -> DeepExploration<Q> {
        let config = DeepExplorationConfig::default().device(ConfigDevice::Cpu);
        DeepExploration::build(config, ensemble)
    }

    #[test]
    fn test_act_returns_highest_valued_action() -> Result<()> {
        let ensemble = CyclingEnsemble {
            members: vec![vec![0.1, 0.5, 0.9, 0.2]],
            active: 0,
            resamples: 0,
        };
        let exploration = build_exploration(ensemble);

        // hint arguments are ignored
        let values = Tensor::from_slice(&[9.0f32, 0.0, 0.0, 0.0], (4,), &candle_core::Device::Cpu)?;
        let act = exploration.act(
            &state(),
            &NActions(4),
            Some(0),
            Some(&values),
            None,
            None,
        )?;

        assert_eq!(act, 2);
        Ok(())
    }

    #[test]
    fn test_batches_cover_the_whole_action_space() -> Result<()> {
        struct ShapeCheckingEnsemble;

        impl EnsembleQNetwork for ShapeCheckingEnsemble {
            fn get_q_values(
                &self,
                state_batch: &Tensor,
                action_batch: &Tensor,
                _persistent: bool,
            ) -> candle_core::Result<Tensor> {
                assert_eq!(state_batch.dims(), &[4, 3]);
                assert_eq!(action_batch.dims(), &[4, 4]);

                // every action appears exactly once, one-hot encoded
                let rows = action_batch.to_vec2::<f32>()?;
                for (i, row) in rows.iter().enumerate() {
                    for (j, v) in row.iter().enumerate() {
                        assert_eq!(*v, if i == j { 1.0 } else { 0.0 });
                    }
                }

                Tensor::from_slice(&[0.0f32, 0.0, 0.0, 1.0], (4,), state_batch.device())
            }

            fn resample_epistemic_index(&mut self) {}
        }

        let exploration = build_exploration(ShapeCheckingEnsemble);
        let act = exploration.act(&state(), &NActions(4), None, None, None, None)?;

        assert_eq!(act, 3);
        Ok(())
    }

    #[test]
    fn test_reset_uses_latest_member_for_subsequent_acts() -> Result<()> {
        // member i assigns the highest value to action i
        let ensemble = CyclingEnsemble {
            members: vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ],
            active: 0,
            resamples: 0,
        };
        let mut exploration = build_exploration(ensemble);

        exploration.reset();
        exploration.reset();

        assert_eq!(exploration.ensemble().resamples, 2);
        for _ in 0..3 {
            let act = exploration.act(&state(), &NActions(3), None, None, None, None)?;
            assert_eq!(act, 2);
        }
        Ok(())
    }

    #[test]
    fn test_act_is_greedy_for_the_sampled_member() -> Result<()> {
        // member i assigns the highest value to action i
        let ensemble = RandomEnsemble {
            members: vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ],
            active: 0,
            rng: SmallRng::seed_from_u64(42),
        };
        let mut exploration = build_exploration(ensemble);

        for _ in 0..10 {
            exploration.reset();
            let active = exploration.ensemble().active;
            let act = exploration.act(&state(), &NActions(3), None, None, None, None)?;
            assert_eq!(act, active as i64);
        }
        Ok(())
    }

    #[test]
    fn test_empty_action_space_is_an_error() {
        let ensemble = CyclingEnsemble {
            members: vec![vec![]],
            active: 0,
            resamples: 0,
        };
        let exploration = build_exploration(ensemble);

        let result = exploration.act(&state(), &NActions(0), None, None, None, None);
        assert!(result.is_err());
    }
}
