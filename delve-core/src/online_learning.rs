//! Online learning of an [`Agent`] on an [`Env`].
mod config;
use crate::{plot::plot_returns, Agent, Env};
use anyhow::Result;
pub use config::{EpisodeConfig, OnlineLearningConfig};
use log::{info, trace};
use std::{fmt::Display, path::Path};

/// Runs one episode and returns the total reward (return).
///
/// The environment is reset, the agent is reset with the initial
/// observation and the action space, and then the agent and the
/// environment interact until the environment reports a done step. The
/// done flag is only inspected after a step has been taken, so every
/// episode consists of at least one `act`/`step`/`observe` cycle.
///
/// When learning is enabled and `learn_after_episode` is not set, the
/// agent performs one learning update after every step. With
/// `learn_after_episode` set, a single update runs after the episode
/// instead; if the episode produced fewer transitions than the agent's
/// configured batch size, the update is constrained to a batch of the
/// steps actually taken, since the default-sized update would do nothing
/// on the underfilled buffer.
///
/// Failures of the environment or the agent are not handled here and
/// propagate to the caller.
pub fn episode_return<E, A>(agent: &mut A, env: &mut E, config: &EpisodeConfig) -> Result<f32>
where
    E: Env,
    A: Agent<E>,
{
    let mut g = 0f32;
    let (obs, action_space) = env.reset()?;
    agent.reset(&obs, &action_space);
    let mut done = false;
    let mut steps = 0;

    while !done {
        let act = agent.act(config.exploit);
        let step = env.step(&act)?;
        g += step.reward;
        done = step.is_done;
        agent.observe(step);
        if config.learn && !config.learn_after_episode {
            agent.learn(None, config.dynamic_size)?;
        }
        steps += 1;
    }

    if config.learn && config.learn_after_episode {
        if agent.batch_size() > steps {
            // Without the override, the update would do nothing.
            agent.learn(Some(steps), config.dynamic_size)?;
        } else {
            agent.learn(None, config.dynamic_size)?;
        }
    }

    Ok(g)
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Performs online learning for a number of episodes.
///
/// Episodes run strictly one after another, each with learning enabled and
/// exploitation disabled; `learn_after_episode` and `dynamic_size` are
/// taken from `config`. After each episode, `process_return` is invoked
/// with the return of that episode. The function itself returns nothing;
/// all output flows through the sink.
///
/// Within an episode, objects interact as shown below:
///
/// ```mermaid
/// graph LR
///     A[Agent]-->|Env::Act|B[Env]
///     B -->|"Step&lt;E: Env&gt;"|A
/// ```
pub fn online_learning<E, A, F>(
    agent: &mut A,
    env: &mut E,
    config: &OnlineLearningConfig,
    mut process_return: F,
) -> Result<()>
where
    E: Env,
    A: Agent<E>,
    F: FnMut(f32),
{
    let episode_config = EpisodeConfig::default()
        .learn(true)
        .exploit(false)
        .learn_after_episode(config.learn_after_episode)
        .dynamic_size(config.dynamic_size);

    info!(
        "Starts online learning over {} episodes",
        config.number_of_episodes
    );

    for episode in 0..config.number_of_episodes {
        let g = episode_return(agent, env, &episode_config)?;
        trace!("Episode {} return: {}", episode, g);
        process_return(g);
    }

    Ok(())
}

/// Performs online learning and collects the return of every episode.
///
/// The returned vector has exactly `config.number_of_episodes` elements,
/// in episode order.
pub fn online_learning_returns<E, A>(
    agent: &mut A,
    env: &mut E,
    config: &OnlineLearningConfig,
) -> Result<Vec<f32>>
where
    E: Env,
    A: Agent<E>,
{
    let mut returns = Vec::with_capacity(config.number_of_episodes);
    online_learning(agent, env, config, |g| returns.push(g))?;
    Ok(returns)
}

/// Performs online learning and renders the returns as a PNG line chart.
///
/// With `filename` set to `None`, no chart is rendered and no file is
/// written; the episodes still run. The chart title combines the display
/// representations of the agent and the environment. By convention the
/// chart is written to `returns.png`.
pub fn online_learning_to_png_graph<E, A>(
    agent: &mut A,
    env: &mut E,
    filename: Option<&Path>,
    config: &OnlineLearningConfig,
) -> Result<()>
where
    E: Env + Display,
    A: Agent<E> + Display,
{
    let title = format!("{} on {}", agent, env);
    let returns = online_learning_returns(agent, env, config)?;

    if let Some(path) = filename {
        plot_returns(&returns, &title, path)?;
        info!("Wrote returns chart to {:?}", path);
    }

    Ok(())
}
