//! Configurations of the online learning loop.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`episode_return`](super::episode_return).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EpisodeConfig {
    /// Performs a learning update after every step.
    pub learn: bool,

    /// Asks the agent to only exploit.
    pub exploit: bool,

    /// Defers the learning update to the end of the episode.
    pub learn_after_episode: bool,

    /// Sizes each learning batch to the current buffer length.
    pub dynamic_size: bool,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            learn: false,
            exploit: true,
            learn_after_episode: false,
            dynamic_size: false,
        }
    }
}

impl EpisodeConfig {
    /// Sets whether a learning update runs after every step.
    pub fn learn(mut self, v: bool) -> Self {
        self.learn = v;
        self
    }

    /// Sets whether the agent only exploits.
    pub fn exploit(mut self, v: bool) -> Self {
        self.exploit = v;
        self
    }

    /// Sets whether learning is deferred to the end of the episode.
    pub fn learn_after_episode(mut self, v: bool) -> Self {
        self.learn_after_episode = v;
        self
    }

    /// Sets whether learning batches are sized to the buffer length.
    pub fn dynamic_size(mut self, v: bool) -> Self {
        self.dynamic_size = v;
        self
    }
}

/// Configuration of [`online_learning`](super::online_learning).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct OnlineLearningConfig {
    /// The number of episodes to run.
    pub number_of_episodes: usize,

    /// Asks the agent to only learn after every episode.
    pub learn_after_episode: bool,

    /// Sizes each learning batch to the current buffer length.
    pub dynamic_size: bool,
}

impl Default for OnlineLearningConfig {
    fn default() -> Self {
        Self {
            number_of_episodes: 1000,
            learn_after_episode: false,
            dynamic_size: false,
        }
    }
}

impl OnlineLearningConfig {
    /// Sets the number of episodes to run.
    pub fn number_of_episodes(mut self, v: usize) -> Self {
        self.number_of_episodes = v;
        self
    }

    /// Sets whether the agent only learns after every episode.
    pub fn learn_after_episode(mut self, v: bool) -> Self {
        self.learn_after_episode = v;
        self
    }

    /// Sets whether learning batches are sized to the buffer length.
    pub fn dynamic_size(mut self, v: bool) -> Self {
        self.dynamic_size = v;
        self
    }

    /// Constructs [`OnlineLearningConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`OnlineLearningConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
