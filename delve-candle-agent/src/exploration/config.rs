//! Configuration of [`DeepExploration`](super::DeepExploration).
use crate::Device;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`DeepExploration`](super::DeepExploration).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct DeepExplorationConfig {
    /// Device on which tensors are placed.
    pub device: Option<Device>,
}

impl Default for DeepExplorationConfig {
    fn default() -> Self {
        Self { device: None }
    }
}

impl DeepExplorationConfig {
    /// Sets the device.
    pub fn device(mut self, device: Device) -> Self {
        self.device = Some(device);
        self
    }

    /// Constructs [`DeepExplorationConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`DeepExplorationConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_deep_exploration_config() -> Result<()> {
        let config = DeepExplorationConfig::default().device(Device::Cpu);

        let dir = TempDir::new("deep_exploration_config")?;
        let path = dir.path().join("deep_exploration_config.yaml");

        config.save(&path)?;
        let config_ = DeepExplorationConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }
}
