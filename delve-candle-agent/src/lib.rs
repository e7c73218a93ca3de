//! Exploration modules implemented with [candle](https://crates.io/crates/candle-core).
pub mod exploration;
mod ensemble;
pub use ensemble::EnsembleQNetwork;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Copy, Deserialize, Serialize, PartialEq)]
/// Device on which candle tensors are placed.
///
/// [`candle_core::Device`] does not support serialization, so configs
/// hold this enum and resolve it once at construction.
pub enum Device {
    /// The main CPU device.
    Cpu,

    /// The GPU device with the given ordinal.
    Cuda(usize),
}

impl Into<candle_core::Device> for Device {
    fn into(self) -> candle_core::Device {
        match self {
            Self::Cpu => candle_core::Device::Cpu,
            Self::Cuda(n) => candle_core::Device::new_cuda(n).unwrap(),
        }
    }
}
