pub mod config;
pub mod error;
pub mod types;

pub use config::{EngineConfig, PolicyTuning};
pub use error::{Result, TrimError};
