//! Host-facing read seams: the wearer and the world around it

pub mod predicates;
pub mod wearer;
pub mod world;

pub use wearer::{Equipped, Experience, WearerView};
pub use world::{EnvResult, EnvironmentError, WorldView};
