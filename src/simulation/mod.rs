pub mod dispatch;
pub mod engine;
pub mod sandbox;

pub use dispatch::{apply_effects, dispatch, WearerActions};
pub use engine::{TickReport, TrimEngine};
pub use sandbox::{SandboxHost, SandboxWearer, SandboxWorld};
