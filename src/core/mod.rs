//! Core application primitives (orchestration, refresh, scheduling)

pub mod orchestrator;
pub mod pacing;
pub mod refresh;
pub mod scheduler;

pub use orchestrator::*;
pub use pacing::*;
pub use refresh::*;
pub use scheduler::*;
