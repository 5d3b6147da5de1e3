//! Process-level concerns: configuration and lifecycle state.

pub mod config;
pub mod lifecycle;

pub use config::AppConfig;
pub use lifecycle::{Lifecycle, LifecycleState};
