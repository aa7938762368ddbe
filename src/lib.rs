//! Moonwalk - a looping dance animation for the terminal
//!
//! A small figure cycles through leg poses on a repeating timer while sliding
//! across the stage:
//! - Two preset dance moves (moon walk and duck walk)
//! - Start/stop, tick delay and dance style controls
//! - The figure loops back once it walks off the left edge

pub mod config;
pub mod dance;
pub mod driver;
pub mod headless;
pub mod tui;

pub use config::MoonwalkConfig;
pub use dance::{AnimationState, DanceMode, DanceMove, Pose, RenderFrame};
pub use driver::AnimationDriver;

/// Result type for Moonwalk operations
pub type Result<T> = std::result::Result<T, MoonwalkError>;

/// Errors that can occur in Moonwalk
#[derive(Debug, thiserror::Error)]
pub enum MoonwalkError {
    #[error("Invalid delay {0:?}: expected a positive number of milliseconds")]
    InvalidDelay(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
