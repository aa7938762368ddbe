//! Terminal User Interface module
//!
//! Draws the stage, the dancer and the three controls, and turns key presses
//! and mouse clicks into state changes.

mod app;
pub mod ascii_animation;
pub mod frames;
mod input;
mod theme;
mod widgets;

pub use app::{App, StageViewport};
