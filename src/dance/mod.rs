//! Dance presets and the animation state machine

pub mod easing;
pub mod exit;
pub mod moves;
pub mod stage;
pub mod state;

pub use easing::{TimingCurve, TIMING_CURVES};
pub use exit::{ExitDetector, Viewport};
pub use moves::{DanceMode, DanceMove, Pose, DUCK_WALK, MOON_WALK, NUM_MOVES};
pub use stage::{BodyPart, BodyPose, StageController};
pub use state::{parse_delay, AnimationState, RenderFrame};
