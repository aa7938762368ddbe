//! Stage controller: per-body-part poses and the horizontal offset.

use serde::Serialize;

use super::moves::{DanceMove, Pose};

/// One of the six animated leg segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    LeftUpper,
    LeftLower,
    LeftFoot,
    RightUpper,
    RightLower,
    RightFoot,
}

impl BodyPart {
    pub const LEFT: [BodyPart; 3] = [BodyPart::LeftUpper, BodyPart::LeftLower, BodyPart::LeftFoot];
    pub const RIGHT: [BodyPart; 3] =
        [BodyPart::RightUpper, BodyPart::RightLower, BodyPart::RightFoot];
}

/// Current pose of every leg segment. Exactly one pose per part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BodyPose {
    pub left_upper: Pose,
    pub left_lower: Pose,
    pub left_foot: Pose,
    pub right_upper: Pose,
    pub right_lower: Pose,
    pub right_foot: Pose,
}

impl Default for BodyPose {
    fn default() -> Self {
        Self {
            left_upper: Pose::Stage1,
            left_lower: Pose::Stage1,
            left_foot: Pose::Stage1,
            right_upper: Pose::Stage3,
            right_lower: Pose::Stage3,
            right_foot: Pose::Stage3,
        }
    }
}

impl BodyPose {
    pub fn get(&self, part: BodyPart) -> Pose {
        match part {
            BodyPart::LeftUpper => self.left_upper,
            BodyPart::LeftLower => self.left_lower,
            BodyPart::LeftFoot => self.left_foot,
            BodyPart::RightUpper => self.right_upper,
            BodyPart::RightLower => self.right_lower,
            BodyPart::RightFoot => self.right_foot,
        }
    }

    pub fn set(&mut self, part: BodyPart, pose: Pose) {
        let slot = match part {
            BodyPart::LeftUpper => &mut self.left_upper,
            BodyPart::LeftLower => &mut self.left_lower,
            BodyPart::LeftFoot => &mut self.left_foot,
            BodyPart::RightUpper => &mut self.right_upper,
            BodyPart::RightLower => &mut self.right_lower,
            BodyPart::RightFoot => &mut self.right_foot,
        };
        *slot = pose;
    }
}

/// Holds the figure's leg poses and how far it has walked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageController {
    pose: BodyPose,
    cumulative_offset: i32,
}

impl StageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pose(&self) -> &BodyPose {
        &self.pose
    }

    pub fn cumulative_offset(&self) -> i32 {
        self.cumulative_offset
    }

    /// Show step `index` of `dance_move` and walk one step further.
    ///
    /// `index` must be below [`super::NUM_MOVES`].
    pub fn apply_step(&mut self, dance_move: &DanceMove, index: usize) {
        let left = dance_move.left_leg_stages[index];
        let right = dance_move.right_leg_stages[index];
        for part in BodyPart::LEFT {
            self.pose.set(part, left);
        }
        for part in BodyPart::RIGHT {
            self.pose.set(part, right);
        }
        self.cumulative_offset = self.cumulative_offset.saturating_add(dance_move.right_offset);
    }

    /// Bring the figure back to its starting edge.
    pub fn reset_offset(&mut self) {
        self.cumulative_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dance::moves::{DUCK_WALK, MOON_WALK, NUM_MOVES};

    #[test]
    fn test_initial_pose() {
        let stage = StageController::new();
        for part in BodyPart::LEFT {
            assert_eq!(stage.pose().get(part), Pose::Stage1);
        }
        for part in BodyPart::RIGHT {
            assert_eq!(stage.pose().get(part), Pose::Stage3);
        }
        assert_eq!(stage.cumulative_offset(), 0);
    }

    #[test]
    fn test_apply_step_sets_every_index() {
        for index in 0..NUM_MOVES {
            let mut stage = StageController::new();
            stage.apply_step(&MOON_WALK, index);
            for part in BodyPart::LEFT {
                assert_eq!(stage.pose().get(part), MOON_WALK.left_leg_stages[index]);
            }
            for part in BodyPart::RIGHT {
                assert_eq!(stage.pose().get(part), MOON_WALK.right_leg_stages[index]);
            }
        }
    }

    #[test]
    fn test_apply_step_replaces_prior_pose() {
        let mut stage = StageController::new();
        stage.apply_step(&DUCK_WALK, 1);
        assert_eq!(stage.pose().left_upper, Pose::Stage6);

        stage.apply_step(&MOON_WALK, 0);
        assert_eq!(stage.pose().left_upper, Pose::Stage1);
        assert_eq!(stage.pose().left_foot, Pose::Stage1);
        assert_eq!(stage.pose().right_lower, Pose::Stage3);
    }

    #[test]
    fn test_offset_accumulates_and_resets() {
        let mut stage = StageController::new();
        for index in 0..3 {
            stage.apply_step(&MOON_WALK, index);
        }
        assert_eq!(stage.cumulative_offset(), 180);

        stage.reset_offset();
        assert_eq!(stage.cumulative_offset(), 0);
        stage.apply_step(&MOON_WALK, 3);
        assert_eq!(stage.cumulative_offset(), 60);
    }

    #[test]
    fn test_offset_saturates() {
        let mut stage = StageController::new();
        stage.cumulative_offset = i32::MAX - 30;
        stage.apply_step(&MOON_WALK, 0);
        assert_eq!(stage.cumulative_offset(), i32::MAX);
        stage.apply_step(&MOON_WALK, 1);
        assert_eq!(stage.cumulative_offset(), i32::MAX);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_index_panics() {
        let mut stage = StageController::new();
        stage.apply_step(&MOON_WALK, NUM_MOVES);
    }
}
