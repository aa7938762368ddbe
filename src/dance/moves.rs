//! Preset dance moves and the closed set of leg poses.

use serde::{Deserialize, Serialize};

/// Number of steps in every dance move.
pub const NUM_MOVES: usize = 4;

/// Visual configuration of one leg segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pose {
    #[serde(rename = "stage-1")]
    Stage1,
    #[serde(rename = "stage-2")]
    Stage2,
    #[serde(rename = "stage-3")]
    Stage3,
    #[serde(rename = "stage-4")]
    Stage4,
    #[serde(rename = "stage-5")]
    Stage5,
    #[serde(rename = "stage-6")]
    Stage6,
    #[serde(rename = "stage-7")]
    Stage7,
}

impl Pose {
    pub const ALL: [Pose; 7] = [
        Pose::Stage1,
        Pose::Stage2,
        Pose::Stage3,
        Pose::Stage4,
        Pose::Stage5,
        Pose::Stage6,
        Pose::Stage7,
    ];

    /// Class-style identifier, e.g. `stage-3`.
    pub fn class_name(self) -> &'static str {
        match self {
            Pose::Stage1 => "stage-1",
            Pose::Stage2 => "stage-2",
            Pose::Stage3 => "stage-3",
            Pose::Stage4 => "stage-4",
            Pose::Stage5 => "stage-5",
            Pose::Stage6 => "stage-6",
            Pose::Stage7 => "stage-7",
        }
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A fixed sequence of leg poses plus the horizontal step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanceMove {
    pub left_leg_stages: [Pose; NUM_MOVES],
    pub right_leg_stages: [Pose; NUM_MOVES],
    /// Pixels added to the right offset on every step
    pub right_offset: i32,
}

pub const MOON_WALK: DanceMove = DanceMove {
    left_leg_stages: [Pose::Stage1, Pose::Stage2, Pose::Stage3, Pose::Stage2],
    right_leg_stages: [Pose::Stage3, Pose::Stage2, Pose::Stage1, Pose::Stage2],
    right_offset: 60,
};

pub const DUCK_WALK: DanceMove = DanceMove {
    left_leg_stages: [Pose::Stage4, Pose::Stage6, Pose::Stage4, Pose::Stage6],
    right_leg_stages: [Pose::Stage5, Pose::Stage7, Pose::Stage5, Pose::Stage7],
    right_offset: 60,
};

/// Which preset is currently danced.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DanceMode {
    #[default]
    MoonWalk,
    DuckWalk,
}

impl DanceMode {
    pub fn dance_move(self) -> &'static DanceMove {
        match self {
            DanceMode::MoonWalk => &MOON_WALK,
            DanceMode::DuckWalk => &DUCK_WALK,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            DanceMode::MoonWalk => DanceMode::DuckWalk,
            DanceMode::DuckWalk => DanceMode::MoonWalk,
        }
    }

    /// Button label for the dance-style toggle.
    pub fn label(self) -> &'static str {
        match self {
            DanceMode::MoonWalk => "Moon walk",
            DanceMode::DuckWalk => "Duck walk",
        }
    }

    /// The duck walk is drawn facing the other way.
    pub fn is_mirrored(self) -> bool {
        self == DanceMode::DuckWalk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        let names: Vec<_> = Pose::ALL.iter().map(|p| p.class_name()).collect();
        assert_eq!(
            names,
            ["stage-1", "stage-2", "stage-3", "stage-4", "stage-5", "stage-6", "stage-7"]
        );
    }

    #[test]
    fn test_moves_use_disjoint_poses() {
        // Moon walk only uses stages 1-3, duck walk only 4-7.
        for pose in MOON_WALK.left_leg_stages.iter().chain(&MOON_WALK.right_leg_stages) {
            assert!(matches!(pose, Pose::Stage1 | Pose::Stage2 | Pose::Stage3));
        }
        for pose in DUCK_WALK.left_leg_stages.iter().chain(&DUCK_WALK.right_leg_stages) {
            assert!(!matches!(pose, Pose::Stage1 | Pose::Stage2 | Pose::Stage3));
        }
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(DanceMode::MoonWalk.toggle(), DanceMode::DuckWalk);
        assert_eq!(DanceMode::MoonWalk.toggle().toggle(), DanceMode::MoonWalk);
    }

    #[test]
    fn test_mode_selects_preset() {
        assert_eq!(DanceMode::MoonWalk.dance_move(), &MOON_WALK);
        assert_eq!(DanceMode::DuckWalk.dance_move(), &DUCK_WALK);
        assert!(DanceMode::DuckWalk.is_mirrored());
        assert!(!DanceMode::MoonWalk.is_mirrored());
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_string(&DanceMode::DuckWalk).unwrap();
        assert_eq!(json, "\"duck-walk\"");
        let pose = serde_json::to_string(&Pose::Stage7).unwrap();
        assert_eq!(pose, "\"stage-7\"");
    }
}
