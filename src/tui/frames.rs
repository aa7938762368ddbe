use std::time::Duration;

use crate::dance::{BodyPose, Pose};

/// Redraw interval for the slide (16 ms ≈ 60 FPS).
pub const FRAME_TICK: Duration = Duration::from_millis(16);

/// Width of every figure line in terminal cells.
pub const FIGURE_WIDTH: u16 = 9;

/// Hat, face, arms and body. Legs are appended per pose.
const TORSO: [&str; 5] = [
    "  _____  ",
    "__|___|__",
    "   (\")   ",
    "  /|#|\\  ",
    " / |#| \\ ",
];

/// Rows of a leg, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Upper,
    Lower,
    Foot,
}

/// Four-cell drawing of one leg segment in a given pose.
fn leg_glyph(segment: Segment, pose: Pose) -> &'static str {
    match (segment, pose) {
        (Segment::Upper, Pose::Stage1) => " |  ",
        (Segment::Upper, Pose::Stage2) => "  \\ ",
        (Segment::Upper, Pose::Stage3) => " /  ",
        (Segment::Upper, Pose::Stage4) => " |  ",
        (Segment::Upper, Pose::Stage5) => "  \\ ",
        (Segment::Upper, Pose::Stage6) => " /  ",
        (Segment::Upper, Pose::Stage7) => "  \\_",

        (Segment::Lower, Pose::Stage1) => " |  ",
        (Segment::Lower, Pose::Stage2) => "  / ",
        (Segment::Lower, Pose::Stage3) => "/   ",
        (Segment::Lower, Pose::Stage4) => " \\  ",
        (Segment::Lower, Pose::Stage5) => "  | ",
        (Segment::Lower, Pose::Stage6) => " \\  ",
        (Segment::Lower, Pose::Stage7) => "   )",

        (Segment::Foot, Pose::Stage1) => " |_ ",
        (Segment::Foot, Pose::Stage2) => " ^  ",
        (Segment::Foot, Pose::Stage3) => "|_  ",
        (Segment::Foot, Pose::Stage4) => "  >_",
        (Segment::Foot, Pose::Stage5) => "  L_",
        (Segment::Foot, Pose::Stage6) => " _> ",
        (Segment::Foot, Pose::Stage7) => "  _>",
    }
}

/// Draw the whole figure for `pose`, facing left when `mirrored`.
pub fn figure_lines(pose: &BodyPose, mirrored: bool) -> Vec<String> {
    let legs = [
        (Segment::Upper, pose.left_upper, pose.right_upper),
        (Segment::Lower, pose.left_lower, pose.right_lower),
        (Segment::Foot, pose.left_foot, pose.right_foot),
    ];

    let mut lines: Vec<String> = TORSO.iter().map(|l| l.to_string()).collect();
    for (segment, left, right) in legs {
        lines.push(format!("{} {}", leg_glyph(segment, left), leg_glyph(segment, right)));
    }

    if mirrored {
        lines.iter().map(String::as_str).map(mirror).collect()
    } else {
        lines
    }
}

fn mirror(line: &str) -> String {
    line.chars()
        .rev()
        .map(|c| match c {
            '/' => '\\',
            '\\' => '/',
            '(' => ')',
            ')' => '(',
            '<' => '>',
            '>' => '<',
            '[' => ']',
            ']' => '[',
            other => other,
        })
        .collect()
}
