//! Detects the figure walking off the left edge of the stage.

/// Host measurement of where the figure currently ends.
pub trait Viewport {
    /// Right-edge coordinate of the figure when it sits `right_offset`
    /// pixels from its anchor at the right edge of the stage.
    fn right_edge(&self, right_offset: i32) -> i32;
}

/// Edge trigger for `right_edge <= 0`.
///
/// Fires once per crossing and re-arms only after a measurement puts the
/// figure back on stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitDetector {
    armed: bool,
}

impl Default for ExitDetector {
    fn default() -> Self {
        Self { armed: true }
    }
}

impl ExitDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one measurement. Returns `true` when the figure just left.
    pub fn observe(&mut self, right_edge: i32) -> bool {
        if right_edge > 0 {
            self.armed = true;
            return false;
        }
        if self.armed {
            self.armed = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_crossing() {
        let mut detector = ExitDetector::new();
        assert!(!detector.observe(120));
        assert!(detector.observe(0));
        assert!(!detector.observe(-60));
        assert!(!detector.observe(-120));

        // Back on stage, then off again.
        assert!(!detector.observe(500));
        assert!(detector.observe(-10));
    }

    #[test]
    fn test_starting_off_stage_fires() {
        let mut detector = ExitDetector::new();
        assert!(detector.observe(-1));
        assert!(!detector.armed);
    }
}
