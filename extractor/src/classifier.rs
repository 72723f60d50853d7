//! The decision rule at the center of the extractor.

use crate::config::DetectorConfig;

/// Decides whether player 0 leaving `prev` for `curr` is a reportable action
/// transition. Fires iff the state actually changed, the departed state is a
/// valid action start, and the arrival state is not suppressed.
///
/// The first timestep of a run passes an empty `prev`. A loaded
/// [`crate::config::ActionFrameSet`] can never contain the empty string, so
/// that step can never fire without needing a special case here. Player 1's
/// state plays no part in the decision.
pub fn transition_fires(prev: &str, curr: &str, config: &DetectorConfig) -> bool {
    curr != prev && config.action_frames.contains(prev) && !config.ignore_frames.contains(curr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ActionFrameSet, IgnoreFrameSet};

    fn config() -> DetectorConfig {
        DetectorConfig {
            action_frames: ActionFrameSet::from_names(["Jump", "GroundRunning"]),
            ignore_frames: IgnoreFrameSet::from_names(["GroundNormal"]),
            log_relative_facing: false,
        }
    }

    #[test]
    fn test_fires_on_valid_departure() {
        assert!(transition_fires("Jump", "UpSpecial", &config()));
    }

    #[test]
    fn test_no_change_never_fires() {
        let config = config();

        for state in ["Jump", "GroundRunning", "GroundNormal", "Dazed"] {
            assert!(!transition_fires(state, state, &config));
        }
    }

    #[test]
    fn test_invalid_departure_never_fires() {
        let config = config();

        assert!(!transition_fires("Dazed", "UpSpecial", &config));
        assert!(!transition_fires("AirStunned", "Jump", &config));
    }

    #[test]
    fn test_suppressed_arrival_never_fires() {
        assert!(!transition_fires("Jump", "GroundNormal", &config()));
    }

    #[test]
    fn test_empty_previous_state_never_fires() {
        let config = DetectorConfig {
            action_frames: ActionFrameSet::from_lines(["Jump", ""]),
            ignore_frames: IgnoreFrameSet::from_names(["GroundNormal"]),
            log_relative_facing: false,
        };

        assert!(!transition_fires("", "Jump", &config));
        assert!(!transition_fires("", "UpSpecial", &config));
    }
}
