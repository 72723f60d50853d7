//! Where an emitted event's label line comes from.

use ghost_recording::{FramePair, ReplayLog};

use crate::errors::ExtractorError;

/// Produces the third line of an event block.
///
/// Plain runs describe the transition itself; replay-annotated runs
/// substitute the controller input recorded at the same line index. The
/// detector holds one of these behind a box so both run kinds share a
/// single pass.
pub trait LabelSource: std::fmt::Debug {
    fn label(&self, prev_state: &str, curr_state: &str, current: &FramePair) -> Result<String, ExtractorError>;
}

/// Labels an event with the literal state change, e.g. `Jump  ->  Attack`.
#[derive(Debug, Default)]
pub struct StateChangeLabels;

impl LabelSource for StateChangeLabels {
    fn label(&self, prev_state: &str, curr_state: &str, _current: &FramePair) -> Result<String, ExtractorError> {
        Ok(format!("{prev_state}  ->  {curr_state}"))
    }
}

/// Labels an event with the replay input payload aligned to the current
/// pair's player line.
#[derive(Debug)]
pub struct ReplayCommandLabels {
    replay: ReplayLog,
}

impl ReplayCommandLabels {
    pub fn new(replay: ReplayLog) -> Self {
        Self { replay }
    }
}

impl LabelSource for ReplayCommandLabels {
    fn label(&self, _prev_state: &str, _curr_state: &str, current: &FramePair) -> Result<String, ExtractorError> {
        Ok(self.replay.command_at(current.line_index())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghost_recording::GhostLog;

    fn pair_at(log: &GhostLog, index: usize) -> &FramePair {
        &log.pairs()[index]
    }

    fn two_step_log() -> GhostLog {
        GhostLog::from_lines([
            "FName: Jump  dir: 1",
            "FName: Idle  dir: -1",
            "FName: UpSpecial  dir: 1",
            "FName: Idle  dir: -1",
        ])
        .unwrap()
    }

    #[test]
    fn test_state_change_label_format() {
        let log = two_step_log();
        let label = StateChangeLabels.label("Jump", "Attack", pair_at(&log, 0)).unwrap();

        assert_eq!(label, "Jump  ->  Attack");
    }

    #[test]
    fn test_replay_label_aligns_to_current_player_line() {
        let log = two_step_log();
        let replay = ReplayLog::from_lines([
            "alice bob",
            "[0] first",
            "[1] second",
            "[0] 5A",
            "[1] fourth",
        ]);
        let labels = ReplayCommandLabels::new(replay);

        // The second pair's player line sits at index 2.
        let label = labels.label("Jump", "UpSpecial", pair_at(&log, 1)).unwrap();

        assert_eq!(label, "5A");
    }

    #[test]
    fn test_replay_label_misalignment_is_fatal() {
        let log = two_step_log();
        let labels = ReplayCommandLabels::new(ReplayLog::from_lines(["alice bob", "[0] only"]));

        assert!(labels.label("Jump", "UpSpecial", pair_at(&log, 1)).is_err());
    }
}
