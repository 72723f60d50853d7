//! The replay input log saved alongside a match: a header line of player
//! names, then one line per ghost-log line holding the controller state that
//! produced that frame.

use std::fs;
use std::path::Path;

use crate::errors::RecordingError;

/// An index-aligned view over a replay input log.
///
/// The header line is dropped at construction, so entry `n` corresponds to
/// line `n` of the ghost log. Each stored line still carries its leading
/// `[i]` player marker; [`ReplayLog::command_at`] strips it.
#[derive(Debug, Clone)]
pub struct ReplayLog {
    lines: Vec<String>,
}

impl ReplayLog {
    /// Reads a replay file off disk. Propagates any read failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecordingError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let log = Self::from_lines(contents.lines());

        tracing::info!(path = %path.display(), entries = log.lines.len(), "Loaded replay log");

        Ok(log)
    }

    /// Builds a log from raw lines, discarding the player-name header.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            lines: lines.into_iter().skip(1).map(|line| line.trim().to_string()).collect(),
        }
    }

    /// The input payload aligned to a ghost-log line index, with the leading
    /// player marker token removed.
    ///
    /// An out-of-range index means the two logs don't describe the same
    /// match, which there is no way to recover from.
    pub fn command_at(&self, line_index: usize) -> Result<String, RecordingError> {
        let line = self
            .lines
            .get(line_index)
            .ok_or(RecordingError::MisalignedReplay { line: line_index + 1 })?;

        let mut tokens = line.split_whitespace();
        tokens.next();

        Ok(tokens.collect::<Vec<_>>().join(" "))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_dropped() {
        let log = ReplayLog::from_lines(["alice bob", "[0] 1 0 0", "[1] 0 0 0"]);

        assert_eq!(log.len(), 2);
        assert_eq!(log.command_at(0).unwrap(), "1 0 0");
        assert_eq!(log.command_at(1).unwrap(), "0 0 0");
    }

    #[test]
    fn test_marker_is_stripped() {
        let log = ReplayLog::from_lines(["header", "[0] 0.5 -0.25 1 1 0"]);

        assert_eq!(log.command_at(0).unwrap(), "0.5 -0.25 1 1 0");
    }

    #[test]
    fn test_marker_only_line_yields_empty_payload() {
        let log = ReplayLog::from_lines(["header", "[0]"]);

        assert_eq!(log.command_at(0).unwrap(), "");
    }

    #[test]
    fn test_out_of_range_is_fatal() {
        let log = ReplayLog::from_lines(["header", "[0] 1"]);

        assert!(matches!(
            log.command_at(4),
            Err(RecordingError::MisalignedReplay { line: 5 })
        ));
    }
}
