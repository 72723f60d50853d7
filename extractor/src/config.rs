//! Frame-set configuration for the detector. Both sets are plain membership
//! tests over state names; which names go in them is policy, not code, so
//! they're built here and handed to the classifier rather than living as
//! literals inside it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::ExtractorError;

/// State names that a tracked action may legitimately begin from.
///
/// Loaded once at startup from a side file, one name per line. Blank lines
/// are dropped, which guarantees the empty string is never a member - the
/// detector leans on that for its pre-run state.
#[derive(Debug, Clone, Default)]
pub struct ActionFrameSet {
    names: HashSet<String>,
}

impl ActionFrameSet {
    /// Reads a side file of action-start state names. A missing or
    /// unreadable file is fatal; there is no useful run without one.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ExtractorError::ActionFrames {
            path: path.to_path_buf(),
            source,
        })?;

        let set = Self::from_lines(contents.lines());

        tracing::info!(path = %path.display(), count = set.len(), "Loaded action frame set");

        Ok(set)
    }

    /// Builds a set from raw lines: trimmed, blanks dropped.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            names: lines
                .into_iter()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// Builds a set from explicit names. Mostly useful in tests.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// State names that should never be reported as the endpoint of a
/// transition, no matter what state was departed.
#[derive(Debug, Clone)]
pub struct IgnoreFrameSet {
    names: HashSet<String>,
}

impl IgnoreFrameSet {
    /// The suppression list for plain runs: hitstun, the grounded rest
    /// state, and being grabbed are consequences, not actions.
    pub fn ghost_default() -> Self {
        Self::from_names(["AirStunned", "GroundNormal", "Grabbed"])
    }

    /// The suppression list for replay-annotated runs, which additionally
    /// drop transitions into walking.
    pub fn replay_default() -> Self {
        Self::from_names(["AirStunned", "GroundNormal", "Grabbed", "GroundWalking"])
    }

    /// Builds a custom suppression list.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for IgnoreFrameSet {
    fn default() -> Self {
        Self::ghost_default()
    }
}

/// Everything the classifier needs to make its call, plus the toggle for
/// the relative-facing diagnostic that replay-annotated runs log.
#[derive(Debug, Clone, Default)]
pub struct DetectorConfig {
    pub action_frames: ActionFrameSet,
    pub ignore_frames: IgnoreFrameSet,
    pub log_relative_facing: bool,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_blank_lines_are_never_members() {
        let set = ActionFrameSet::from_lines(["Jump", "", "  ", "GroundRunning"]);

        assert_eq!(set.len(), 2);
        assert!(set.contains("Jump"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_names_are_trimmed() {
        let set = ActionFrameSet::from_lines(["  Jump  "]);

        assert!(set.contains("Jump"));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Jump\nGroundRunning\n\nLedgeGrab").unwrap();

        let set = ActionFrameSet::load(file.path()).unwrap();

        assert_eq!(set.len(), 3);
        assert!(set.contains("LedgeGrab"));
    }

    #[test]
    fn test_missing_side_file_is_fatal() {
        let result = ActionFrameSet::load("definitely/not/here.txt");

        assert!(matches!(result, Err(ExtractorError::ActionFrames { .. })));
    }

    #[test]
    fn test_ignore_presets_differ_only_by_walking() {
        let ghost = IgnoreFrameSet::ghost_default();
        let replay = IgnoreFrameSet::replay_default();

        for name in ["AirStunned", "GroundNormal", "Grabbed"] {
            assert!(ghost.contains(name));
            assert!(replay.contains(name));
        }

        assert!(!ghost.contains("GroundWalking"));
        assert!(replay.contains("GroundWalking"));
    }
}
