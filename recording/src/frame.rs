//! Raw recorder lines and the pairing of them into timesteps.
//!
//! The recorder writes one line per fighter per timestep, player 0 first,
//! so every two consecutive lines of a ghost file form one timestep.

use std::fs;
use std::path::Path;

use crate::errors::RecordingError;

/// Label preceding the animation state name in a recorder line.
pub const STATE_LABEL: &str = "FName:";

/// Label preceding the position values; the first value following it is the
/// horizontal coordinate.
pub const POSITION_LABEL: &str = "Pos:";

/// Label preceding the facing direction (±1).
pub const FACING_LABEL: &str = "dir:";

/// One trimmed telemetry line for a single actor at a single timestep.
///
/// The raw line is kept verbatim - emitted event blocks reproduce it
/// untouched - and the fields of interest are pulled out on demand by
/// searching for their label token. The recorder writes lines shaped like:
///
/// ```text
/// PID: 0  Pos: 10.5 0  Vel: 0 0  FName: GroundNormal  Dmg: 0  hbox: 0  dir: 1
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    raw: String,
    line: usize,
}

impl FrameRecord {
    /// Wraps a trimmed line along with its 1-based line number in the source
    /// file. The line number only exists for error reporting.
    pub fn new(raw: impl Into<String>, line: usize) -> Self {
        Self { raw: raw.into(), line }
    }

    /// The line exactly as the recorder wrote it (post trim).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 1-based line number within the source file.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The whitespace-delimited token immediately following `label`.
    ///
    /// Recorder lines are trusted input; a missing label (or a label with
    /// nothing after it) means the recording is malformed and the run should
    /// not continue.
    pub fn field(&self, label: &str) -> Result<&str, RecordingError> {
        let start = self.raw.find(label).ok_or_else(|| RecordingError::MissingField {
            label: label.to_string(),
            line: self.line,
        })?;

        self.raw[start..]
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| RecordingError::MissingField {
                label: label.to_string(),
                line: self.line,
            })
    }

    /// Like [`FrameRecord::field`], but parses the token as a float.
    pub fn float_field(&self, label: &str) -> Result<f32, RecordingError> {
        self.field(label)?.parse().map_err(|_| RecordingError::InvalidField {
            label: label.to_string(),
            line: self.line,
        })
    }

    /// The actor's current animation/action state name.
    pub fn state_name(&self) -> Result<&str, RecordingError> {
        self.field(STATE_LABEL)
    }

    /// The actor's horizontal position.
    pub fn position(&self) -> Result<f32, RecordingError> {
        self.float_field(POSITION_LABEL)
    }

    /// The direction the actor faces, recorded as ±1.
    pub fn facing(&self) -> Result<f32, RecordingError> {
        self.float_field(FACING_LABEL)
    }
}

/// Both actors' records captured at the same timestep.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePair {
    /// Player 0 - the actor whose transitions are being tracked.
    pub player: FrameRecord,

    /// Player 1, carried for context and output only.
    pub opponent: FrameRecord,
}

impl FramePair {
    /// Zero-based index of the player line within the ghost log. Replay log
    /// lookups align on this value.
    pub fn line_index(&self) -> usize {
        self.player.line() - 1
    }
}

/// A fully loaded ghost recording, paired per timestep.
#[derive(Debug, Clone)]
pub struct GhostLog {
    pairs: Vec<FramePair>,
}

impl GhostLog {
    /// Reads a ghost file and pairs its lines. Propagates any read failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecordingError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let log = Self::from_lines(contents.lines())?;

        tracing::info!(path = %path.display(), timesteps = log.pairs.len(), "Loaded ghost log");

        Ok(log)
    }

    /// Pairs raw lines into timesteps: player 0 then player 1, strictly
    /// alternating. A trailing unpaired line means the recording was
    /// truncated mid-timestep and is treated as fatal.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self, RecordingError> {
        let mut pairs = Vec::new();
        let mut pending: Option<FrameRecord> = None;

        for (index, line) in lines.into_iter().enumerate() {
            let record = FrameRecord::new(line.trim(), index + 1);

            match pending.take() {
                None => pending = Some(record),

                Some(player) => pairs.push(FramePair {
                    player,
                    opponent: record,
                }),
            }
        }

        if let Some(record) = pending {
            return Err(RecordingError::UnpairedLine(record.line()));
        }

        Ok(Self { pairs })
    }

    /// The paired timesteps, in file order.
    pub fn pairs(&self) -> &[FramePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
