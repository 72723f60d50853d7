//! Event block output.

use std::io::Write;

use ghost_recording::FramePair;

use crate::errors::ExtractorError;

/// One detected transition: the pair from the timestep *before* the change
/// (the state the action started from), plus the label describing what it
/// became.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionEvent<'a> {
    pub before: &'a FramePair,
    pub label: &'a str,
}

/// Writes one event block: both raw lines from the prior timestep, the
/// label, then a blank separator line. Streaming - one block per call, no
/// buffering beyond what the writer does itself.
pub fn write_event(out: &mut impl Write, event: &TransitionEvent<'_>) -> Result<(), ExtractorError> {
    writeln!(out, "{}", event.before.player.raw()).map_err(ExtractorError::Emit)?;
    writeln!(out, "{}", event.before.opponent.raw()).map_err(ExtractorError::Emit)?;
    writeln!(out, "{}", event.label).map_err(ExtractorError::Emit)?;
    writeln!(out).map_err(ExtractorError::Emit)?;

    Ok(())
}
