//! The transition detection engine: a single pass over a paired ghost
//! recording that writes an event block for every timestep where player 0
//! leaves a valid action-start state for a state worth reporting. Everything
//! a consumer needs to know about a match ends up being a short list of
//! these blocks instead of per-frame telemetry.

pub mod config;
pub mod errors;
pub mod geometry;
pub mod labels;

mod classifier;
pub use classifier::transition_fires;

mod emitter;
pub use emitter::{write_event, TransitionEvent};

use std::io::Write;

use ghost_recording::{FramePair, GhostLog};

use crate::config::DetectorConfig;
use crate::errors::ExtractorError;
use crate::labels::{LabelSource, StateChangeLabels};

/// Walks a ghost log and writes an event block for each detected action
/// transition.
///
/// The label source is injectable: the plain detector labels events with the
/// literal state change, while replay-annotated runs substitute the aligned
/// controller input. Both share this one pass.
#[derive(Debug)]
pub struct TransitionDetector {
    config: DetectorConfig,
    labels: Box<dyn LabelSource + Send + Sync>,
}

/// Walking state carried across timesteps. Exactly one timestep deep: the
/// previously seen pair and its player state name, nothing older.
#[derive(Debug, Default)]
struct Walker {
    prev_pair: Option<FramePair>,
    prev_state: String,
}

impl TransitionDetector {
    /// A detector over `config` that labels events with the literal state
    /// change.
    pub fn new(config: DetectorConfig) -> Self {
        Self::builder().with_config(config).build()
    }

    /// Builder for injecting a different label source.
    pub fn builder() -> TransitionDetectorBuilder {
        TransitionDetectorBuilder::default()
    }

    /// Runs the single detection pass, writing event blocks to `out` as they
    /// fire. Returns the number of events emitted.
    ///
    /// Output is a pure function of the log and this detector's
    /// configuration, so identical inputs produce byte-identical output, in
    /// timestep order. The pass stops at the first malformed line; anything
    /// already written stays written.
    pub fn run(&self, log: &GhostLog, out: &mut impl Write) -> Result<usize, ExtractorError> {
        let mut walker = Walker::default();
        let mut emitted = 0;

        for pair in log.pairs() {
            let curr_state = pair.player.state_name()?.to_string();

            // The opponent state isn't part of the decision, but a line
            // that can't produce one is still a malformed recording.
            pair.opponent.state_name()?;

            if let Some(before) = walker.prev_pair.as_ref() {
                if transition_fires(&walker.prev_state, &curr_state, &self.config) {
                    let label = self.labels.label(&walker.prev_state, &curr_state, pair)?;

                    emitter::write_event(out, &TransitionEvent { before, label: &label })?;
                    emitted += 1;

                    if self.config.log_relative_facing {
                        let direction = geometry::relative_facing(pair)?;

                        tracing::debug!(
                            direction,
                            from = %walker.prev_state,
                            to = %curr_state,
                            "Relative facing at transition"
                        );
                    }
                }
            }

            walker.prev_state = curr_state;
            walker.prev_pair = Some(pair.clone());
        }

        tracing::info!(emitted, timesteps = log.len(), "Finished transition pass");

        Ok(emitted)
    }
}

#[derive(Debug, Default)]
pub struct TransitionDetectorBuilder {
    config: Option<DetectorConfig>,
    labels: Option<Box<dyn LabelSource + Send + Sync>>,
}

impl TransitionDetectorBuilder {
    pub fn with_config(mut self, config: DetectorConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_labels(mut self, labels: impl LabelSource + Send + Sync + 'static) -> Self {
        self.labels = Some(Box::new(labels));
        self
    }

    pub fn build(self) -> TransitionDetector {
        TransitionDetector {
            config: self.config.unwrap_or_default(),
            labels: self.labels.unwrap_or_else(|| Box::new(StateChangeLabels)),
        }
    }
}
