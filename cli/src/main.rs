//! Command line front end for the transition extractor.
//!
//! One positional argument runs the plain detector over a ghost log; adding
//! a replay log switches to annotated output, where each event block carries
//! the controller input recorded at the transition instead of the literal
//! state change. Blocks go to stdout, diagnostics to stderr.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ghost_extractor::config::{ActionFrameSet, DetectorConfig, IgnoreFrameSet};
use ghost_extractor::errors::ExtractorError;
use ghost_extractor::labels::ReplayCommandLabels;
use ghost_extractor::TransitionDetector;
use ghost_recording::{GhostLog, ReplayLog};

// Plain and annotated runs look for the side file in different places by
// default; `--action-frames` overrides either.
const GHOST_ACTION_FRAMES: &str = "trainingdata/actionframes.txt";
const REPLAY_ACTION_FRAMES: &str = "actionframes.txt";

#[derive(Debug, Parser)]
#[command(name = "ghost-extract", about = "Extracts action transitions from a ghost recording.")]
struct Args {
    /// Path to the ghost recording (two lines per timestep).
    ghost_log: PathBuf,

    /// Optional replay input log aligned to the ghost recording; when
    /// present, events are labeled with the recorded controller input.
    replay_log: Option<PathBuf>,

    /// Overrides the action frames side file.
    #[arg(long)]
    action_frames: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,

        Err(error) => {
            tracing::error!(%error, "Extraction failed");
            ExitCode::FAILURE
        },
    }
}

fn run(args: Args) -> Result<(), ExtractorError> {
    let ghost = GhostLog::load(&args.ghost_log)?;

    let default_side_file = match args.replay_log {
        Some(_) => REPLAY_ACTION_FRAMES,
        None => GHOST_ACTION_FRAMES,
    };
    let side_file = args.action_frames.unwrap_or_else(|| PathBuf::from(default_side_file));
    let action_frames = ActionFrameSet::load(side_file)?;

    let detector = match args.replay_log {
        Some(replay_path) => {
            let replay = ReplayLog::load(replay_path)?;

            TransitionDetector::builder()
                .with_config(DetectorConfig {
                    action_frames,
                    ignore_frames: IgnoreFrameSet::replay_default(),
                    log_relative_facing: true,
                })
                .with_labels(ReplayCommandLabels::new(replay))
                .build()
        },

        None => TransitionDetector::new(DetectorConfig {
            action_frames,
            ignore_frames: IgnoreFrameSet::ghost_default(),
            log_relative_facing: false,
        }),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    detector.run(&ghost, &mut out)?;
    out.flush().map_err(ExtractorError::Emit)?;

    Ok(())
}
