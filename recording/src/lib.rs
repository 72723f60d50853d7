//! Data models and parsing for the telemetry that the in-game ghost recorder
//! writes to disk: one free-form text line per actor per timestep, paired
//! into timesteps, plus the replay input log that is saved alongside a match
//! and lines up with it index-for-index.
//!
//! Nothing in here decides what a "transition" is - that lives a layer up in
//! the extractor. This crate only answers "what did the recorder say".

pub mod errors;

mod frame;
pub use frame::{FramePair, FrameRecord, GhostLog, FACING_LABEL, POSITION_LABEL, STATE_LABEL};

mod replay;
pub use replay::ReplayLog;
