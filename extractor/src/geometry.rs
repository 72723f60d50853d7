//! Derived positional signal computed at transition time.

use ghost_recording::FramePair;

use crate::errors::ExtractorError;

/// `sign(opponent x - player x) * player facing`: positive when the player
/// faces the opponent, negative when facing away, and `0.0` when the two
/// share an x coordinate.
///
/// This is a diagnostic value only - it's logged by replay-annotated runs
/// but never appears in emitted blocks.
pub fn relative_facing(pair: &FramePair) -> Result<f32, ExtractorError> {
    let player_x = pair.player.position()?;
    let opponent_x = pair.opponent.position()?;
    let facing = pair.player.facing()?;

    let gap = opponent_x - player_x;
    if gap == 0.0 {
        return Ok(0.0);
    }

    Ok(gap.signum() * facing)
}
