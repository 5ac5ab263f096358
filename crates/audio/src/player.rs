use async_trait::async_trait;
use tracing::debug;

use eardrill_domain::Pitch;

use crate::error::PlaybackError;
use crate::plan::NoteLength;

/// Host capability that actually sounds a pitch.
///
/// Implementations decide how synthesis, device unlock and disposal work;
/// the future should resolve once the note has been started or scheduled.
#[async_trait]
pub trait PitchPlayer: Send + Sync {
    async fn play_pitch(&self, pitch: &Pitch, length: NoteLength) -> Result<(), PlaybackError>;
}

/// Silent player for headless runs.
pub struct NullPlayer;

#[async_trait]
impl PitchPlayer for NullPlayer {
    async fn play_pitch(&self, pitch: &Pitch, length: NoteLength) -> Result<(), PlaybackError> {
        debug!(pitch = %pitch, length = length.token(), "null player skipping note");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eardrill_domain::PitchAlphabet;

    #[tokio::test]
    async fn null_player_accepts_every_pitch() {
        let player = NullPlayer;
        for pitch in PitchAlphabet::STANDARD.iter() {
            player.play_pitch(&pitch, NoteLength::Eighth).await.unwrap();
        }
    }
}
