use async_trait::async_trait;

use eardrill_audio::{NoteLength, PitchPlayer, PlaybackError};
use eardrill_domain::Pitch;

/// Prints each note instead of sounding it; stands in for a synth on hosts
/// without an audio device.
pub struct ConsolePlayer;

#[async_trait]
impl PitchPlayer for ConsolePlayer {
    async fn play_pitch(&self, pitch: &Pitch, length: NoteLength) -> Result<(), PlaybackError> {
        println!(
            "  ♪ {:<4} {:>7.2} Hz  {}",
            pitch.name(),
            pitch.frequency_hz(),
            length.token()
        );
        Ok(())
    }
}
