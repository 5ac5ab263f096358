use serde::{Deserialize, Serialize};

use eardrill_audio::{NoteLength, PlaybackPlan};

use crate::challenge::Challenge;

/// Onset gaps used when turning a challenge into a playback plan.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlaybackConfig {
    pub interval_gap_ms: u64,
    pub chord_stagger_ms: u64,
    pub scale_stagger_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_gap_ms: 250,
            chord_stagger_ms: 120,
            scale_stagger_ms: 80,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PlaybackSequencer {
    config: PlaybackConfig,
}

impl PlaybackSequencer {
    pub fn new(config: PlaybackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> PlaybackConfig {
        self.config
    }

    /// Chords are arpeggiated so each tone can be heard on its own.
    pub fn plan(&self, challenge: &Challenge) -> PlaybackPlan {
        match challenge {
            Challenge::Interval { root, second, .. } => PlaybackPlan::staggered(
                &[*root, *second],
                self.config.interval_gap_ms,
                NoteLength::Eighth,
            ),
            Challenge::Chord { notes, .. } => {
                PlaybackPlan::staggered(notes, self.config.chord_stagger_ms, NoteLength::Eighth)
            }
            Challenge::Scale { notes, .. } => {
                PlaybackPlan::staggered(notes, self.config.scale_stagger_ms, NoteLength::Sixteenth)
            }
        }
    }
}
