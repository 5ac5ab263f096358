use std::time::Duration;

use serde::{Deserialize, Serialize};

use eardrill_domain::Pitch;

/// Note length handed to the player, expressed as a note-value token.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NoteLength {
    Eighth,
    Sixteenth,
}

impl NoteLength {
    pub fn token(self) -> &'static str {
        match self {
            NoteLength::Eighth => "8n",
            NoteLength::Sixteenth => "16n",
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PlaybackStep {
    pub pitch: Pitch,
    /// Gap between this note's onset and the next one.
    pub delay_after_ms: u64,
    pub length: NoteLength,
}

impl PlaybackStep {
    pub fn new(pitch: Pitch, delay_after_ms: u64, length: NoteLength) -> Self {
        Self {
            pitch,
            delay_after_ms,
            length,
        }
    }

    pub fn delay_after(&self) -> Duration {
        Duration::from_millis(self.delay_after_ms)
    }
}

/// Ordered description of what to play and when. Carries no audio itself.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct PlaybackPlan {
    steps: Vec<PlaybackStep>,
}

impl PlaybackPlan {
    pub fn new(steps: Vec<PlaybackStep>) -> Self {
        Self { steps }
    }

    /// Plays `pitches` in order, `stagger_ms` apart. The final note has no
    /// trailing gap.
    pub fn staggered(pitches: &[Pitch], stagger_ms: u64, length: NoteLength) -> Self {
        let last = pitches.len().saturating_sub(1);
        Self::new(
            pitches
                .iter()
                .enumerate()
                .map(|(index, pitch)| {
                    let delay = if index == last { 0 } else { stagger_ms };
                    PlaybackStep::new(*pitch, delay, length)
                })
                .collect(),
        )
    }

    pub fn steps(&self) -> &[PlaybackStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
