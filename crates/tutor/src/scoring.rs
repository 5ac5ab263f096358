use serde::{Deserialize, Serialize};

/// Running tally for a practice session; `correct <= total` always holds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn record(self, is_correct: bool) -> Self {
        Self {
            correct: self.correct + u32::from(is_correct),
            total: self.total + 1,
        }
    }

    /// Fraction answered correctly, 0 before any answer.
    pub fn accuracy(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f32 / self.total as f32
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    score: Score,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn record(&mut self, is_correct: bool) -> Score {
        self.score = self.score.record(is_correct);
        self.score
    }

    pub fn reset(&mut self) -> Score {
        self.score = Score::empty();
        self.score
    }
}
