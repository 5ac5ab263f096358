pub mod error;
pub mod executor;
pub mod plan;
pub mod player;

pub use error::PlaybackError;
pub use executor::{execute_plan, CancelHandle, PlaybackOutcome, PlaybackRunner};
pub use plan::{NoteLength, PlaybackPlan, PlaybackStep};
pub use player::{NullPlayer, PitchPlayer};
