pub mod chord;
pub mod error;
pub mod interval;
pub mod pitch;
pub mod random;
pub mod scale;

pub use crate::chord::ChordType;
pub use crate::error::DomainError;
pub use crate::interval::IntervalLabel;
pub use crate::pitch::{midi_from_name, Pitch, PitchAlphabet, PITCH_CLASS_NAMES};
pub use crate::random::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use crate::scale::ScaleType;
