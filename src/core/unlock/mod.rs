//! Gated unlock flow for the hidden portfolio tile
//!
//! Purely local: no network, no persistence. A fresh [`SecretGate`] starts
//! locked; typing the secret sequence opens the five verification steps, and
//! passing those opens the riddles guarding the reward.

mod gate;
pub mod keystroke;
pub mod riddle;
pub mod verification;

#[cfg(test)]
mod tests;

pub use gate::{
    Feedback, GateSnapshot, GateState, GateView, REWARD, Reward, SecretGate, TransitionError,
    UnlockEvent, drive_loading,
};
pub use keystroke::{KeySequenceDetector, SECRET_SEQUENCE};
pub use riddle::{RIDDLES, Riddle, RiddleSequence};
pub use verification::{ChallengeView, Step};
