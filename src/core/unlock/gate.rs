//! The secret tile's state machine

use super::keystroke::{KeySequenceDetector, LOCKED_HINT};
use super::riddle::{RIDDLES, RiddleOutcome, RiddleSequence, WRONG_ANSWER};
use super::verification::{Challenge, ChallengeView, Gauntlet, STEP_COUNT, Step};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Where the visitor is in the unlock flow
#[derive(Debug, Clone)]
pub enum GateState {
    Locked(KeySequenceDetector),
    Verifying(Gauntlet),
    Riddles(RiddleSequence),
    Solved,
}

impl GateState {
    pub fn name(&self) -> &'static str {
        match self {
            GateState::Locked(_) => "locked",
            GateState::Verifying(_) => "verifying",
            GateState::Riddles(_) => "riddles",
            GateState::Solved => "solved",
        }
    }
}

/// Discrete user or timer input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockEvent {
    KeyDown(String),
    ToggleTerm(usize),
    AcceptTerms,
    ToggleCell(usize),
    SubmitGrid,
    SubmitCaptcha(String),
    RefreshCaptcha,
    RequestEmailCode(String),
    SubmitEmailCode(String),
    ChangeEmail,
    LoadingTick,
    SubmitRiddle(String),
}

impl UnlockEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UnlockEvent::KeyDown(_) => "KeyDown",
            UnlockEvent::ToggleTerm(_) => "ToggleTerm",
            UnlockEvent::AcceptTerms => "AcceptTerms",
            UnlockEvent::ToggleCell(_) => "ToggleCell",
            UnlockEvent::SubmitGrid => "SubmitGrid",
            UnlockEvent::SubmitCaptcha(_) => "SubmitCaptcha",
            UnlockEvent::RefreshCaptcha => "RefreshCaptcha",
            UnlockEvent::RequestEmailCode(_) => "RequestEmailCode",
            UnlockEvent::SubmitEmailCode(_) => "SubmitEmailCode",
            UnlockEvent::ChangeEmail => "ChangeEmail",
            UnlockEvent::LoadingTick => "LoadingTick",
            UnlockEvent::SubmitRiddle(_) => "SubmitRiddle",
        }
    }
}

/// What an accepted event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Input stored, nothing visible changed stage
    Recorded,
    /// Wrong attempt; show `message` and clear the field when `clear_input`
    Incorrect { message: String, clear_input: bool },
    /// The current challenge moved to its next phase
    Progressed,
    /// The keystroke sequence matched
    Unlocked,
    /// A verification step passed; `stage` is the zero-based step now shown
    StageCleared { stage: usize },
    /// All verification steps passed, riddles are next
    Verified,
    /// Riddle answered; `step` is the zero-based riddle now shown
    NextRiddle { step: usize },
    Solved,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{event} is not accepted while {state}")]
    NotAccepted {
        event: &'static str,
        state: &'static str,
    },

    #[error("{event} index {index} is out of range")]
    OutOfRange { event: &'static str, index: usize },
}

impl TransitionError {
    fn not_accepted(event: &UnlockEvent, state: &'static str) -> Self {
        Self::NotAccepted {
            event: event.name(),
            state,
        }
    }
}

/// Static payload shown once everything is solved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub title: &'static str,
    pub message: &'static str,
    pub link: &'static str,
}

pub const REWARD: Reward = Reward {
    title: "You Found My Secret!",
    message: "Congratulations on unlocking this hidden component! You've discovered that I never give up on you, and I'll never let you down.",
    link: "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
};

/// Which subtree to render, derived only from the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateView {
    Locked {
        hint: &'static str,
    },
    Verification {
        /// One-based step number
        step: usize,
        total: usize,
        challenge: ChallengeView,
    },
    Riddle {
        /// One-based riddle number
        number: usize,
        total: usize,
        question: &'static str,
        hint: Option<&'static str>,
        error: Option<&'static str>,
    },
    Reward(Reward),
}

/// Flag view of the state for callers that think in booleans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateSnapshot {
    pub component_locked: bool,
    pub verification_stage: usize,
    pub fully_verified: bool,
    pub riddle_step: usize,
    pub riddle_solved: bool,
}

type Transition = (Feedback, Option<GateState>);

/// Gated unlock flow: keystrokes, then five verification steps, then riddles
///
/// Each state accepts only its own events; anything else is refused with
/// [`TransitionError`] and leaves the state untouched.
#[derive(Debug, Clone)]
pub struct SecretGate<R = StdRng> {
    state: GateState,
    rng: R,
}

impl SecretGate<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for SecretGate<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SecretGate<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: GateState::Locked(KeySequenceDetector::default()),
            rng,
        }
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.state, GateState::Solved)
    }

    pub fn apply(&mut self, event: UnlockEvent) -> Result<Feedback, TransitionError> {
        let (feedback, next) = match &mut self.state {
            GateState::Locked(detector) => Self::on_locked(detector, event)?,
            GateState::Verifying(gauntlet) => Self::on_verifying(gauntlet, event, &mut self.rng)?,
            GateState::Riddles(riddles) => Self::on_riddle(riddles, event)?,
            GateState::Solved => return Err(TransitionError::not_accepted(&event, "solved")),
        };

        if let Some(next) = next {
            info!("Secret gate: {} -> {}", self.state.name(), next.name());
            self.state = next;
        }
        Ok(feedback)
    }

    fn on_locked(
        detector: &mut KeySequenceDetector,
        event: UnlockEvent,
    ) -> Result<Transition, TransitionError> {
        let UnlockEvent::KeyDown(key) = event else {
            return Err(TransitionError::not_accepted(&event, "locked"));
        };

        if detector.push(&key) {
            Ok((
                Feedback::Unlocked,
                Some(GateState::Verifying(Gauntlet::new())),
            ))
        } else {
            Ok((Feedback::Recorded, None))
        }
    }

    fn on_verifying(
        gauntlet: &mut Gauntlet,
        event: UnlockEvent,
        rng: &mut R,
    ) -> Result<Transition, TransitionError> {
        let out_of_range = |index| TransitionError::OutOfRange {
            event: event.name(),
            index,
        };

        let step = match (gauntlet.challenge_mut(), &event) {
            (Challenge::Terms(terms), UnlockEvent::ToggleTerm(i)) => {
                terms.toggle(*i).ok_or_else(|| out_of_range(*i))?
            }
            (Challenge::Terms(terms), UnlockEvent::AcceptTerms) => terms.submit(),
            (Challenge::ImageGrid(grid), UnlockEvent::ToggleCell(i)) => {
                grid.toggle(*i).ok_or_else(|| out_of_range(*i))?
            }
            (Challenge::ImageGrid(grid), UnlockEvent::SubmitGrid) => grid.submit(),
            (Challenge::Text(captcha), UnlockEvent::SubmitCaptcha(input)) => {
                captcha.submit(input, rng)
            }
            (Challenge::Text(captcha), UnlockEvent::RefreshCaptcha) => captcha.refresh(rng),
            (Challenge::Email(email), UnlockEvent::RequestEmailCode(address)) => email
                .request_code(address, rng)
                .ok_or_else(|| TransitionError::not_accepted(&event, "a code is already sent"))?,
            (Challenge::Email(email), UnlockEvent::SubmitEmailCode(code)) => email
                .submit_code(code)
                .ok_or_else(|| TransitionError::not_accepted(&event, "no code is sent"))?,
            (Challenge::Email(email), UnlockEvent::ChangeEmail) => email
                .change_email()
                .ok_or_else(|| TransitionError::not_accepted(&event, "no code is sent"))?,
            (Challenge::Loading(loading), UnlockEvent::LoadingTick) => loading.tick(rng),
            (challenge, _) => {
                return Err(TransitionError::not_accepted(&event, challenge.name()));
            }
        };

        Ok(match step {
            Step::Recorded => (Feedback::Recorded, None),
            Step::Progressed => (Feedback::Progressed, None),
            Step::Incorrect {
                message,
                clear_input,
            } => (
                Feedback::Incorrect {
                    message,
                    clear_input,
                },
                None,
            ),
            Step::Passed => {
                if gauntlet.advance(rng) {
                    debug!("Verification step {} of {}", gauntlet.stage() + 1, STEP_COUNT);
                    (
                        Feedback::StageCleared {
                            stage: gauntlet.stage(),
                        },
                        None,
                    )
                } else {
                    (
                        Feedback::Verified,
                        Some(GateState::Riddles(RiddleSequence::new())),
                    )
                }
            }
        })
    }

    fn on_riddle(
        riddles: &mut RiddleSequence,
        event: UnlockEvent,
    ) -> Result<Transition, TransitionError> {
        let UnlockEvent::SubmitRiddle(answer) = event else {
            return Err(TransitionError::not_accepted(&event, "riddles"));
        };

        Ok(match riddles.submit(&answer) {
            RiddleOutcome::Wrong => (
                Feedback::Incorrect {
                    message: WRONG_ANSWER.to_string(),
                    clear_input: true,
                },
                None,
            ),
            RiddleOutcome::Next(step) => (Feedback::NextRiddle { step }, None),
            RiddleOutcome::Solved => (Feedback::Solved, Some(GateState::Solved)),
        })
    }

    /// Delay before the next [`UnlockEvent::LoadingTick`], if loading is on screen
    pub fn next_loading_delay(&mut self) -> Option<Duration> {
        match &self.state {
            GateState::Verifying(gauntlet) => match gauntlet.challenge() {
                Challenge::Loading(loading) => Some(loading.next_delay(&mut self.rng)),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn view(&self) -> GateView {
        match &self.state {
            GateState::Locked(_) => GateView::Locked { hint: LOCKED_HINT },
            GateState::Verifying(gauntlet) => GateView::Verification {
                step: gauntlet.stage() + 1,
                total: STEP_COUNT,
                challenge: gauntlet.challenge().view(),
            },
            GateState::Riddles(riddles) => GateView::Riddle {
                number: riddles.step() + 1,
                total: RIDDLES.len(),
                question: riddles.current().question,
                hint: riddles.visible_hint(),
                error: riddles.has_error().then_some(WRONG_ANSWER),
            },
            GateState::Solved => GateView::Reward(REWARD),
        }
    }

    pub fn snapshot(&self) -> GateSnapshot {
        let last_stage = STEP_COUNT - 1;
        let last_riddle = RIDDLES.len() - 1;
        match &self.state {
            GateState::Locked(_) => GateSnapshot {
                component_locked: true,
                verification_stage: 0,
                fully_verified: false,
                riddle_step: 0,
                riddle_solved: false,
            },
            GateState::Verifying(gauntlet) => GateSnapshot {
                component_locked: false,
                verification_stage: gauntlet.stage(),
                fully_verified: false,
                riddle_step: 0,
                riddle_solved: false,
            },
            GateState::Riddles(riddles) => GateSnapshot {
                component_locked: false,
                verification_stage: last_stage,
                fully_verified: true,
                riddle_step: riddles.step(),
                riddle_solved: false,
            },
            GateState::Solved => GateSnapshot {
                component_locked: false,
                verification_stage: last_stage,
                fully_verified: true,
                riddle_step: last_riddle,
                riddle_solved: true,
            },
        }
    }
}

/// Tick the loading step on its own schedule until it completes
///
/// Returns immediately when loading is not on screen. Dropping the future
/// cancels the pending tick.
pub async fn drive_loading<R: Rng>(gate: &mut SecretGate<R>) -> Result<Feedback, TransitionError> {
    let mut last = Feedback::Recorded;
    while let Some(delay) = gate.next_loading_delay() {
        tokio::time::sleep(delay).await;
        last = gate.apply(UnlockEvent::LoadingTick)?;
    }
    Ok(last)
}
