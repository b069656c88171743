//! The five-step verification gauntlet
//!
//! Steps run in a fixed order and each must pass before the next is built.
//! Failures never leave the current step.

pub mod email;
pub mod image_captcha;
pub mod loading;
pub mod terms;
pub mod text_captcha;

pub use email::{EmailPreview, EmailVerification, EmailView};
pub use image_captcha::{ImageCaptcha, StackRound};
pub use loading::{LoadingVerification, LoadingView};
pub use terms::{TermView, TermsOfService};
pub use text_captcha::{CaptchaPhase, TextCaptcha, TextCaptchaView};

use rand::Rng;

/// Number of verification steps
pub const STEP_COUNT: usize = 5;

/// What one input did to a sub-challenge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Input stored, no verdict yet
    Recorded,
    /// Wrong attempt; the caller shows `message` and clears its field if asked
    Incorrect { message: String, clear_input: bool },
    /// Moved to the next phase of the same challenge
    Progressed,
    Passed,
}

/// The challenge currently on screen
#[derive(Debug, Clone)]
pub enum Challenge {
    Terms(TermsOfService),
    ImageGrid(ImageCaptcha),
    Text(TextCaptcha),
    Email(EmailVerification),
    Loading(LoadingVerification),
}

impl Challenge {
    /// Build the challenge for zero-based step `index`
    fn for_step<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Option<Self> {
        Some(match index {
            0 => Challenge::Terms(TermsOfService::new()),
            1 => Challenge::ImageGrid(ImageCaptcha::new()),
            2 => Challenge::Text(TextCaptcha::new(rng)),
            3 => Challenge::Email(EmailVerification::new()),
            4 => Challenge::Loading(LoadingVerification::new()),
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Challenge::Terms(_) => "terms of service",
            Challenge::ImageGrid(_) => "image captcha",
            Challenge::Text(_) => "text captcha",
            Challenge::Email(_) => "email verification",
            Challenge::Loading(_) => "loading",
        }
    }

    pub fn view(&self) -> ChallengeView {
        match self {
            Challenge::Terms(terms) => ChallengeView::Terms {
                terms: terms.terms(),
                error: terms.error_message(),
            },
            Challenge::ImageGrid(grid) => ChallengeView::ImageGrid {
                prompt: grid.prompt(),
                icons: &image_captcha::ICONS,
                selected: grid.selected(),
                error: grid.error_message(),
            },
            Challenge::Text(captcha) => ChallengeView::Text(captcha.view()),
            Challenge::Email(email) => ChallengeView::Email(email.view()),
            Challenge::Loading(loading) => ChallengeView::Loading(loading.view()),
        }
    }
}

/// Render data for the current challenge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeView {
    Terms {
        terms: Vec<TermView>,
        error: Option<&'static str>,
    },
    ImageGrid {
        prompt: String,
        icons: &'static [&'static str],
        selected: Vec<usize>,
        error: Option<String>,
    },
    Text(TextCaptchaView),
    Email(EmailView),
    Loading(LoadingView),
}

/// Current step index plus its live challenge
#[derive(Debug, Clone)]
pub struct Gauntlet {
    stage: usize,
    challenge: Challenge,
}

impl Gauntlet {
    pub fn new() -> Self {
        Self {
            stage: 0,
            challenge: Challenge::Terms(TermsOfService::new()),
        }
    }

    /// Zero-based index of the step on screen
    pub fn stage(&self) -> usize {
        self.stage
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn challenge_mut(&mut self) -> &mut Challenge {
        &mut self.challenge
    }

    /// Move past a passed step; `false` once every step is done
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        match Challenge::for_step(self.stage + 1, rng) {
            Some(next) => {
                self.stage += 1;
                self.challenge = next;
                true
            }
            None => false,
        }
    }
}

impl Default for Gauntlet {
    fn default() -> Self {
        Self::new()
    }
}
