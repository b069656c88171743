//! Simulated email verification
//!
//! Nothing is sent: the generated code is shown in an inline preview of the
//! email that would have been delivered.

use super::Step;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

pub const SENDER: &str = "security@secret-component.dev";
pub const SUBJECT: &str = "Your Secret Component Verification Code";
const CODE_LENGTH: usize = 4;

const EMAIL_REQUIRED: &str = "Email is required";
const EMAIL_INVALID: &str = "Please enter a valid email address";
const CODE_INCORRECT: &str = "Incorrect code. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPreview {
    pub from: &'static str,
    pub to: String,
    pub subject: &'static str,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailView {
    Entry { error: Option<&'static str> },
    CodeSent { preview: EmailPreview, error: Option<&'static str> },
}

#[derive(Debug, Clone)]
enum Phase {
    Entry { error: Option<&'static str> },
    CodeSent { email: String, code: String, error: bool },
}

#[derive(Debug, Clone)]
pub struct EmailVerification {
    phase: Phase,
}

impl Default for EmailVerification {
    fn default() -> Self {
        Self {
            phase: Phase::Entry { error: None },
        }
    }
}

impl EmailVerification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_code_sent(&self) -> bool {
        matches!(self.phase, Phase::CodeSent { .. })
    }

    /// Validate the address and "send" a fresh 4-digit code
    ///
    /// `None` if a code was already sent for this attempt.
    pub fn request_code<R: Rng + ?Sized>(&mut self, email: &str, rng: &mut R) -> Option<Step> {
        let Phase::Entry { error } = &mut self.phase else {
            return None;
        };

        let email = email.trim();
        let problem = if email.is_empty() {
            Some(EMAIL_REQUIRED)
        } else if !is_valid_email(email) {
            Some(EMAIL_INVALID)
        } else {
            None
        };

        if let Some(message) = problem {
            *error = Some(message);
            return Some(Step::Incorrect {
                message: message.to_string(),
                clear_input: false,
            });
        }

        self.phase = Phase::CodeSent {
            email: email.to_string(),
            code: rng.gen_range(1000..=9999).to_string(),
            error: false,
        };
        Some(Step::Progressed)
    }

    /// Check a typed code; non-digits are dropped and only four are kept
    pub fn submit_code(&mut self, input: &str) -> Option<Step> {
        let Phase::CodeSent { code, error, .. } = &mut self.phase else {
            return None;
        };

        let typed: String = input
            .chars()
            .filter(char::is_ascii_digit)
            .take(CODE_LENGTH)
            .collect();
        if typed == *code {
            return Some(Step::Passed);
        }

        *error = true;
        Some(Step::Incorrect {
            message: CODE_INCORRECT.to_string(),
            clear_input: true,
        })
    }

    /// Go back to address entry, dropping the sent code
    pub fn change_email(&mut self) -> Option<Step> {
        if !self.is_code_sent() {
            return None;
        }
        self.phase = Phase::Entry { error: None };
        Some(Step::Recorded)
    }

    pub fn view(&self) -> EmailView {
        match &self.phase {
            Phase::Entry { error } => EmailView::Entry { error: *error },
            Phase::CodeSent { email, code, error } => EmailView::CodeSent {
                preview: EmailPreview {
                    from: SENDER,
                    to: email.clone(),
                    subject: SUBJECT,
                    code: code.clone(),
                },
                error: error.then_some(CODE_INCORRECT),
            },
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(&email.to_lowercase())
}
