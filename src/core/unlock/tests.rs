//! Tests for the unlock flow

use super::verification::{ChallengeView, EmailView};
use super::*;
use crate::core::chat::HIDDEN_VERIFICATION_CODE;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded_gate() -> SecretGate<StdRng> {
    SecretGate::with_rng(StdRng::seed_from_u64(2024))
}

fn type_keys(gate: &mut SecretGate<StdRng>, keys: &[&str]) -> Feedback {
    let mut last = Feedback::Recorded;
    for key in keys {
        last = gate.apply(UnlockEvent::KeyDown(key.to_string())).unwrap();
    }
    last
}

fn pass_terms(gate: &mut SecretGate<StdRng>) {
    for _ in 0..3 {
        if let GateView::Verification {
            challenge: ChallengeView::Terms { terms, .. },
            ..
        } = gate.view()
        {
            for (i, term) in terms.iter().enumerate() {
                if !term.accepted {
                    gate.apply(UnlockEvent::ToggleTerm(i)).unwrap();
                }
            }
        }
        gate.apply(UnlockEvent::AcceptTerms).unwrap();
    }
}

fn pass_grid(gate: &mut SecretGate<StdRng>) {
    for cells in [[2, 4, 6, 7], [1, 3, 5, 8]] {
        for cell in cells {
            gate.apply(UnlockEvent::ToggleCell(cell)).unwrap();
        }
        gate.apply(UnlockEvent::SubmitGrid).unwrap();
    }
}

fn pass_text_captcha(gate: &mut SecretGate<StdRng>) {
    let code = match gate.view() {
        GateView::Verification {
            challenge: ChallengeView::Text(view),
            ..
        } => view.code.unwrap(),
        other => panic!("expected text captcha, got {:?}", other),
    };
    assert_eq!(
        gate.apply(UnlockEvent::SubmitCaptcha(code)).unwrap(),
        Feedback::Progressed
    );
    gate.apply(UnlockEvent::SubmitCaptcha(HIDDEN_VERIFICATION_CODE.to_string()))
        .unwrap();
}

fn pass_email(gate: &mut SecretGate<StdRng>) {
    gate.apply(UnlockEvent::RequestEmailCode("visitor@example.com".to_string()))
        .unwrap();
    let code = match gate.view() {
        GateView::Verification {
            challenge: ChallengeView::Email(EmailView::CodeSent { preview, .. }),
            ..
        } => preview.code,
        other => panic!("expected sent email, got {:?}", other),
    };
    gate.apply(UnlockEvent::SubmitEmailCode(code)).unwrap();
}

fn verified_gate() -> SecretGate<StdRng> {
    let mut gate = seeded_gate();
    type_keys(&mut gate, &SECRET_SEQUENCE);
    pass_terms(&mut gate);
    pass_grid(&mut gate);
    pass_text_captcha(&mut gate);
    pass_email(&mut gate);
    let mut last = Feedback::Recorded;
    while gate.next_loading_delay().is_some() {
        last = gate.apply(UnlockEvent::LoadingTick).unwrap();
    }
    assert_eq!(last, Feedback::Verified);
    gate
}

#[test]
fn test_starts_locked() {
    let gate = seeded_gate();
    assert!(gate.snapshot().component_locked);
    assert!(matches!(gate.view(), GateView::Locked { .. }));
}

#[test]
fn test_wrong_sequences_stay_locked() {
    let mut gate = seeded_gate();
    for attempt in [
        ["h", "e", "s", "o", "y", "a", "n"],
        ["m", "a", "y", "o", "s", "e", "h"],
        ["h", "e", "s", "o", "y", "a", "M"],
    ] {
        assert_eq!(type_keys(&mut gate, &attempt), Feedback::Recorded);
        assert!(gate.snapshot().component_locked);
    }
}

#[test]
fn test_sequence_after_noise_unlocks() {
    let mut gate = seeded_gate();
    type_keys(&mut gate, &["a", "b", "h", "e", "Enter"]);
    assert_eq!(type_keys(&mut gate, &SECRET_SEQUENCE), Feedback::Unlocked);

    let snapshot = gate.snapshot();
    assert!(!snapshot.component_locked);
    assert_eq!(snapshot.verification_stage, 0);
    assert!(!snapshot.fully_verified);
}

#[test]
fn test_events_for_other_states_are_rejected() {
    let mut gate = seeded_gate();
    assert_eq!(
        gate.apply(UnlockEvent::SubmitRiddle("never".to_string())),
        Err(TransitionError::NotAccepted {
            event: "SubmitRiddle",
            state: "locked",
        })
    );

    type_keys(&mut gate, &SECRET_SEQUENCE);
    assert!(gate.apply(UnlockEvent::KeyDown("h".to_string())).is_err());
    assert!(gate.apply(UnlockEvent::SubmitGrid).is_err());
    assert!(gate.apply(UnlockEvent::LoadingTick).is_err());
    assert_eq!(
        gate.apply(UnlockEvent::ToggleTerm(7)),
        Err(TransitionError::OutOfRange {
            event: "ToggleTerm",
            index: 7,
        })
    );
    assert_eq!(gate.snapshot().verification_stage, 0);
}

#[test]
fn test_stages_advance_in_order() {
    let mut gate = seeded_gate();
    type_keys(&mut gate, &SECRET_SEQUENCE);

    pass_terms(&mut gate);
    assert_eq!(gate.snapshot().verification_stage, 1);
    pass_grid(&mut gate);
    assert_eq!(gate.snapshot().verification_stage, 2);
    pass_text_captcha(&mut gate);
    assert_eq!(gate.snapshot().verification_stage, 3);
    pass_email(&mut gate);
    assert_eq!(gate.snapshot().verification_stage, 4);
    assert!(gate.next_loading_delay().is_some());
}

#[test]
fn test_hidden_captcha_code_never_shown() {
    let mut gate = seeded_gate();
    type_keys(&mut gate, &SECRET_SEQUENCE);
    pass_terms(&mut gate);
    pass_grid(&mut gate);

    let code = match gate.view() {
        GateView::Verification {
            challenge: ChallengeView::Text(view),
            ..
        } => view.code.unwrap(),
        _ => unreachable!(),
    };
    gate.apply(UnlockEvent::SubmitCaptcha(code)).unwrap();

    let rendered = format!("{:?}", gate.view());
    assert!(!rendered.contains(HIDDEN_VERIFICATION_CODE));
}

#[test]
fn test_riddles_follow_verification() {
    let mut gate = verified_gate();
    let snapshot = gate.snapshot();
    assert!(snapshot.fully_verified);
    assert_eq!(snapshot.riddle_step, 0);

    let feedback = gate.apply(UnlockEvent::SubmitRiddle("forever".to_string())).unwrap();
    assert!(matches!(feedback, Feedback::Incorrect { clear_input: true, .. }));
    assert_eq!(gate.snapshot().riddle_step, 0);
    match gate.view() {
        GateView::Riddle { hint, number, .. } => {
            assert_eq!(number, 1);
            assert_eq!(hint, Some(RIDDLES[0].hint));
        }
        other => panic!("expected riddle, got {:?}", other),
    }

    for (i, answer) in [" NEVER", "Gonna ", "give", "YOU"].iter().enumerate() {
        assert_eq!(
            gate.apply(UnlockEvent::SubmitRiddle(answer.to_string())).unwrap(),
            Feedback::NextRiddle { step: i + 1 }
        );
    }

    assert!(gate.apply(UnlockEvent::SubmitRiddle("down".to_string())).is_ok());
    assert_eq!(gate.snapshot().riddle_step, 4);
    assert!(!gate.snapshot().riddle_solved);

    assert_eq!(
        gate.apply(UnlockEvent::SubmitRiddle("up".to_string())).unwrap(),
        Feedback::Solved
    );
    assert!(gate.is_solved());
    assert!(gate.snapshot().riddle_solved);
    assert_eq!(gate.view(), GateView::Reward(REWARD));
}

#[test]
fn test_solved_is_terminal() {
    let mut gate = verified_gate();
    for riddle in RIDDLES {
        gate.apply(UnlockEvent::SubmitRiddle(riddle.answer.to_string()))
            .unwrap();
    }
    assert!(gate.apply(UnlockEvent::SubmitRiddle("up".to_string())).is_err());
    assert!(gate.apply(UnlockEvent::KeyDown("h".to_string())).is_err());
    assert!(gate.is_solved());
}

#[tokio::test(start_paused = true)]
async fn test_drive_loading_completes_verification() {
    let mut gate = seeded_gate();
    type_keys(&mut gate, &SECRET_SEQUENCE);
    pass_terms(&mut gate);
    pass_grid(&mut gate);
    pass_text_captcha(&mut gate);
    pass_email(&mut gate);

    let started = tokio::time::Instant::now();
    let last = drive_loading(&mut gate).await.unwrap();
    assert_eq!(last, Feedback::Verified);
    assert!(started.elapsed() >= std::time::Duration::from_secs(4));
    assert!(gate.snapshot().fully_verified);

    // nothing left to drive
    assert_eq!(drive_loading(&mut gate).await.unwrap(), Feedback::Recorded);
}
