//! Drivers for the unlock flow

use bento_gateway::core::chat::HIDDEN_VERIFICATION_CODE;
use bento_gateway::core::unlock::verification::EmailView;
use bento_gateway::core::unlock::{
    ChallengeView, Feedback, GateView, RIDDLES, SECRET_SEQUENCE, SecretGate, UnlockEvent,
    drive_loading,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn verification_challenge(gate: &SecretGate<StdRng>) -> ChallengeView {
    match gate.view() {
        GateView::Verification { challenge, .. } => challenge,
        other => panic!("expected a verification step, got {:?}", other),
    }
}

/// A gate that has passed every verification step and shows the first riddle
pub async fn verified_gate(seed: u64) -> SecretGate<StdRng> {
    let mut gate = SecretGate::with_rng(StdRng::seed_from_u64(seed));

    for key in SECRET_SEQUENCE {
        gate.apply(UnlockEvent::KeyDown(key.to_string())).unwrap();
    }

    // Terms: keep re-ticking whatever the gotchas untick.
    for _ in 0..3 {
        if let ChallengeView::Terms { terms, .. } = verification_challenge(&gate) {
            for (i, term) in terms.iter().enumerate() {
                if !term.accepted {
                    gate.apply(UnlockEvent::ToggleTerm(i)).unwrap();
                }
            }
            gate.apply(UnlockEvent::AcceptTerms).unwrap();
        }
    }

    for cells in [[2, 4, 6, 7], [1, 3, 5, 8]] {
        for cell in cells {
            gate.apply(UnlockEvent::ToggleCell(cell)).unwrap();
        }
        gate.apply(UnlockEvent::SubmitGrid).unwrap();
    }

    let code = match verification_challenge(&gate) {
        ChallengeView::Text(view) => view.code.unwrap(),
        other => panic!("expected text captcha, got {:?}", other),
    };
    gate.apply(UnlockEvent::SubmitCaptcha(code)).unwrap();
    gate.apply(UnlockEvent::SubmitCaptcha(
        HIDDEN_VERIFICATION_CODE.to_string(),
    ))
    .unwrap();

    gate.apply(UnlockEvent::RequestEmailCode(
        "visitor@example.com".to_string(),
    ))
    .unwrap();
    let code = match verification_challenge(&gate) {
        ChallengeView::Email(EmailView::CodeSent { preview, .. }) => preview.code,
        other => panic!("expected sent email, got {:?}", other),
    };
    gate.apply(UnlockEvent::SubmitEmailCode(code)).unwrap();

    assert_eq!(drive_loading(&mut gate).await.unwrap(), Feedback::Verified);
    gate
}

/// Submit the correct answer for riddle `index`, decorated with case and padding
pub fn answer_riddle(gate: &mut SecretGate<StdRng>, index: usize) -> Feedback {
    let answer = format!("  {}\t", RIDDLES[index].answer.to_uppercase());
    gate.apply(UnlockEvent::SubmitRiddle(answer)).unwrap()
}
