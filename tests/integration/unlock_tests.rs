//! Unlock flow integration tests

#[cfg(test)]
mod tests {
    use crate::common::{answer_riddle, verified_gate};
    use bento_gateway::core::unlock::{
        Feedback, GateView, REWARD, RIDDLES, SECRET_SEQUENCE, SecretGate, UnlockEvent,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn press(gate: &mut SecretGate<StdRng>, keys: &[&str]) -> Feedback {
        let mut last = Feedback::Recorded;
        for key in keys {
            last = gate.apply(UnlockEvent::KeyDown(key.to_string())).unwrap();
        }
        last
    }

    // ==================== Keystrokes ====================

    #[test]
    fn test_near_miss_sequences_stay_locked() {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet: Vec<String> = ('a'..='z').map(|c| c.to_string()).collect();

        for _ in 0..200 {
            let keys: Vec<&str> = (0..7)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())].as_str())
                .collect();
            if keys == SECRET_SEQUENCE {
                continue;
            }

            let mut gate = SecretGate::with_rng(StdRng::seed_from_u64(1));
            press(&mut gate, &keys);
            assert!(gate.snapshot().component_locked, "unlocked by {:?}", keys);
        }

        // One substitution away from the target.
        for position in 0..7 {
            let mut keys = SECRET_SEQUENCE;
            keys[position] = "x";
            let mut gate = SecretGate::with_rng(StdRng::seed_from_u64(1));
            press(&mut gate, &keys);
            assert!(gate.snapshot().component_locked);
        }
    }

    #[test]
    fn test_target_unlocks_after_any_prefix() {
        for prefix in [&[][..], &["h", "e", "s"][..], &["q", "w", "e", "r", "t", "y", "h"][..]] {
            let mut gate = SecretGate::with_rng(StdRng::seed_from_u64(1));
            press(&mut gate, prefix);
            assert_eq!(press(&mut gate, &SECRET_SEQUENCE), Feedback::Unlocked);
            assert!(!gate.snapshot().component_locked);
        }
    }

    // ==================== Riddles ====================

    #[tokio::test(start_paused = true)]
    async fn test_riddles_advance_on_correct_answers() {
        let mut gate = verified_gate(11).await;
        assert!(gate.snapshot().fully_verified);

        for step in 0..RIDDLES.len() - 1 {
            assert_eq!(gate.snapshot().riddle_step, step);
            assert_eq!(answer_riddle(&mut gate, step), Feedback::NextRiddle { step: step + 1 });
        }

        assert_eq!(answer_riddle(&mut gate, RIDDLES.len() - 1), Feedback::Solved);
        assert!(gate.snapshot().riddle_solved);
        assert_eq!(gate.view(), GateView::Reward(REWARD));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_riddle_answers_keep_the_step() {
        let mut gate = verified_gate(12).await;

        for step in 0..RIDDLES.len() {
            let feedback = gate
                .apply(UnlockEvent::SubmitRiddle("definitely wrong".to_string()))
                .unwrap();
            assert!(matches!(
                feedback,
                Feedback::Incorrect {
                    clear_input: true,
                    ..
                }
            ));
            assert_eq!(gate.snapshot().riddle_step, step);
            assert!(matches!(gate.view(), GateView::Riddle { error: Some(_), .. }));

            if step + 1 < RIDDLES.len() {
                answer_riddle(&mut gate, step);
            }
        }
        assert!(!gate.snapshot().riddle_solved);
    }
}
