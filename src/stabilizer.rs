//! Supermajority debounce of the per-frame sign stream.
//!
//! Raw classifier output flickers under tracking noise. A sign only becomes
//! stable once it fills more than six of the last ten slots, and a stable
//! sign is announced exactly once per change.

use std::collections::VecDeque;

use crate::types::GestureLabel;

const WINDOW: usize = 10;
// A sign confirms with strictly more than this many matching slots.
const CONFIRM_THRESHOLD: usize = 6;

/// Outcome of feeding one raw label to the stabilizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stability {
    /// No new consensus this frame.
    Unchanged,
    /// A sign reached supermajority and differs from the last stable one.
    Settled(GestureLabel),
    /// Sustained no-match displaced the previous stable sign.
    Cleared,
}

/// Owns the only cross-frame state of gesture recognition: the sliding
/// window of raw labels and the last label announced as stable.
#[derive(Debug, Default)]
pub struct TemporalStabilizer {
    window: VecDeque<Option<GestureLabel>>,
    last_emitted: Option<GestureLabel>,
}

impl TemporalStabilizer {
    pub fn new() -> Self {
        TemporalStabilizer {
            window: VecDeque::with_capacity(WINDOW),
            last_emitted: None,
        }
    }

    /// Feeds one raw label in arrival order. No-match occupies a window slot
    /// like any sign, so a vanished hand eventually clears the stable label.
    pub fn observe(&mut self, raw: Option<GestureLabel>) -> Stability {
        self.window.push_back(raw);
        if self.window.len() > WINDOW {
            self.window.pop_front();
        }

        let count = self.window.iter().filter(|slot| **slot == raw).count();
        if count > CONFIRM_THRESHOLD && raw != self.last_emitted {
            self.last_emitted = raw;
            return match raw {
                Some(label) => Stability::Settled(label),
                None => Stability::Cleared,
            };
        }

        Stability::Unchanged
    }

    /// The label last announced as stable, if any.
    pub fn last_stable(&self) -> Option<GestureLabel> {
        self.last_emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(stabilizer: &mut TemporalStabilizer, labels: &[Option<GestureLabel>]) -> Vec<Stability> {
        labels
            .iter()
            .map(|raw| stabilizer.observe(*raw))
            .filter(|outcome| *outcome != Stability::Unchanged)
            .collect()
    }

    #[test]
    fn seven_of_ten_settles_once() {
        let mut stabilizer = TemporalStabilizer::new();
        let mut sequence = vec![Some(GestureLabel::Hello); 7];
        sequence.extend([None, None, None]);
        assert_eq!(
            feed(&mut stabilizer, &sequence),
            vec![Stability::Settled(GestureLabel::Hello)]
        );
    }

    #[test]
    fn six_of_ten_is_not_enough() {
        let mut stabilizer = TemporalStabilizer::new();
        // The window ends up holding exactly six hellos and four gaps.
        let mut sequence = vec![Some(GestureLabel::Hello); 6];
        sequence.extend([None, None, None, None]);
        assert!(feed(&mut stabilizer, &sequence).is_empty());
        assert_eq!(stabilizer.last_stable(), None);
    }

    #[test]
    fn reconfirmation_never_re_emits() {
        let mut stabilizer = TemporalStabilizer::new();
        let sequence = vec![Some(GestureLabel::Victory); 40];
        assert_eq!(
            feed(&mut stabilizer, &sequence),
            vec![Stability::Settled(GestureLabel::Victory)]
        );
        assert_eq!(stabilizer.last_stable(), Some(GestureLabel::Victory));
    }

    #[test]
    fn label_change_emits_after_window_turns_over() {
        let mut stabilizer = TemporalStabilizer::new();
        for _ in 0..10 {
            stabilizer.observe(Some(GestureLabel::Hello));
        }
        let mut outcomes = Vec::new();
        for _ in 0..7 {
            outcomes.push(stabilizer.observe(Some(GestureLabel::Help)));
        }
        // Six helps still share the window with four hellos; the seventh tips it.
        assert_eq!(outcomes[5], Stability::Unchanged);
        assert_eq!(outcomes[6], Stability::Settled(GestureLabel::Help));
    }

    #[test]
    fn sustained_no_match_clears_a_stable_sign() {
        let mut stabilizer = TemporalStabilizer::new();
        for _ in 0..7 {
            stabilizer.observe(Some(GestureLabel::Look));
        }
        let cleared = feed(&mut stabilizer, &vec![None; 10]);
        assert_eq!(cleared, vec![Stability::Cleared]);
        assert_eq!(stabilizer.last_stable(), None);
    }

    #[test]
    fn no_match_from_idle_emits_nothing() {
        let mut stabilizer = TemporalStabilizer::new();
        assert!(feed(&mut stabilizer, &vec![None; 30]).is_empty());
    }

    #[test]
    fn window_never_exceeds_capacity() {
        let mut stabilizer = TemporalStabilizer::new();
        for _ in 0..100 {
            stabilizer.observe(Some(GestureLabel::Good));
        }
        assert!(stabilizer.window.len() <= 10);
    }
}
