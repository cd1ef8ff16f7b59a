//! Stagnation detection over recent generation fingerprints.
//!
//! Still lifes and oscillators with a period up to `HISTORY_LEN` repeat a
//! fingerprint that is still in the ring.

pub const HISTORY_LEN: usize = 10;

#[derive(Clone, Debug)]
pub struct StagnationDetector {
    history: [u64; HISTORY_LEN],
    len: usize,
    next: usize,
    repeats: u32,
    patience: u32,
}

impl StagnationDetector {
    /// `patience` is the number of consecutive repeating generations
    /// tolerated before [`observe`](Self::observe) reports stagnation.
    pub fn new(patience: u32) -> Self {
        Self {
            history: [0; HISTORY_LEN],
            len: 0,
            next: 0,
            repeats: 0,
            patience,
        }
    }

    /// Record one generation. Returns `true` once the pattern has repeated
    /// for more than `patience` generations in a row.
    pub fn observe(&mut self, fingerprint: u64) -> bool {
        let seen = self.history[..self.len].contains(&fingerprint);
        if seen {
            self.repeats = self.repeats.saturating_add(1);
        } else {
            self.repeats = 0;
        }

        self.history[self.next] = fingerprint;
        self.next = (self.next + 1) % HISTORY_LEN;
        self.len = (self.len + 1).min(HISTORY_LEN);

        self.repeats > self.patience
    }

    #[inline]
    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    pub fn reset(&mut self) {
        self.len = 0;
        self.next = 0;
        self.repeats = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_pattern_never_stagnates() {
        let mut detector = StagnationDetector::new(0);
        for fp in 0..100u64 {
            assert!(!detector.observe(fp));
        }
    }

    #[test]
    fn still_life_stagnates_after_patience() {
        let mut detector = StagnationDetector::new(3);
        assert!(!detector.observe(7));
        for _ in 0..3 {
            assert!(!detector.observe(7));
        }
        assert!(detector.observe(7));
    }

    #[test]
    fn period_two_oscillator_is_detected() {
        let mut detector = StagnationDetector::new(4);
        let verdicts: Vec<bool> = (0..8).map(|i| detector.observe(i % 2)).collect();
        assert_eq!(verdicts.iter().filter(|&&v| v).count(), 2);
        assert!(verdicts[7]);
    }

    #[test]
    fn reset_forgets_history() {
        let mut detector = StagnationDetector::new(0);
        detector.observe(1);
        assert!(detector.observe(1));
        detector.reset();
        assert!(!detector.observe(1));
        assert_eq!(detector.repeats(), 0);
    }
}
