use crate::config::Interval;
use rand::Rng;

/// Deals remaining until the next quiz.
///
/// Armed with a uniform draw from the configured [`Interval`], then ticked
/// once per card shown. Reaching zero means the quiz is due; a countdown at
/// zero stays there until it is armed again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Countdown(usize);

impl Countdown {
    pub fn arm<R: Rng>(interval: &Interval, rng: &mut R) -> Self {
        Self(interval.sample(rng))
    }
    /// Counts one card. True exactly on the card that makes the quiz due.
    pub fn tick(&mut self) -> bool {
        match self.0 {
            0 => false,
            n => {
                self.0 = n - 1;
                self.0 == 0
            }
        }
    }
    pub fn remaining(&self) -> usize {
        self.0
    }
}

impl From<usize> for Countdown {
    fn from(n: usize) -> Self {
        Self(n)
    }
}
