use super::system::Hilo;
use super::system::System;
use crate::Count;
use crate::cards::Card;

/// Running totals over the stream of cards shown since training started.
///
/// `total` is the running count, the sum of every witnessed card's tag.
/// `seen` is how many cards have been shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Running {
    system: Hilo,
    total: Count,
    seen: usize,
}

impl Running {
    pub fn hilo() -> Self {
        Self::default()
    }
    /// Records a shown card and returns its tag.
    pub fn witness(&mut self, card: Card) -> Count {
        let tag = self.system.tag(card.rank());
        self.total += tag;
        self.seen += 1;
        tag
    }
    pub fn reset(&mut self) {
        self.total = 0;
        self.seen = 0;
    }
    pub fn total(&self) -> Count {
        self.total
    }
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl std::fmt::Display for Running {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.seen {
            1 => write!(f, "{:+} after 1 card", self.total),
            n => write!(f, "{:+} after {} cards", self.total, n),
        }
    }
}
