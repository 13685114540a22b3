use crate::Count;
use crate::cards::Card;

/// What happened when one card was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    pub card: Card,
    /// Hi-Lo tag of the card
    pub tag: Count,
    /// cards shown since training started, this one included
    pub seen: usize,
    /// this card made the quiz due
    pub quiz: bool,
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:<4} {}", self.seen, self.card)
    }
}
