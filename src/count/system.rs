use crate::Count;
use crate::cards::Rank;

/// A card-counting system assigns each rank a point value.
pub trait System {
    fn tag(&self, rank: Rank) -> Count;
}

/// High-Low: 2..6 are +1, 7..9 are 0, tens and aces are -1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hilo;

impl System for Hilo {
    fn tag(&self, rank: Rank) -> Count {
        rank.hilo()
    }
}

impl std::fmt::Display for Hilo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Hi-Lo")
    }
}
