use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use crate::Count;
use rand::Rng;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. Dealing is sampling with replacement, so there is no
/// deck type: every draw is an independent uniform pick over these 52 bytes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Hi-Lo tag of this card's rank.
    pub fn hilo(&self) -> Count {
        self.rank().hilo()
    }
    /// Uniform draw over 4 suits x 13 ranks.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let rank = Rank::from(rng.random_range(0..13u8));
        let suit = Suit::from(rng.random_range(0..4u8));
        Self::from((rank, suit))
    }
    /// Asset code understood by the card image service, e.g. `0H` or `AS`.
    pub fn code(&self) -> String {
        format!("{}{}", self.rank().code(), self.suit())
    }
    /// Image URL under the given base, e.g. `<base>KD.png`.
    pub fn image(&self, base: &str) -> String {
        format!("{}{}.png", base, self.code())
    }
    /// Human label, e.g. `10 of Hearts`.
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank(), self.suit().name())
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self::sample(&mut rand::rng())
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// str isomorphism
/// accepts `10H`, `TH`, `0H`, `A♠`
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => {
                let rank = Rank::try_from(&s[..i])?;
                let suit = Suit::try_from(&s[i..])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit().ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::random();
        assert!(card == Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn bijective_u8() {
        let card = Card::random();
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn image_codes() {
        let base = crate::IMAGE_BASE;
        assert!(Card::from((Rank::Ten, Suit::H)).code() == "0H");
        assert!(Card::from((Rank::Ace, Suit::S)).code() == "AS");
        assert!(
            Card::from((Rank::King, Suit::D)).image(base)
                == "https://deckofcardsapi.com/static/img/KD.png"
        );
    }

    #[test]
    fn names() {
        assert!(Card::from((Rank::Ten, Suit::H)).name() == "10 of Hearts");
        assert!(Card::from((Rank::Queen, Suit::C)).name() == "Q of Clubs");
    }

    #[test]
    fn parse_spellings() {
        let ten = Card::from((Rank::Ten, Suit::H));
        assert!(Card::try_from("10H") == Ok(ten));
        assert!(Card::try_from("0h") == Ok(ten));
        assert!(Card::try_from("T♥") == Ok(ten));
        assert!(Card::try_from("H").is_err());
        assert!(Card::try_from("").is_err());
    }

    #[test]
    fn sample_covers_deck() {
        let ref mut rng = SmallRng::seed_from_u64(52);
        let mut seen = [false; 52];
        for _ in 0..5_000 {
            seen[u8::from(Card::sample(rng)) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn sample_with_replacement() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let draws = (0..200).map(|_| Card::sample(rng)).collect::<Vec<_>>();
        let unique = draws.iter().collect::<std::collections::HashSet<_>>();
        assert!(unique.len() <= 52);
        assert!(unique.len() < draws.len());
    }
}
