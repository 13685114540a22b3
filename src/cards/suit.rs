/// Card suit: clubs, diamonds, hearts, spades.
///
/// Suits never affect the count. They only exist so that a dealt card
/// looks like a real card.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    /// Unicode suit symbol for display.
    pub fn ascii(&self) -> char {
        match self {
            Suit::C => '♣',
            Suit::D => '♦',
            Suit::H => '♥',
            Suit::S => '♠',
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Suit::C => "Clubs",
            Suit::D => "Diamonds",
            Suit::H => "Hearts",
            Suit::S => "Spades",
        }
    }
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::D | Suit::H)
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::C),
            "d" | "♦" => Ok(Suit::D),
            "h" | "♥" => Ok(Suit::H),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "C"),
            Suit::D => write!(f, "D"),
            Suit::H => write!(f, "H"),
            Suit::S => write!(f, "S"),
        }
    }
}
