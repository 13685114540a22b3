use crate::Count;

/// One of the six guess adjusters.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Down10,
    Down5,
    Down1,
    Up1,
    Up5,
    Up10,
}

impl Step {
    /// Adjusters in the order they are laid out, most negative first.
    pub const fn all() -> [Step; 6] {
        [
            Step::Down10,
            Step::Down5,
            Step::Down1,
            Step::Up1,
            Step::Up5,
            Step::Up10,
        ]
    }
    pub const fn value(&self) -> Count {
        match self {
            Step::Down10 => -10,
            Step::Down5 => -5,
            Step::Down1 => -1,
            Step::Up1 => 1,
            Step::Up5 => 5,
            Step::Up10 => 10,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:+}", self.value())
    }
}
