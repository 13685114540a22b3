use crate::quiz::Quiz;

/// Which screen the trainer is on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// configuration form
    #[default]
    Home,
    /// dealing cards
    Training,
    /// overlay up, dealing suspended
    Quiz(Quiz),
}

impl Mode {
    pub fn is_home(&self) -> bool {
        matches!(self, Mode::Home)
    }
    pub fn is_training(&self) -> bool {
        matches!(self, Mode::Training)
    }
    pub fn quiz(&self) -> Option<&Quiz> {
        match self {
            Mode::Quiz(quiz) => Some(quiz),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mode::Home => write!(f, "home"),
            Mode::Training => write!(f, "training"),
            Mode::Quiz(_) => write!(f, "quiz"),
        }
    }
}
