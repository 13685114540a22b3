use crate::Count;

/// Outcome of checking a guess against the true running count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// carries the count the user should have answered
    Wrong(Count),
}

impl Verdict {
    pub fn judge(guess: Count, answer: Count) -> Self {
        if guess == answer {
            Verdict::Correct
        } else {
            Verdict::Wrong(answer)
        }
    }
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Correct => write!(f, "Correct"),
            Verdict::Wrong(answer) => write!(f, "Wrong · Correct: {}", answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_only() {
        assert!(Verdict::judge(3, 3) == Verdict::Correct);
        assert!(Verdict::judge(-3, 3) == Verdict::Wrong(3));
        assert!(Verdict::judge(0, -1) == Verdict::Wrong(-1));
    }

    #[test]
    fn feedback_text() {
        assert!(Verdict::Correct.to_string() == "Correct");
        assert!(Verdict::Wrong(-4).to_string() == "Wrong · Correct: -4");
    }
}
