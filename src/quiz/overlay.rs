use super::step::Step;
use super::verdict::Verdict;
use crate::Count;

/// The quiz overlay.
///
/// The answer is frozen when the quiz opens; no cards are dealt while it
/// is up. The guess starts at zero and only moves by [`Step`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quiz {
    answer: Count,
    guess: Count,
    verdict: Option<Verdict>,
}

impl Quiz {
    pub fn open(answer: Count) -> Self {
        Self {
            answer,
            guess: 0,
            verdict: None,
        }
    }
    pub fn adjust(&mut self, step: Step) -> Count {
        self.guess += step.value();
        self.guess
    }
    /// May be called repeatedly; each call judges the current guess.
    pub fn check(&mut self) -> Verdict {
        let verdict = Verdict::judge(self.guess, self.answer);
        self.verdict = Some(verdict);
        verdict
    }
    pub fn guess(&self) -> Count {
        self.guess
    }
    pub fn answer(&self) -> Count {
        self.answer
    }
    /// Latest verdict, `None` until the first check.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }
    pub fn is_checked(&self) -> bool {
        self.verdict.is_some()
    }
}
