use crate::config::Rejection;

/// An action that is not available in the trainer's current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error("no cards are dealt outside of training")]
    NotTraining,
    #[error("answer the quiz before dealing")]
    QuizOpen,
    #[error("no quiz is open")]
    NoQuiz,
    #[error("check your guess before continuing")]
    Unchecked,
}
