/// Why a pair of interval bounds was refused.
///
/// The display text is shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Enter positive integers for l and r.")]
    NotPositive,
    #[error("Ensure l ≤ r.")]
    Inverted,
}
