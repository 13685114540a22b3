use super::rejection::Rejection;
use rand::Rng;

/// Inclusive range `[min, max]` of cards to deal between quizzes.
///
/// Both bounds are at least one and `min <= max`. The only ways to build
/// one are [`Interval::new`] and parsing raw form text, both of which
/// enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Interval {
    min: usize,
    max: usize,
}

impl Default for Interval {
    fn default() -> Self {
        Self {
            min: crate::DEFAULT_MIN_INTERVAL,
            max: crate::DEFAULT_MAX_INTERVAL,
        }
    }
}

impl Interval {
    pub fn new(min: usize, max: usize) -> Result<Self, Rejection> {
        if min < 1 || max < 1 {
            return Err(Rejection::NotPositive);
        }
        if min > max {
            return Err(Rejection::Inverted);
        }
        Ok(Self { min, max })
    }
    pub fn min(&self) -> usize {
        self.min
    }
    pub fn max(&self) -> usize {
        self.max
    }
    /// Uniform integer in `[min, max]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(self.min..=self.max)
    }
    /// Any positive integral number, including `5.0` and `1e1`.
    /// Values past `usize::MAX` saturate.
    fn bound(s: &str) -> Result<usize, Rejection> {
        let s = s.trim();
        let n = match s.parse::<i64>() {
            Ok(n) => usize::try_from(n).ok().filter(|n| *n >= 1),
            Err(_) => s
                .parse::<f64>()
                .ok()
                .filter(|x| x.is_finite() && x.fract() == 0.0 && *x >= 1.0)
                .map(|x| x as usize),
        };
        n.ok_or(Rejection::NotPositive)
    }
}

/// raw form text, `l` then `r`
impl TryFrom<(&str, &str)> for Interval {
    type Error = Rejection;
    fn try_from((l, r): (&str, &str)) -> Result<Self, Self::Error> {
        let min = Self::bound(l);
        let max = Self::bound(r);
        Self::new(min?, max?)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
