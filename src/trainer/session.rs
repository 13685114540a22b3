use super::deal::Deal;
use super::error::Error;
use super::mode::Mode;
use crate::Count;
use crate::cards::Card;
use crate::config::Interval;
use crate::count::Running;
use crate::quiz::Quiz;
use crate::quiz::Step;
use crate::quiz::Verdict;
use crate::schedule::Countdown;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The whole trainer: home → training → quiz → training → … → home.
///
/// Every user action is a method. Actions that make no sense in the
/// current [`Mode`] return an [`Error`] and leave all state untouched.
///
/// Generic over the RNG so that sessions can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct Trainer<R = SmallRng> {
    rng: R,
    mode: Mode,
    interval: Interval,
    running: Running,
    countdown: Countdown,
}

impl Default for Trainer<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Trainer<SmallRng> {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Trainer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            mode: Mode::Home,
            interval: Interval::default(),
            running: Running::hilo(),
            countdown: Countdown::default(),
        }
    }
    /// Prefills the form, e.g. from saved settings. Does not start training.
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Submits the configuration form with raw text for `l` and `r`.
    pub fn submit(&mut self, l: &str, r: &str) -> Result<Deal, Error> {
        let interval = Interval::try_from((l, r))
            .inspect_err(|e| log::debug!("rejected interval ({:?}, {:?}): {}", l, r, e))?;
        Ok(self.start(interval))
    }
    /// Starts a fresh session and deals its first card.
    pub fn start(&mut self, interval: Interval) -> Deal {
        self.interval = interval;
        self.running.reset();
        self.countdown = Countdown::arm(&self.interval, &mut self.rng);
        self.mode = Mode::Training;
        log::info!(
            "training {} · first quiz in {}",
            self.interval,
            self.countdown.remaining()
        );
        self.show()
    }
    /// Shows the next card.
    pub fn deal(&mut self) -> Result<Deal, Error> {
        match self.mode {
            Mode::Training => Ok(self.show()),
            Mode::Quiz(_) => Err(Error::QuizOpen),
            Mode::Home => Err(Error::NotTraining),
        }
    }
    pub fn adjust(&mut self, step: Step) -> Result<Count, Error> {
        Ok(self.quiz_mut()?.adjust(step))
    }
    pub fn check(&mut self) -> Result<Verdict, Error> {
        let quiz = self.quiz_mut()?;
        let verdict = quiz.check();
        log::info!("guessed {} · {}", quiz.guess(), verdict);
        Ok(verdict)
    }
    /// Dismisses a checked quiz and resumes dealing.
    pub fn resume(&mut self) -> Result<(), Error> {
        match self.mode {
            Mode::Quiz(quiz) if quiz.is_checked() => {
                self.countdown = Countdown::arm(&self.interval, &mut self.rng);
                self.mode = Mode::Training;
                log::info!("resuming · next quiz in {}", self.countdown.remaining());
                Ok(())
            }
            Mode::Quiz(_) => Err(Error::Unchecked),
            _ => Err(Error::NoQuiz),
        }
    }
    /// Back to the configuration form. The count resets on the next start.
    pub fn home(&mut self) {
        if !self.mode.is_home() {
            log::info!("back to home after {} cards", self.running.seen());
        }
        self.mode = Mode::Home;
    }
}

impl<R> Trainer<R> {
    pub fn mode(&self) -> &Mode {
        &self.mode
    }
    pub fn interval(&self) -> Interval {
        self.interval
    }
    /// True running count.
    pub fn running(&self) -> Count {
        self.running.total()
    }
    pub fn seen(&self) -> usize {
        self.running.seen()
    }
    /// Cards left before the next quiz.
    pub fn remaining(&self) -> usize {
        self.countdown.remaining()
    }
    pub fn quiz(&self) -> Option<&Quiz> {
        self.mode.quiz()
    }
    fn quiz_mut(&mut self) -> Result<&mut Quiz, Error> {
        match self.mode {
            Mode::Quiz(ref mut quiz) => Ok(quiz),
            _ => Err(Error::NoQuiz),
        }
    }
}

impl<R: Rng> Trainer<R> {
    fn show(&mut self) -> Deal {
        let card = Card::sample(&mut self.rng);
        let tag = self.running.witness(card);
        let quiz = self.countdown.tick();
        if quiz {
            self.mode = Mode::Quiz(Quiz::open(self.running.total()));
            log::info!("quiz after {} cards", self.running.seen());
        }
        log::debug!("dealt {} ({:+}) · running {}", card, tag, self.running);
        Deal {
            card,
            tag,
            seen: self.running.seen(),
            quiz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rejection;

    /// deals until the quiz opens, returning every deal on the way
    fn until_quiz(trainer: &mut Trainer) -> Vec<Deal> {
        let mut deals = Vec::new();
        while trainer.quiz().is_none() {
            deals.push(trainer.deal().unwrap());
        }
        deals
    }

    fn answer(trainer: &mut Trainer) {
        trainer.check().unwrap();
        trainer.resume().unwrap();
    }

    #[test]
    fn starts_home() {
        let trainer = Trainer::seeded(0);
        assert!(trainer.mode().is_home());
        assert!(trainer.interval() == Interval::default());
        assert!(trainer.running() == 0);
    }

    #[test]
    fn submit_deals_first_card() {
        let mut trainer = Trainer::seeded(1);
        let deal = trainer.submit("3", "5").unwrap();
        assert!(deal.seen == 1);
        assert!(trainer.seen() == 1);
        assert!(trainer.running() == deal.tag);
        assert!(trainer.mode().is_training());
        assert!(trainer.interval() == Interval::new(3, 5).unwrap());
    }

    #[test]
    fn rejection_keeps_state() {
        let mut trainer = Trainer::seeded(2);
        assert!(trainer.submit("0", "4") == Err(Error::Rejected(Rejection::NotPositive)));
        assert!(trainer.submit("5", "4") == Err(Error::Rejected(Rejection::Inverted)));
        assert!(trainer.mode().is_home());
        assert!(trainer.interval() == Interval::default());
        assert!(trainer.seen() == 0);

        trainer.submit("2", "2").unwrap();
        let seen = trainer.seen();
        assert!(trainer.submit("x", "2").is_err());
        assert!(trainer.seen() == seen);
        assert!(trainer.interval() == Interval::new(2, 2).unwrap());
    }

    #[test]
    fn quiz_spacing_within_interval() {
        for seed in 0..32 {
            for (min, max) in [(1, 1), (1, 3), (4, 4), (7, 10), (2, 20)] {
                let mut trainer = Trainer::seeded(seed);
                let first = trainer.start(Interval::new(min, max).unwrap());
                let mut count = 1 + until_quiz_or_now(&mut trainer, first).len();
                for _ in 0..5 {
                    assert!((min..=max).contains(&count));
                    answer(&mut trainer);
                    count = until_quiz(&mut trainer).len();
                }
            }
        }
    }

    /// the first deal may already have opened the quiz
    fn until_quiz_or_now(trainer: &mut Trainer, first: Deal) -> Vec<Deal> {
        match first.quiz {
            true => Vec::new(),
            false => until_quiz(trainer),
        }
    }

    #[test]
    fn single_card_interval_quizzes_immediately() {
        let mut trainer = Trainer::seeded(3);
        let deal = trainer.submit("1", "1").unwrap();
        assert!(deal.quiz);
        assert!(trainer.quiz().map(Quiz::answer) == Some(deal.tag));
    }

    #[test]
    fn answer_is_sum_of_tags() {
        for seed in 0..16 {
            let mut trainer = Trainer::seeded(seed);
            let first = trainer.start(Interval::new(5, 9).unwrap());
            let mut tags = vec![first.tag];
            for _ in 0..4 {
                tags.extend(until_quiz(&mut trainer).iter().map(|d| d.tag));
                let answer = trainer.quiz().unwrap().answer();
                assert!(answer == tags.iter().sum::<Count>());
                assert!(answer == trainer.running());
                assert!(trainer.seen() == tags.len());
                self::answer(&mut trainer);
            }
        }
    }

    #[test]
    fn no_deals_during_quiz() {
        let mut trainer = Trainer::seeded(4);
        trainer.submit("2", "2").unwrap();
        until_quiz(&mut trainer);
        let seen = trainer.seen();
        let running = trainer.running();
        assert!(trainer.deal() == Err(Error::QuizOpen));
        assert!(trainer.seen() == seen);
        assert!(trainer.running() == running);
    }

    #[test]
    fn no_deals_at_home() {
        let mut trainer = Trainer::seeded(5);
        assert!(trainer.deal() == Err(Error::NotTraining));
        trainer.submit("3", "3").unwrap();
        trainer.home();
        assert!(trainer.deal() == Err(Error::NotTraining));
    }

    #[test]
    fn guess_and_check() {
        let mut trainer = Trainer::seeded(6);
        trainer.submit("4", "6").unwrap();
        until_quiz(&mut trainer);
        let running = trainer.running();
        assert!(trainer.adjust(Step::Up5).unwrap() == 5);
        assert!(trainer.adjust(Step::Down10).unwrap() == -5);
        assert!(trainer.quiz().unwrap().guess() == -5);
        assert!(trainer.check().unwrap() == Verdict::judge(-5, running));
        let offset = running - trainer.quiz().unwrap().guess();
        for _ in 0..offset.abs() {
            let step = if offset > 0 { Step::Up1 } else { Step::Down1 };
            trainer.adjust(step).unwrap();
        }
        assert!(trainer.check().unwrap() == Verdict::Correct);
    }

    #[test]
    fn resume_requires_check() {
        let mut trainer = Trainer::seeded(7);
        trainer.submit("2", "3").unwrap();
        assert!(trainer.resume() == Err(Error::NoQuiz));
        until_quiz(&mut trainer);
        assert!(trainer.resume() == Err(Error::Unchecked));
        trainer.check().unwrap();
        trainer.resume().unwrap();
        assert!(trainer.mode().is_training());
        assert!((2..=3).contains(&trainer.remaining()));
    }

    #[test]
    fn resume_does_not_deal() {
        let mut trainer = Trainer::seeded(8);
        trainer.submit("2", "2").unwrap();
        until_quiz(&mut trainer);
        let seen = trainer.seen();
        answer(&mut trainer);
        assert!(trainer.seen() == seen);
    }

    #[test]
    fn quiz_actions_need_quiz() {
        let mut trainer = Trainer::seeded(9);
        assert!(trainer.adjust(Step::Up1) == Err(Error::NoQuiz));
        assert!(trainer.check() == Err(Error::NoQuiz));
    }

    #[test]
    fn home_closes_quiz() {
        let mut trainer = Trainer::seeded(10);
        trainer.submit("1", "1").unwrap();
        assert!(trainer.quiz().is_some());
        trainer.home();
        assert!(trainer.mode().is_home());
        assert!(trainer.quiz().is_none());
        assert!(trainer.interval() == Interval::new(1, 1).unwrap());
    }

    #[test]
    fn restart_resets_count() {
        let mut trainer = Trainer::seeded(11);
        trainer.submit("5", "5").unwrap();
        (0..3).for_each(|_| {
            trainer.deal().unwrap();
        });
        trainer.home();
        let deal = trainer.submit("5", "5").unwrap();
        assert!(trainer.seen() == 1);
        assert!(trainer.running() == deal.tag);
    }

    #[test]
    fn seeded_replay() {
        let mut a = Trainer::seeded(12);
        let mut b = Trainer::seeded(12);
        let xs = (a.submit("3", "8").unwrap(), a.deal().unwrap());
        let ys = (b.submit("3", "8").unwrap(), b.deal().unwrap());
        assert!(xs == ys);
    }
}
