use super::args::Args;
use crate::config::Interval;
use crate::config::Settings;
use crate::quiz::Quiz;
use crate::quiz::Step;
use crate::quiz::Verdict;
use crate::trainer::Deal;
use crate::trainer::Error;
use crate::trainer::Mode;
use crate::trainer::Trainer;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;

/// Terminal front end: one prompt per screen of the trainer.
pub struct Terminal {
    trainer: Trainer,
    settings: Settings,
    images: Option<String>,
    cursor: usize,
}

/// Entries of the quiz menu, after the six adjusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Adjust(Step),
    Check,
    Continue,
    Back,
}

impl Choice {
    fn menu(quiz: &Quiz) -> Vec<Choice> {
        Step::all()
            .into_iter()
            .map(Choice::Adjust)
            .chain(std::iter::once(Choice::Check))
            .chain(quiz.is_checked().then_some(Choice::Continue))
            .chain(std::iter::once(Choice::Back))
            .collect()
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Choice::Adjust(step) => write!(f, "{}", step),
            Choice::Check => write!(f, "Check"),
            Choice::Continue => write!(f, "Continue"),
            Choice::Back => write!(f, "Back"),
        }
    }
}

impl From<Args> for Terminal {
    fn from(args: Args) -> Self {
        let settings = Settings::locate();
        let trainer = match args.seed {
            Some(seed) => Trainer::seeded(seed),
            None => Trainer::new(),
        };
        let trainer = match settings.load() {
            Some(saved) => trainer.with_interval(saved),
            None => trainer,
        };
        let mut terminal = Self {
            trainer,
            settings,
            images: args.images.then_some(args.image_base),
            cursor: 0,
        };
        if let (Some(min), Some(max)) = (args.min, args.max) {
            match Interval::new(min, max) {
                Ok(interval) => terminal.begin(interval),
                Err(e) => eprintln!("{}", e.to_string().red()),
            }
        }
        terminal
    }
}

impl Terminal {
    pub fn run(mut self) -> anyhow::Result<()> {
        loop {
            match *self.trainer.mode() {
                Mode::Home => match self.home()? {
                    true => continue,
                    false => break,
                },
                Mode::Training => self.training()?,
                Mode::Quiz(_) => self.quiz()?,
            }
        }
        log::info!("goodbye");
        Ok(())
    }

    /// Configuration form. False once the user quits.
    fn home(&mut self) -> anyhow::Result<bool> {
        let choice = Select::new()
            .with_prompt(format!("{}", "Hi-Lo trainer".bold()))
            .items(["Start", "Quit"].as_slice())
            .default(0)
            .interact()?;
        if choice == 1 {
            return Ok(false);
        }
        let interval = self.trainer.interval();
        let l = Self::bound("l (fewest cards between quizzes)", interval.min())?;
        let r = Self::bound("r (most cards between quizzes)", interval.max())?;
        match self.trainer.submit(&l, &r) {
            Ok(deal) => {
                self.remember();
                self.show(&deal);
            }
            Err(Error::Rejected(rejection)) => eprintln!("{}", rejection.to_string().red()),
            Err(e) => return Err(e.into()),
        }
        Ok(true)
    }

    fn training(&mut self) -> anyhow::Result<()> {
        let choice = Select::new()
            .with_prompt(format!("Cards seen: {}", self.trainer.seen()))
            .items(["Next card", "Back"].as_slice())
            .default(0)
            .report(false)
            .interact()?;
        match choice {
            0 => {
                let deal = self.trainer.deal()?;
                self.show(&deal);
            }
            _ => self.trainer.home(),
        }
        Ok(())
    }

    fn quiz(&mut self) -> anyhow::Result<()> {
        let Some(quiz) = self.trainer.quiz().copied() else {
            return Ok(());
        };
        let menu = Choice::menu(&quiz);
        let labels = menu.iter().map(Choice::to_string).collect::<Vec<_>>();
        let index = Select::new()
            .with_prompt(format!("Running count? Your guess: {}", quiz.guess().to_string().bold()))
            .items(labels.as_slice())
            .default(self.cursor.min(menu.len() - 1))
            .report(false)
            .interact()?;
        self.cursor = index;
        match menu[index] {
            Choice::Adjust(step) => {
                self.trainer.adjust(step)?;
            }
            Choice::Check => {
                let verdict = self.trainer.check()?;
                println!("{}", Self::paint(&verdict));
            }
            Choice::Continue => {
                self.trainer.resume()?;
                self.cursor = 0;
            }
            Choice::Back => {
                self.trainer.home();
                self.cursor = 0;
            }
        }
        Ok(())
    }
}

impl Terminal {
    fn begin(&mut self, interval: Interval) {
        let deal = self.trainer.start(interval);
        self.remember();
        self.show(&deal);
    }

    fn remember(&self) {
        if let Err(e) = self.settings.save(&self.trainer.interval()) {
            log::warn!("could not save settings: {:#}", e);
        }
    }

    fn bound(prompt: &str, initial: usize) -> anyhow::Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(initial.to_string())
            .allow_empty(true)
            .interact_text()?)
    }

    fn show(&self, deal: &Deal) {
        let card = match deal.card.suit().is_red() {
            true => deal.card.to_string().red().bold(),
            false => deal.card.to_string().bold(),
        };
        print!("{:>4}  {:<4} {}", deal.seen, card, deal.card.name().dimmed());
        match self.images {
            Some(ref base) => println!("  {}", deal.card.image(base).dimmed()),
            None => println!(),
        }
        if deal.quiz {
            println!("{}", "Quiz time!".yellow().bold());
        }
    }

    fn paint(verdict: &Verdict) -> colored::ColoredString {
        match verdict {
            Verdict::Correct => verdict.to_string().green().bold(),
            Verdict::Wrong(_) => verdict.to_string().red().bold(),
        }
    }
}
