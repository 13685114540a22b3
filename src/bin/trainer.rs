//! Hi-Lo Trainer Binary
//!
//! Deals cards in the terminal and quizzes you on the running count.
//!
//! Options: --min, --max, --seed, --images, --image-base

use clap::Parser;
use hilo::cli::Args;
use hilo::cli::Terminal;

fn main() -> anyhow::Result<()> {
    hilo::log()?;
    Terminal::from(Args::parse()).run()
}
