use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Practice the Hi-Lo running count", long_about = None)]
pub struct Args {
    /// fewest cards between quizzes; with --max, skips the form
    #[arg(long, requires = "max")]
    pub min: Option<usize>,
    /// most cards between quizzes; with --min, skips the form
    #[arg(long, requires = "min")]
    pub max: Option<usize>,
    /// replay a session deterministically
    #[arg(long)]
    pub seed: Option<u64>,
    /// print each card's image URL
    #[arg(long)]
    pub images: bool,
    #[arg(long, default_value = crate::IMAGE_BASE)]
    pub image_base: String,
}
