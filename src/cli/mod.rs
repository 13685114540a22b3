pub mod args;
pub use args::*;

pub mod terminal;
pub use terminal::*;
