pub mod overlay;
pub use overlay::*;

pub mod step;
pub use step::*;

pub mod verdict;
pub use verdict::*;
