pub mod countdown;
pub use countdown::*;
