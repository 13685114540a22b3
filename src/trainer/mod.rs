pub mod deal;
pub use deal::*;

pub mod error;
pub use error::*;

pub mod mode;
pub use mode::*;

pub mod session;
pub use session::*;
