pub mod running;
pub use running::*;

pub mod system;
pub use system::*;
