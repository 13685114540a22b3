pub mod interval;
pub use interval::*;

pub mod rejection;
pub use rejection::*;

pub mod settings;
pub use settings::*;
