mod catalog;
mod events;
mod picker;

pub use catalog::*;
pub use events::*;
pub use picker::*;
