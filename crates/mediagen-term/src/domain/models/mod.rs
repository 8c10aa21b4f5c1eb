mod catalog_source;
mod event;
mod select_option;

pub use catalog_source::*;
pub use event::*;
pub use select_option::*;
