mod reveal;
mod selector;
mod shared;

pub use reveal::*;
pub use selector::*;
pub use shared::*;
