mod hand;
mod pool;
mod tile;

pub use hand::*;
pub use pool::*;
pub use tile::*;
