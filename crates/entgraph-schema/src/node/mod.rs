mod edge;
mod field;
mod index;
mod table;

pub use edge::*;
pub use field::*;
pub use index::*;
pub use table::*;
