//! Parser types and drivers.

mod engine;
mod reader;
mod record;

pub use engine::*;
pub use reader::*;
pub use record::*;
