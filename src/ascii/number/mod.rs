pub mod digit;
pub mod floating;
pub mod integer;

pub use digit::digit;
pub use floating::{Float, FloatingParser, floating};
pub use integer::{Integer, IntegerParser, integer};
