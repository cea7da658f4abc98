pub mod number;
pub mod whitespace;

pub use number::{digit, floating, integer};
pub use whitespace::whitespace;
