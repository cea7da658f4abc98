pub mod conversion;
pub mod input;
pub mod state;

pub use conversion::{Conversion, Owned, Slices, Text};
pub use input::Input;
pub use state::State;
