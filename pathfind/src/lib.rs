mod generate;
mod input;
pub use generate::*;
pub use input::*;
