pub mod controlled_input;

pub use controlled_input::*;
