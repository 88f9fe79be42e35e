pub mod info_message;

pub use info_message::*;
