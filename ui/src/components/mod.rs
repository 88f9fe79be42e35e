//! User Interface Components
//!
//! - **forms**: the sign-up form
//! - **input**: controlled input fields
//! - **display**: status text

pub mod display;
pub mod forms;
pub mod input;
