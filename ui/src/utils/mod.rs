//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped browser console logging for component code
//! - **platform**: the blocking alert seam and its `window.alert` implementation
//! - **validation**: email and password format predicates

pub mod console_macros;
pub mod platform;
pub mod validation;

pub use platform::*;
pub use validation::*;
