//! This crate contains the sign-up screen: its state, validation, the
//! injected sign-up capability and the Dioxus components that render it.

pub mod app;
pub use app::SignUpPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
