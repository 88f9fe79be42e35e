//! Feature Modules
//!
//! - **registration**: sign-up form state, the submit guard chain and the
//!   dispatch of the sign-up call

pub mod registration;
