//! Infrastructure Services
//!
//! - **client**: the sign-up capability and its HTTP implementation
//! - **config**: endpoint configuration
//! - **errors**: validation and registration error types
//!
//! Services are WASM-first: async traits carry no Send/Sync bounds.

pub mod client;
pub mod config;
pub mod errors;
