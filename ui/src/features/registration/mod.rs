pub mod form_validation;
pub mod submit;
pub mod types;

pub use form_validation::*;
pub use submit::{begin_submission, dispatch_sign_up, submit_form};
pub use types::*;
