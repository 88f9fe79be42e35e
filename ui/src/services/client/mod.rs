// Client-side sign-up capability
//
// The form never talks to the network itself. It is handed a SignUpService and
// only observes whether the call resolved or rejected.

pub mod errors;
pub mod sign_up_client;
pub mod types;

use async_trait::async_trait;
use std::rc::Rc;

pub use errors::{ClientError, ClientResult};
pub use sign_up_client::HttpSignUpService;
pub use types::{ApiErrorResponse, SignUpRequest, SignUpResponse};

/// Account creation as an injected capability
#[async_trait(?Send)]
pub trait SignUpService {
    async fn sign_up(&self, request: SignUpRequest) -> ClientResult<SignUpResponse>;
}

/// Shared handle to a [`SignUpService`] that can be passed through component props.
///
/// Two handles are equal when they point at the same service instance.
#[derive(Clone)]
pub struct SharedSignUpService(Rc<dyn SignUpService>);

impl SharedSignUpService {
    pub fn new(service: impl SignUpService + 'static) -> Self {
        Self(Rc::new(service))
    }
}

impl PartialEq for SharedSignUpService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[async_trait(?Send)]
impl SignUpService for SharedSignUpService {
    async fn sign_up(&self, request: SignUpRequest) -> ClientResult<SignUpResponse> {
        self.0.sign_up(request).await
    }
}
