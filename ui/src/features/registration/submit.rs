//! Submit flow for the sign-up form
//!
//! Submission is split in two so the synchronous guard chain can run against
//! the current field values before anything is awaited:
//!
//! 1. [`submit_form`] validates, and on failure dispatches the field reset and
//!    raises one alert.
//! 2. [`dispatch_sign_up`] awaits the injected [`SignUpService`] and raises one
//!    alert if the call rejects. A successful call changes nothing.
//!
//! [`begin_submission`] chains the two and is what the form's submit handler
//! calls.
//!
//! There is no in-flight guard: submitting again while a call is pending
//! dispatches a second request.

use std::future::Future;

use tracing::{debug, info, instrument, warn};

use crate::features::registration::form_validation::validate_submission;
use crate::features::registration::types::*;
use crate::services::client::{SignUpRequest, SignUpResponse, SignUpService};
use crate::services::errors::{RegistrationError, RegistrationResult};
use crate::utils::platform::Alert;

/// Runs the guard chain over `form`.
///
/// Returns the request to send when every guard passes. Otherwise dispatches
/// [`SignUpAction::RejectSubmission`], alerts with the guard's message and
/// returns `None`.
pub fn submit_form<D, A>(form: &SignUpForm, dispatch: D, alert: &A) -> Option<SignUpRequest>
where
    D: Fn(SignUpAction),
    A: Alert + ?Sized,
{
    match validate_submission(form) {
        Ok(request) => Some(request),
        Err(error) => {
            debug!("Sign-up blocked by validation: {:?}", error);
            dispatch(SignUpAction::RejectSubmission(error));
            alert.alert(&error.to_string());
            None
        }
    }
}

/// Sends `request` through `service`, alerting with the raw error on rejection.
#[instrument(skip_all)]
pub async fn dispatch_sign_up<S, A>(
    service: &S,
    request: SignUpRequest,
    alert: &A,
) -> RegistrationResult<SignUpResponse>
where
    S: SignUpService + ?Sized,
    A: Alert + ?Sized,
{
    match service.sign_up(request).await {
        Ok(response) => {
            info!("Sign-up call resolved");
            Ok(response)
        }
        Err(e) => {
            warn!("Sign-up call rejected: {}", e);
            let error = RegistrationError::from(e);
            alert.alert(&error.to_string());
            Err(error)
        }
    }
}

/// Handles one submit of `form` as it stands right now.
///
/// The guard chain runs before this returns, so a rejected form is already
/// reset and alerted. A valid form yields the pending sign-up call, which owns
/// `service` and `alert` and can be handed to any executor.
pub fn begin_submission<S, A>(
    form: &SignUpForm,
    dispatch: &dyn Fn(SignUpAction),
    service: S,
    alert: A,
) -> Option<impl Future<Output = RegistrationResult<SignUpResponse>>>
where
    S: SignUpService,
    A: Alert,
{
    let request = submit_form(form, dispatch, &alert)?;
    Some(async move { dispatch_sign_up(&service, request, &alert).await })
}
