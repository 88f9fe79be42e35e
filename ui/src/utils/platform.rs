//! Browser Platform Helpers
//!
//! The sign-up flow reports every failure through a blocking modal alert. The
//! [`Alert`] trait is the seam between the flow and the browser so the flow can
//! run under test without a `window`.

use crate::console_warn;
use web_sys::window;

/// Something that can show a blocking, user-facing message.
pub trait Alert {
    fn alert(&self, message: &str);
}

/// Shows messages with `window.alert`, which blocks the UI thread until dismissed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserAlert;

impl Alert for BrowserAlert {
    fn alert(&self, message: &str) {
        match window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    console_warn!("[Alert] window.alert failed: {:?} - message: {}", e, message);
                }
            }
            None => {
                console_warn!("[Alert] No window available - message: {}", message);
            }
        }
    }
}
