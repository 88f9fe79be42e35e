/// Browser console logging for component code.
///
/// Each macro forwards to the matching `gloo_console` level and prefixes the
/// message with `js_sys::Date::now()` so interleaved events from field edits
/// and the pending sign-up call can be ordered. These only work inside a
/// browser; code that must also run natively logs through `tracing` instead.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_timestamped {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($t:tt)*) => { $crate::__console_timestamped!(info, $($t)*) };
}

#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => { $crate::__console_timestamped!(warn, $($t)*) };
}

#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => { $crate::__console_timestamped!(error, $($t)*) };
}

