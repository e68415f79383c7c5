//! Bridge from API responses to the shell's auth-required signal.

use dioxus::logger::tracing::info;

use super::signals::{ShellSignal, SignalHub};

pub const UNAUTHORIZED: u16 = 401;

/// Report an API response status. A 401 raises [`ShellSignal::AuthRequired`]
/// and returns `true`; every other status is left to the caller.
pub fn report_status(hub: &dyn SignalHub, status: u16) -> bool {
    if status != UNAUTHORIZED {
        return false;
    }
    info!(status, "session rejected by backend; requesting login");
    hub.dispatch(ShellSignal::AuthRequired);
    true
}
