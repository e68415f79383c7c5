//! Platform detection helpers.

use std::rc::Rc;

use dioxus::logger::tracing::debug;

use super::signals::SignalHub;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Unknown,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "linux", target_os = "macos", target_os = "windows")) {
            Self::Desktop
        } else {
            Self::Unknown
        }
    }
}

/// Hub for the running platform: `window` events in the browser, the
/// in-process bus everywhere else.
pub fn default_hub() -> Rc<dyn SignalHub> {
    debug!(platform = ?Platform::current(), "selecting shell signal hub");

    #[cfg(target_arch = "wasm32")]
    let hub: Rc<dyn SignalHub> = Rc::new(super::dom::WindowBus::new());
    #[cfg(not(target_arch = "wasm32"))]
    let hub: Rc<dyn SignalHub> = Rc::new(super::signals::LocalBus::new());
    hub
}
