//! Browser-backed [`SignalHub`]: signals travel as plain DOM events on `window`,
//! so scripts outside the Rust bundle can raise or observe them too.

use dioxus::logger::tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use super::signals::{ShellSignal, SignalHandler, SignalHub, Subscription};

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowBus;

impl WindowBus {
    pub fn new() -> Self {
        Self
    }
}

fn window() -> Option<Window> {
    let win = web_sys::window();
    if win.is_none() {
        warn!("no global window; shell signals are inert");
    }
    win
}

impl SignalHub for WindowBus {
    fn dispatch(&self, signal: ShellSignal) {
        let Some(win) = window() else {
            return;
        };
        let event = match Event::new(signal.event_name()) {
            Ok(event) => event,
            Err(err) => {
                warn!(signal = %signal, "failed to construct event: {err:?}");
                return;
            }
        };
        debug!(signal = %signal, "dispatching window event");
        if let Err(err) = win.dispatch_event(&event) {
            warn!(signal = %signal, "window event dispatch failed: {err:?}");
        }
    }

    fn subscribe(&self, signal: ShellSignal, handler: SignalHandler) -> Subscription {
        let Some(win) = window() else {
            return Subscription::detached();
        };

        let callback: Closure<dyn FnMut(Event)> = Closure::new(move |_event: Event| handler());
        let name = signal.event_name();

        if let Err(err) =
            win.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref::<js_sys::Function>())
        {
            warn!(signal = %signal, "addEventListener failed: {err:?}");
            return Subscription::detached();
        }

        // The closure must outlive the registration; it is dropped right after removal.
        Subscription::new(move || {
            if let Err(err) = win
                .remove_event_listener_with_callback(name, callback.as_ref().unchecked_ref::<js_sys::Function>())
            {
                warn!(signal = %signal, "removeEventListener failed: {err:?}");
            }
            drop(callback);
        })
    }
}
