//! Global notifications shared between independent UI subtrees.
//!
//! Two payload-less signals cross component boundaries:
//! - [`ShellSignal::ReturnToDigest`] asks whichever page is displayed to
//!   settle its local state and fall back to its default view.
//! - [`ShellSignal::AuthRequired`] is raised by API failure handlers when the
//!   backend rejects the session.
//!
//! Delivery goes through a [`SignalHub`]. On the web the hub is backed by
//! `window` events (see `core::dom`), elsewhere by the in-process [`LocalBus`].

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use dioxus::logger::tracing::debug;

/// Global notifications understood by the shell and its pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellSignal {
    ReturnToDigest,
    AuthRequired,
}

impl ShellSignal {
    pub const ALL: [ShellSignal; 2] = [ShellSignal::ReturnToDigest, ShellSignal::AuthRequired];

    /// Fixed event name used on the wire (DOM event type on the web).
    pub fn event_name(self) -> &'static str {
        match self {
            ShellSignal::ReturnToDigest => "return-to-recommend",
            ShellSignal::AuthRequired => "auth-required",
        }
    }

    pub fn from_event_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.event_name() == name)
    }
}

impl fmt::Display for ShellSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

pub type SignalHandler = Rc<dyn Fn()>;

/// Publish/subscribe seam for [`ShellSignal`]s.
pub trait SignalHub {
    /// Deliver `signal` to every handler subscribed at the time of the call.
    fn dispatch(&self, signal: ShellSignal);

    /// Register `handler` for `signal`. The handler stays registered until the
    /// returned [`Subscription`] is dropped or cancelled.
    fn subscribe(&self, signal: ShellSignal, handler: SignalHandler) -> Subscription;
}

/// Registration guard. Dropping it removes the handler it was issued for.
#[must_use = "dropping a Subscription unregisters its handler immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription that was never registered anywhere.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    /// Unregister now. Equivalent to dropping.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

struct Listener {
    id: u64,
    signal: ShellSignal,
    handler: SignalHandler,
}

#[derive(Default)]
struct BusState {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Single-threaded in-process hub used by desktop builds and tests.
#[derive(Clone, Default)]
pub struct LocalBus {
    state: Rc<RefCell<BusState>>,
}

impl LocalBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self, signal: ShellSignal) -> usize {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.signal == signal)
            .count()
    }
}

impl SignalHub for LocalBus {
    fn dispatch(&self, signal: ShellSignal) {
        // Snapshot first: handlers may (un)subscribe while running.
        let handlers: Vec<SignalHandler> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.signal == signal)
            .map(|l| l.handler.clone())
            .collect();

        debug!(signal = %signal, listeners = handlers.len(), "dispatching shell signal");
        for handler in handlers {
            handler();
        }
    }

    fn subscribe(&self, signal: ShellSignal, handler: SignalHandler) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push(Listener {
                id,
                signal,
                handler,
            });
            id
        };

        let weak: Weak<RefCell<BusState>> = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().listeners.retain(|l| l.id != id);
            }
        })
    }
}

impl fmt::Debug for LocalBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalBus")
            .field("listeners", &self.state.borrow().listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, SignalHandler) {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        (hits, Rc::new(move || h.set(h.get() + 1)))
    }

    #[test]
    fn event_names_round_trip() {
        for signal in ShellSignal::ALL {
            assert_eq!(ShellSignal::from_event_name(signal.event_name()), Some(signal));
        }
        assert_eq!(ShellSignal::from_event_name("nope"), None);
    }

    #[test]
    fn dispatch_only_reaches_matching_signal() {
        let bus = LocalBus::new();
        let (digest_hits, digest) = counter();
        let (auth_hits, auth) = counter();
        let _a = bus.subscribe(ShellSignal::ReturnToDigest, digest);
        let _b = bus.subscribe(ShellSignal::AuthRequired, auth);

        bus.dispatch(ShellSignal::ReturnToDigest);

        assert_eq!(digest_hits.get(), 1);
        assert_eq!(auth_hits.get(), 0);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let bus = LocalBus::new();
        let (hits, handler) = counter();
        let sub = bus.subscribe(ShellSignal::AuthRequired, handler);
        assert_eq!(bus.listener_count(ShellSignal::AuthRequired), 1);

        drop(sub);
        bus.dispatch(ShellSignal::AuthRequired);

        assert_eq!(hits.get(), 0);
        assert_eq!(bus.listener_count(ShellSignal::AuthRequired), 0);
    }

    #[test]
    fn cancel_outliving_bus_is_harmless() {
        let bus = LocalBus::new();
        let (_, handler) = counter();
        let sub = bus.subscribe(ShellSignal::AuthRequired, handler);
        drop(bus);
        sub.cancel();
    }

    #[test]
    fn handler_may_unsubscribe_itself_during_dispatch() {
        let bus = LocalBus::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));

        let handler: SignalHandler = {
            let slot = slot.clone();
            let hits = hits.clone();
            Rc::new(move || {
                hits.set(hits.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(bus.subscribe(ShellSignal::ReturnToDigest, handler));

        bus.dispatch(ShellSignal::ReturnToDigest);
        bus.dispatch(ShellSignal::ReturnToDigest);

        assert_eq!(hits.get(), 1);
        assert_eq!(bus.listener_count(ShellSignal::ReturnToDigest), 0);
    }

    #[test]
    fn detached_subscription_is_inactive() {
        assert!(!Subscription::detached().is_active());
    }
}
