//! End-to-end behaviour of the shell over the in-process bus, driven the way
//! a platform crate wires it: signals in through the hub, navigation out
//! through a `Navigator`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ui::core::navigation::{NavTarget, NavigationError, Navigator, RouteSnapshot};
use ui::core::session;
use ui::core::signals::{LocalBus, ShellSignal, SignalHub};
use ui::shell::Shell;

#[derive(Default)]
struct RecordingNavigator {
    at: RefCell<RouteSnapshot>,
    pushed: RefCell<Vec<NavTarget>>,
}

impl RecordingNavigator {
    fn at(name: &str, full_path: &str) -> Rc<Self> {
        let nav = Rc::new(Self::default());
        nav.move_to(name, full_path);
        nav
    }

    fn move_to(&self, name: &str, full_path: &str) {
        *self.at.borrow_mut() = RouteSnapshot::new(name, full_path);
    }

    fn pushed(&self) -> Vec<NavTarget> {
        self.pushed.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current(&self) -> RouteSnapshot {
        self.at.borrow().clone()
    }

    fn navigate(&self, target: NavTarget) -> Result<(), NavigationError> {
        self.pushed.borrow_mut().push(target);
        Ok(())
    }
}

fn returns_heard(bus: &LocalBus) -> (Rc<Cell<usize>>, ui::core::signals::Subscription) {
    let heard = Rc::new(Cell::new(0));
    let h = heard.clone();
    let sub = bus.subscribe(ShellSignal::ReturnToDigest, Rc::new(move || h.set(h.get() + 1)));
    (heard, sub)
}

#[test]
fn fab_always_broadcasts_exactly_once() {
    let bus = LocalBus::new();
    let (heard, _sub) = returns_heard(&bus);
    let shell = Shell::default();

    for (name, path) in [("digest", "/"), ("library", "/library"), ("paper", "/papers/7")] {
        let nav = RecordingNavigator::at(name, path);
        let before = heard.get();
        shell.activate_fab(&bus, &*nav);
        assert_eq!(heard.get(), before + 1, "on {path}");
    }
}

#[test]
fn fab_on_digest_does_not_navigate() {
    let bus = LocalBus::new();
    let nav = RecordingNavigator::at("digest", "/");

    Shell::default().activate_fab(&bus, &*nav);

    assert!(nav.pushed().is_empty());
}

#[test]
fn fab_elsewhere_navigates_to_digest() {
    let bus = LocalBus::new();
    let (heard, _sub) = returns_heard(&bus);
    let nav = RecordingNavigator::at("compare", "/compare");

    Shell::default().activate_fab(&bus, &*nav);

    assert_eq!(heard.get(), 1);
    assert_eq!(nav.pushed(), vec![NavTarget::named("digest")]);
}

#[test]
fn auth_signal_on_auth_pages_is_ignored() {
    let bus = LocalBus::new();
    let nav = RecordingNavigator::at("login", "/login");
    let _listeners = Shell::default().mount_with_navigator(&bus, nav.clone());

    bus.dispatch(ShellSignal::AuthRequired);
    nav.move_to("register", "/register");
    bus.dispatch(ShellSignal::AuthRequired);

    assert!(nav.pushed().is_empty());
}

#[test]
fn auth_signal_elsewhere_redirects_to_login() {
    let bus = LocalBus::new();
    let nav = RecordingNavigator::at("profile", "/profile");
    let _listeners = Shell::default().mount_with_navigator(&bus, nav.clone());

    bus.dispatch(ShellSignal::AuthRequired);

    let expected = NavTarget::path("/login").with_query("redirect", "/profile");
    assert_eq!(nav.pushed(), vec![expected.clone()]);
    assert_eq!(expected.href().as_deref(), Some("/login?redirect=%2Fprofile"));
}

#[test]
fn unauthorized_response_flows_through_to_redirect() {
    let bus = LocalBus::new();
    let nav = RecordingNavigator::at("library", "/library");
    let _listeners = Shell::default().mount_with_navigator(&bus, nav.clone());

    assert!(session::report_status(&bus, 401));

    assert_eq!(
        nav.pushed(),
        vec![NavTarget::path("/login").with_query("redirect", "/library")]
    );
}

#[test]
fn no_navigation_after_teardown() {
    let bus = LocalBus::new();
    let nav = RecordingNavigator::at("profile", "/profile");
    let listeners = Shell::default().mount_with_navigator(&bus, nav.clone());

    drop(listeners);
    bus.dispatch(ShellSignal::AuthRequired);

    assert!(nav.pushed().is_empty());
    assert_eq!(bus.listener_count(ShellSignal::AuthRequired), 0);
}
