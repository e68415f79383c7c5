//! Application shell behaviour, independent of the renderer.
//!
//! The Dioxus `AppShell` component owns the chrome; this type owns the two
//! rules wired to it:
//!
//! - the floating button broadcasts [`ShellSignal::ReturnToDigest`] and, unless
//!   the default view is already active, navigates there;
//! - [`ShellSignal::AuthRequired`] sends the user to the login page with the
//!   current location as the `redirect` target, except when already on an
//!   auth page.

use std::rc::Rc;

use dioxus::logger::tracing::{debug, info, warn};

use crate::core::config::ShellConfig;
use crate::core::navigation::{NavTarget, Navigator};
use crate::core::signals::{ShellSignal, SignalHub, Subscription};

#[derive(Debug, Clone, Default)]
pub struct Shell {
    config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Floating button pressed. Returns the navigation issued, if any.
    pub fn activate_fab(&self, hub: &dyn SignalHub, nav: &dyn Navigator) -> Option<NavTarget> {
        hub.dispatch(ShellSignal::ReturnToDigest);

        let current = nav.current();
        if current.name == self.config.default_route {
            debug!(route = %current.name, "already on default view");
            return None;
        }

        let target = NavTarget::named(self.config.default_route.clone());
        self.go(nav, target)
    }

    /// Auth-required signal received. Returns the navigation issued, if any.
    pub fn handle_auth_required(&self, nav: &dyn Navigator) -> Option<NavTarget> {
        let current = nav.current();
        if self.config.is_auth_path(&current.path) {
            debug!(path = %current.path, "auth required while on an auth page; ignoring");
            return None;
        }

        info!(from = %current.full_path, "auth required; redirecting to login");
        let target = NavTarget::path(self.config.login_path.clone())
            .with_query(self.config.redirect_param.clone(), current.full_path);
        self.go(nav, target)
    }

    /// Register the auth-required listener. `on_auth_required` runs once per
    /// signal until the returned guard is dropped.
    pub fn mount(&self, hub: &dyn SignalHub, on_auth_required: impl Fn() + 'static) -> ShellListeners {
        debug!("shell listeners mounted");
        ShellListeners {
            auth_required: hub.subscribe(ShellSignal::AuthRequired, Rc::new(on_auth_required)),
        }
    }

    /// [`Shell::mount`] with the redirect rule applied directly through `nav`.
    pub fn mount_with_navigator(&self, hub: &dyn SignalHub, nav: Rc<dyn Navigator>) -> ShellListeners {
        let shell = self.clone();
        self.mount(hub, move || {
            shell.handle_auth_required(&*nav);
        })
    }

    fn go(&self, nav: &dyn Navigator, target: NavTarget) -> Option<NavTarget> {
        if let Err(err) = nav.navigate(target.clone()) {
            warn!(%target, "navigation failed: {err}");
        }
        Some(target)
    }
}

/// Listeners registered by [`Shell::mount`]; dropping unregisters them.
#[derive(Debug)]
pub struct ShellListeners {
    auth_required: Subscription,
}

impl ShellListeners {
    pub fn is_active(&self) -> bool {
        self.auth_required.is_active()
    }

    pub fn unmount(self) {
        debug!("shell listeners unmounted");
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::{NavigationError, RouteSnapshot};
    use crate::core::signals::LocalBus;
    use std::cell::{Cell, RefCell};

    struct FakeNavigator {
        current: RefCell<RouteSnapshot>,
        calls: RefCell<Vec<NavTarget>>,
        fail: bool,
    }

    impl FakeNavigator {
        fn at(name: &str, full_path: &str) -> Rc<Self> {
            Rc::new(Self {
                current: RefCell::new(RouteSnapshot::new(name, full_path)),
                calls: RefCell::new(Vec::new()),
                fail: false,
            })
        }

        fn calls(&self) -> Vec<NavTarget> {
            self.calls.borrow().clone()
        }
    }

    impl Navigator for FakeNavigator {
        fn current(&self) -> RouteSnapshot {
            self.current.borrow().clone()
        }

        fn navigate(&self, target: NavTarget) -> Result<(), NavigationError> {
            self.calls.borrow_mut().push(target);
            if self.fail {
                Err(NavigationError::UnknownRoute("digest".into()))
            } else {
                Ok(())
            }
        }
    }

    fn count_signal(bus: &LocalBus, signal: ShellSignal) -> (Rc<Cell<u32>>, Subscription) {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let sub = bus.subscribe(signal, Rc::new(move || h.set(h.get() + 1)));
        (hits, sub)
    }

    #[test]
    fn fab_broadcasts_once_and_skips_navigation_on_digest() {
        let bus = LocalBus::new();
        let (hits, _sub) = count_signal(&bus, ShellSignal::ReturnToDigest);
        let nav = FakeNavigator::at("digest", "/");

        let issued = Shell::default().activate_fab(&bus, &*nav);

        assert_eq!(hits.get(), 1);
        assert_eq!(issued, None);
        assert!(nav.calls().is_empty());
    }

    #[test]
    fn fab_navigates_home_from_other_views() {
        let bus = LocalBus::new();
        let (hits, _sub) = count_signal(&bus, ShellSignal::ReturnToDigest);
        let nav = FakeNavigator::at("library", "/library");

        Shell::default().activate_fab(&bus, &*nav);

        assert_eq!(hits.get(), 1);
        assert_eq!(nav.calls(), vec![NavTarget::named("digest")]);
    }

    #[test]
    fn fab_swallows_navigation_failure() {
        let bus = LocalBus::new();
        let nav = Rc::new(FakeNavigator {
            current: RefCell::new(RouteSnapshot::new("compare", "/compare")),
            calls: RefCell::new(Vec::new()),
            fail: true,
        });

        let issued = Shell::default().activate_fab(&bus, &*nav);

        assert_eq!(issued, Some(NavTarget::named("digest")));
        assert_eq!(nav.calls().len(), 1);
    }

    #[test]
    fn auth_required_ignored_on_auth_pages() {
        let shell = Shell::default();
        for path in ["/login", "/login?redirect=%2Fprofile", "/register"] {
            let nav = FakeNavigator::at("login", path);
            assert_eq!(shell.handle_auth_required(&*nav), None);
            assert!(nav.calls().is_empty(), "navigated away from {path}");
        }
    }

    #[test]
    fn auth_required_redirects_with_full_path() {
        let shell = Shell::default();

        let nav = FakeNavigator::at("profile", "/profile");
        shell.handle_auth_required(&*nav);
        assert_eq!(
            nav.calls(),
            vec![NavTarget::path("/login").with_query("redirect", "/profile")]
        );

        let nav = FakeNavigator::at("paper", "/papers/42?tab=notes");
        shell.handle_auth_required(&*nav);
        assert_eq!(
            nav.calls(),
            vec![NavTarget::path("/login").with_query("redirect", "/papers/42?tab=notes")]
        );
    }

    #[test]
    fn custom_config_changes_targets() {
        let shell = Shell::new(ShellConfig {
            login_path: "/signin".into(),
            auth_paths: vec!["/signin".into()],
            redirect_param: "next".into(),
            ..ShellConfig::default()
        });
        let nav = FakeNavigator::at("login", "/login");

        shell.handle_auth_required(&*nav);

        assert_eq!(
            nav.calls(),
            vec![NavTarget::path("/signin").with_query("next", "/login")]
        );
    }

    #[test]
    fn mounted_listener_redirects_until_unmounted() {
        let bus = LocalBus::new();
        let shell = Shell::default();
        let nav = FakeNavigator::at("profile", "/profile");

        let listeners = shell.mount_with_navigator(&bus, nav.clone());
        assert!(listeners.is_active());
        assert_eq!(bus.listener_count(ShellSignal::AuthRequired), 1);

        bus.dispatch(ShellSignal::AuthRequired);
        assert_eq!(nav.calls().len(), 1);

        listeners.unmount();
        assert_eq!(bus.listener_count(ShellSignal::AuthRequired), 0);

        bus.dispatch(ShellSignal::AuthRequired);
        assert_eq!(nav.calls().len(), 1);
    }

    #[test]
    fn remounting_does_not_duplicate_handlers() {
        let bus = LocalBus::new();
        let shell = Shell::default();
        let nav = FakeNavigator::at("compare", "/compare");

        for _ in 0..3 {
            let listeners = shell.mount_with_navigator(&bus, nav.clone());
            drop(listeners);
        }
        let _listeners = shell.mount_with_navigator(&bus, nav.clone());

        bus.dispatch(ShellSignal::AuthRequired);
        assert_eq!(bus.listener_count(ShellSignal::AuthRequired), 1);
        assert_eq!(nav.calls().len(), 1);
    }
}
