use std::rc::Rc;

use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppShell, ShellContext};
use ui::core::config::ShellConfig;
use ui::core::navigation::{NamedRoute, RouterNavigator};
use ui::core::platform;
use ui::views::{Compare, Digest, Library, Login, Paper, Profile, Register};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Digest {},
    #[route("/papers/:id")]
    Paper { id: String },
    #[route("/library")]
    Library {},
    #[route("/compare")]
    Compare {},
    #[route("/profile")]
    Profile {},
    #[route("/login?:redirect")]
    Login { redirect: String },
    #[route("/register")]
    Register {},
}

impl NamedRoute for Route {
    fn route_name(&self) -> &'static str {
        match self {
            Route::Digest {} => "digest",
            Route::Paper { .. } => "paper",
            Route::Library {} => "library",
            Route::Compare {} => "compare",
            Route::Profile {} => "profile",
            Route::Login { .. } => "login",
            Route::Register {} => "register",
        }
    }

    fn from_route_name(name: &str) -> Option<Self> {
        Some(match name {
            "digest" => Route::Digest {},
            "library" => Route::Library {},
            "compare" => Route::Compare {},
            "profile" => Route::Profile {},
            "login" => Route::Login {
                redirect: String::new(),
            },
            "register" => Route::Register {},
            _ => return None,
        })
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_digest(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Digest {},
        "{label}"
    })
}
fn nav_library(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Library {},
        "{label}"
    })
}
fn nav_compare(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Compare {},
        "{label}"
    })
}
fn nav_profile(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Profile {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        digest: nav_digest,
        library: nav_library,
        compare: nav_compare,
        profile: nav_profile,
    });

    // Browser builds route shell signals through `window` events.
    use_context_provider(|| {
        ShellContext::new(
            ShellConfig::default(),
            platform::default_hub(),
            Rc::new(RouterNavigator::<Route>::new()),
        )
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web layout: the shared shell around the routed outlet.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppShell {
            Outlet::<Route> {}
        }
    }
}
