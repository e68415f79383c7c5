#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;
use std::rc::Rc;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{info, warn};
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
    #[layout(DesktopShell)]
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

/// Environment variable naming a JSON file with `ShellConfig` overrides.
const SHELL_CONFIG_ENV: &str = "DIGESTLY_SHELL_CONFIG";

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Digestly – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_digest(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Digest {}, "{label}" })
}
fn nav_library(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Library {}, "{label}" })
}
fn nav_compare(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Compare {}, "{label}" })
}
fn nav_profile(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Profile {}, "{label}" })
}

/// Defaults, overridden by the file named in `DIGESTLY_SHELL_CONFIG` when it
/// exists and parses.
fn load_shell_config() -> ShellConfig {
    let Ok(path) = std::env::var(SHELL_CONFIG_ENV) else {
        return ShellConfig::default();
    };
    let loaded = std::fs::read_to_string(&path)
        .map_err(|err| err.to_string())
        .and_then(|raw| ShellConfig::from_json(&raw).map_err(|err| err.to_string()));
    match loaded {
        Ok(config) => {
            info!(%path, "loaded shell config");
            config
        }
        Err(err) => {
            warn!(%path, "ignoring shell config: {err}");
            ShellConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // No browser here: shell signals travel over the in-process bus.
    use_context_provider(|| {
        ShellContext::new(
            load_shell_config(),
            platform::default_hub(),
            Rc::new(RouterNavigator::<Route>::new()),
        )
    });

    register_nav(NavBuilder {
        digest: nav_digest,
        library: nav_library,
        compare: nav_compare,
        profile: nav_profile,
    });

    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so the routed subtree remounts when it changes.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: the shared shell around the routed outlet.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppShell {
            Outlet::<Route> {}
        }
    }
}
