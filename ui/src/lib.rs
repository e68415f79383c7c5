//! Shared UI crate for Digestly: the application shell, its signals and the
//! page views every platform routes to.

pub mod core;
pub mod i18n;
pub mod shell;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Shell chrome, context and signal hook (components/app_shell.rs)
    pub mod app_shell;
    pub use app_shell::use_shell_signal;
    pub use app_shell::AppShell;
    pub use app_shell::ShellContext;
}
