//! Login and registration pages. The shell never redirects away from these.

use dioxus::prelude::*;

use crate::core::navigation::sanitize_redirect;

#[component]
pub fn Login(redirect: String) -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let target = sanitize_redirect(&redirect);
    let has_target = target != "/";

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-auth page-login",
            h1 { {crate::t!("login-title")} }
            p { {crate::t!("login-intro")} }
            if has_target {
                p { class: "page-auth__redirect",
                    {crate::t!("login-redirect-note", target = target.clone())}
                }
            }
            Link { class: "page-auth__switch", to: "/register", {crate::t!("login-register-link")} }
        }
    }
}

#[component]
pub fn Register() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-auth page-register",
            h1 { {crate::t!("register-title")} }
            p { {crate::t!("register-intro")} }
            Link { class: "page-auth__switch", to: "/login", {crate::t!("register-login-link")} }
        }
    }
}
