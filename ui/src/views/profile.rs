use dioxus::prelude::*;

#[component]
pub fn Profile() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-profile",
            h1 { {crate::t!("page-profile-title")} }
            p { {crate::t!("page-profile-intro")} }
        }
    }
}
