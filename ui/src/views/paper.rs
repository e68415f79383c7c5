use dioxus::prelude::*;

#[component]
pub fn Paper(id: String) -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-paper",
            h1 { {crate::t!("page-paper-title", id = id.clone())} }
            p { {crate::t!("page-paper-intro")} }
        }
    }
}
