use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::use_shell_signal;
use crate::core::signals::ShellSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DigestTab {
    #[default]
    Recommended,
    Institutions,
    All,
}

/// Default landing view.
#[component]
pub fn Digest() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut tab = use_signal(DigestTab::default);

    use_shell_signal(ShellSignal::ReturnToDigest, move || {
        debug!("digest: back to recommended tab");
        tab.set(DigestTab::Recommended);
    });

    let tabs = [
        (DigestTab::Recommended, crate::t!("page-digest-tab-today")),
        (DigestTab::Institutions, crate::t!("page-digest-tab-institutions")),
        (DigestTab::All, crate::t!("page-digest-tab-all")),
    ];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-digest",
            h1 { {crate::t!("page-digest-title")} }
            p { {crate::t!("page-digest-intro")} }

            div { class: "page-tabs", role: "tablist",
                for (id, label) in tabs {
                    button {
                        r#type: "button",
                        role: "tab",
                        class: tab_class(tab() == id),
                        aria_selected: tab() == id,
                        onclick: move |_| tab.set(id),
                        "{label}"
                    }
                }
            }

            p { class: "page-digest__empty", {crate::t!("page-digest-empty")} }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "page-tabs__tab page-tabs__tab--active"
    } else {
        "page-tabs__tab"
    }
}
