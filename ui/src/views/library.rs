use dioxus::prelude::*;

use crate::components::use_shell_signal;
use crate::core::signals::ShellSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LibraryTab {
    #[default]
    Folders,
    Notes,
    SavedComparisons,
}

/// Knowledge base: saved papers, notes and stored comparison results.
#[component]
pub fn Library() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut tab = use_signal(LibraryTab::default);
    use_shell_signal(ShellSignal::ReturnToDigest, move || tab.set(LibraryTab::Folders));

    let tabs = [
        (LibraryTab::Folders, crate::t!("page-library-tab-folders")),
        (LibraryTab::Notes, crate::t!("page-library-tab-notes")),
        (LibraryTab::SavedComparisons, crate::t!("page-library-tab-results")),
    ];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-library",
            h1 { {crate::t!("page-library-title")} }
            p { {crate::t!("page-library-intro")} }

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
