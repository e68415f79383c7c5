use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::use_shell_signal;
use crate::core::signals::ShellSignal;

#[component]
pub fn Compare() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut draft = use_signal(String::new);

    // Leaving via the floating button discards the unsent prompt.
    use_shell_signal(ShellSignal::ReturnToDigest, move || {
        if !draft.peek().is_empty() {
            debug!("compare: discarding draft");
        }
        draft.set(String::new());
    });

    let chars = draft.read().chars().count();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-compare",
            h1 { {crate::t!("page-compare-title")} }
            p { {crate::t!("page-compare-intro")} }

            textarea {
                class: "page-compare__draft",
                rows: 6,
                placeholder: crate::t!("page-compare-placeholder"),
                value: "{draft}",
                oninput: move |evt| draft.set(evt.value()),
            }
            p { class: "page-compare__status",
                {crate::t!("page-compare-draft-status", chars = chars.to_string())}
            }
        }
    }
}
