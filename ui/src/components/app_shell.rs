use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::AppNavbar;
use crate::core::config::ShellConfig;
use crate::core::navigation::Navigator;
use crate::core::signals::{ShellSignal, SignalHub, Subscription};
use crate::shell::{Shell, ShellListeners};
use crate::t;

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");
const SHELL_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/shell.css"
));

/// Collaborators the shell needs, provided by the platform crate above
/// `Router::<Route>` with `use_context_provider`.
#[derive(Clone)]
pub struct ShellContext {
    pub shell: Shell,
    pub hub: Rc<dyn SignalHub>,
    pub navigator: Rc<dyn Navigator>,
}

impl ShellContext {
    pub fn new(config: ShellConfig, hub: Rc<dyn SignalHub>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            shell: Shell::new(config),
            hub,
            navigator,
        }
    }
}

/// Persistent chrome: navbar, routed content slot and the floating
/// "back to recommendations" button.
///
/// Auth-required signals can arrive from outside the renderer (window events,
/// API callbacks). They are forwarded into a component task so navigation
/// always runs inside the Dioxus runtime.
#[component]
pub fn AppShell(children: Element) -> Element {
    let ctx = use_context::<ShellContext>();

    let auth_events = use_coroutine({
        let ctx = ctx.clone();
        move |mut rx: UnboundedReceiver<ShellSignal>| {
            let ctx = ctx.clone();
            async move {
                while let Some(signal) = rx.next().await {
                    if signal == ShellSignal::AuthRequired {
                        ctx.shell.handle_auth_required(&*ctx.navigator);
                    }
                }
            }
        }
    });

    let listeners: Rc<RefCell<Option<ShellListeners>>> = use_hook({
        let ctx = ctx.clone();
        move || {
            let tx = auth_events.tx();
            let mounted = ctx.shell.mount(&*ctx.hub, move || {
                let _ = tx.unbounded_send(ShellSignal::AuthRequired);
            });
            Rc::new(RefCell::new(Some(mounted)))
        }
    });
    use_drop(move || {
        if let Some(mounted) = listeners.borrow_mut().take() {
            mounted.unmount();
        }
    });

    let on_fab = move |_: MouseEvent| {
        ctx.shell.activate_fab(&*ctx.hub, &*ctx.navigator);
    };

    let fab_label = t!("fab-return-label");

    rsx! {
        document::Link { rel: "stylesheet", href: SHELL_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SHELL_CSS_INLINE}" }
        }

        div { class: "app-shell",
            AppNavbar {}
            main { class: "app-shell__content", {children} }
            button {
                r#type: "button",
                class: "app-shell__fab",
                title: "{fab_label}",
                aria_label: "{fab_label}",
                onclick: on_fab,
                span { class: "app-shell__fab-icon", aria_hidden: "true", "↺" }
            }
        }
    }
}

/// Run `handler` inside this component whenever `signal` is dispatched on the
/// shell's hub. The subscription lives exactly as long as the component.
pub fn use_shell_signal(signal: ShellSignal, handler: impl FnMut() + 'static) {
    let hub = use_context::<ShellContext>().hub;
    let handler = use_hook(|| Rc::new(RefCell::new(handler)));

    let forward = use_coroutine(move |mut rx: UnboundedReceiver<()>| {
        let handler = handler.clone();
        async move {
            while rx.next().await.is_some() {
                (*handler.borrow_mut())();
            }
        }
    });

    let subscription: Rc<RefCell<Option<Subscription>>> = use_hook(move || {
        let tx = forward.tx();
        let sub = hub.subscribe(
            signal,
            Rc::new(move || {
                let _ = tx.unbounded_send(());
            }),
        );
        Rc::new(RefCell::new(Some(sub)))
    });
    use_drop(move || {
        subscription.borrow_mut().take();
    });
}
