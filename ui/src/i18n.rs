//! Localization for `digestly-ui`.
//!
//! Messages live in `i18n/<lang>/digestly-ui.ftl`, are embedded at compile
//! time and looked up with [`t!`](crate::t), which `fl!` checks against the
//! en-US fallback during the build. Call [`init`] once before rendering; the
//! navbar's language picker goes through [`set_language`].
//!
//! Every language switch goes through [`select`], which rebuilds the Fluent
//! bundles, so loader options that live on the bundles are reapplied there.
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("nav-digest")`, `t!("login-redirect-note", target = path)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match `domain` in `i18n.toml` and the FTL file stem.
const DOMAIN: &str = "digestly-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the OS/browser language list. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match select(&requested) {
            Ok(selected) => debug!(?selected, "i18n languages selected"),
            Err(err) => warn!("failed selecting languages ({err}); continuing with fallback"),
        }
    });
}

/// Switch language at runtime. Unparsable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    select(&[lang]).map(|_| ())
}

fn select(requested: &[LanguageIdentifier]) -> Result<Vec<LanguageIdentifier>, I18nEmbedError> {
    let selected = i18n_embed::select(&*LOADER, &Localizations, requested)?;
    // Bidi isolation marks around placeables would leak into plain-text paths
    // such as the login redirect note.
    LOADER.set_use_isolating(false);
    Ok(selected)
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
