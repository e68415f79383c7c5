//! Renderer-independent plumbing: signals, navigation, configuration.

pub mod config;
pub mod navigation;
pub mod platform;
pub mod session;
pub mod signals;

#[cfg(target_arch = "wasm32")]
pub mod dom;
