mod auth;
mod compare;
mod digest;
mod library;
mod paper;
mod profile;

pub use auth::{Login, Register};
pub use compare::Compare;
pub use digest::Digest;
pub use library::Library;
pub use paper::Paper;
pub use profile::Profile;
