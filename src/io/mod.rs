//! Filesystem inputs: the `artifact` locator that picks the MarMoT jar and
//! the `config` loader for the per-language JSON manifest.
pub mod artifact;
pub use artifact::locate_artifact;

pub mod config;
pub use config::{LanguageEntry, Manifest, record_lang};
