//! CLI library components for Text Vault.

pub mod input;
pub mod logging;
pub mod render;
pub mod settings;
