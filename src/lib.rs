//! Translation relay: forwards HTML fragments to Google or DeepL over HTTP.

pub mod backend;
pub mod config;
pub mod deepl;
pub mod google;
pub mod i18n;
pub mod server;
pub mod translation;
