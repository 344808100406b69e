//! Language resolution for translation requests.
//!
//! Backends receive whatever the caller typed as `target_language`. Before a
//! request leaves the process, that input is resolved here into a registry
//! entry carrying the code each backend expects.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their backend codes
//! - `language`: `Language` type plus exact and fuzzy resolution of caller input
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::Language;
//!
//! let french = Language::resolve("Français")?;
//! assert_eq!(french.config().google_code, "fr");
//! ```

mod language;
mod registry;

pub use language::{Language, UnknownLanguage, SIMILARITY_THRESHOLD};
pub use registry::{LanguageConfig, LanguageRegistry};
