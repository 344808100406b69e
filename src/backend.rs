//! The capability shared by every translation provider.

use async_trait::async_trait;

use crate::i18n::{Language, UnknownLanguage};

/// Source language value that asks the backend to detect the language itself.
pub const AUTO_DETECT: &str = "auto";

/// Classified failure of a backend call.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The backend answered but carried no translation.
    #[error("{service} returned no result for the given query")]
    NoResult { service: &'static str },

    /// The requested language could not be resolved.
    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),

    /// The language resolved but this backend cannot translate into it.
    #[error("{service} does not support {language}")]
    UnsupportedLanguage {
        service: &'static str,
        language: &'static str,
    },

    /// No credentials were configured for the backend.
    #[error("{service} is not configured: missing API key")]
    NotConfigured { service: &'static str },

    #[error("failed to send request to {service}: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} API error ({status}): {body}")]
    Api {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse {service} response: {source}")]
    Parse {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Anything the adapters did not anticipate.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// A remote machine-translation provider.
///
/// Implementations are built once at startup and shared across requests, so
/// they must not hold per-call mutable state.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Translate an HTML fragment into `destination_language`.
    ///
    /// `source_language` is either [`AUTO_DETECT`] or a language the caller
    /// wants to force.
    async fn translate_html(
        &self,
        html: &str,
        destination_language: &str,
        source_language: &str,
    ) -> Result<String, TranslateError>;
}

/// Resolve a source language, mapping [`AUTO_DETECT`] to `None`.
pub fn resolve_source(source_language: &str) -> Result<Option<Language>, TranslateError> {
    if source_language.trim().eq_ignore_ascii_case(AUTO_DETECT) {
        return Ok(None);
    }
    Ok(Some(Language::resolve(source_language)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_source_auto() {
        assert!(resolve_source("auto").unwrap().is_none());
        assert!(resolve_source(" AUTO ").unwrap().is_none());
    }

    #[test]
    fn test_resolve_source_explicit() {
        let language = resolve_source("English").unwrap().expect("Should be Some");
        assert_eq!(language.code(), "en");
    }

    #[test]
    fn test_resolve_source_unknown() {
        let err = resolve_source("Elvish").expect_err("Should fail");
        assert!(matches!(err, TranslateError::UnknownLanguage(_)));
    }

    #[test]
    fn test_error_messages_name_the_service() {
        let err = TranslateError::NoResult { service: "google" };
        assert!(err.to_string().contains("google"));

        let err = TranslateError::UnsupportedLanguage {
            service: "deepl",
            language: "Hindi",
        };
        assert_eq!(err.to_string(), "deepl does not support Hindi");

        let err = TranslateError::NotConfigured { service: "deepl" };
        assert!(err.to_string().contains("missing API key"));
    }
}
