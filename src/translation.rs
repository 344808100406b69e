use std::fmt;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::backend::{Backend, TranslateError, AUTO_DETECT};

/// Backend selected by the caller's `service` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Service {
    Google,
    DeepL,
    /// Anything else, kept verbatim for the error message
    Unrecognized(String),
}

impl Service {
    /// Exact, case-sensitive match on the public identifiers.
    pub fn parse(value: &str) -> Self {
        match value {
            "google" => Service::Google,
            "deepl" => Service::DeepL,
            other => Service::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Service::Google => "google",
            Service::DeepL => "deepl",
            Service::Unrecognized(value) => value,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form fields of `POST /translate/`
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationRequest {
    pub html: String,
    pub target_language: String,
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub service: String,
    pub target_language: String,
    pub html: String,
}

/// The two process-wide backend clients.
#[derive(Clone)]
pub struct Backends {
    pub google: Arc<dyn Backend>,
    pub deepl: Arc<dyn Backend>,
}

impl Backends {
    pub fn new(google: Arc<dyn Backend>, deepl: Arc<dyn Backend>) -> Self {
        Self { google, deepl }
    }

    fn select(&self, service: &Service) -> Option<&Arc<dyn Backend>> {
        match service {
            Service::Google => Some(&self.google),
            Service::DeepL => Some(&self.deepl),
            Service::Unrecognized(_) => None,
        }
    }
}

/// Failure of a relay request, as reported to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error(
        "No result for query was retrieved. Params: {html}, {target_language}, {service}. Error: {source}"
    )]
    NoResult {
        html: String,
        target_language: String,
        service: String,
        source: TranslateError,
    },

    #[error(
        "An error occurred while searching for the language you passed in. Similarity: {similarity}. Error: {source}"
    )]
    UnknownLanguage {
        similarity: i64,
        source: TranslateError,
    },

    #[error("An error occurred while translating. Error: {0}")]
    Library(TranslateError),

    #[error("An unknown error occurred. Error: {0}")]
    Unexpected(TranslateError),

    #[error("Unknown service: {0}")]
    InvalidService(String),
}

impl RelayError {
    /// Classify a backend failure for the request that caused it.
    pub fn from_backend(err: TranslateError, request: &TranslationRequest) -> Self {
        match err {
            TranslateError::NoResult { .. } => RelayError::NoResult {
                html: request.html.clone(),
                target_language: request.target_language.clone(),
                service: request.service.clone(),
                source: err,
            },
            TranslateError::UnknownLanguage(ref unknown) => {
                let similarity = round_similarity(unknown.similarity);
                RelayError::UnknownLanguage {
                    similarity,
                    source: err,
                }
            }
            TranslateError::Unexpected(_) => RelayError::Unexpected(err),
            TranslateError::UnsupportedLanguage { .. }
            | TranslateError::NotConfigured { .. }
            | TranslateError::Request { .. }
            | TranslateError::Api { .. }
            | TranslateError::Parse { .. } => RelayError::Library(err),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::UnknownLanguage { .. } | RelayError::InvalidService(_) => {
                StatusCode::BAD_REQUEST
            }
            RelayError::NoResult { .. } | RelayError::Library(_) | RelayError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

/// Round half to even, so 92.5 reports as 92.
fn round_similarity(similarity: f64) -> i64 {
    similarity.round_ties_even() as i64
}

/// Replace double quotes with single quotes, then drop every newline.
pub fn sanitize_html(html: &str) -> String {
    html.replace('"', "'").replace('\n', "")
}

/// Translate `request.html` with the selected backend.
///
/// Backend failures are reported before an unrecognized service is; in
/// practice they never overlap because an unrecognized service reaches no
/// backend.
pub async fn relay(
    backends: &Backends,
    request: &TranslationRequest,
) -> Result<Vec<TranslationResult>, RelayError> {
    info!("[translate] Processing request");

    let service = Service::parse(&request.service);
    info!("[translate] Running translation with {}", service);

    let translated = match backends.select(&service) {
        Some(backend) => match backend
            .translate_html(&request.html, &request.target_language, AUTO_DETECT)
            .await
        {
            Ok(html) => Some(html),
            Err(err) => {
                error!(
                    "[translate] Failed to process request with {}. {}",
                    backend.name(),
                    err
                );
                return Err(RelayError::from_backend(err, request));
            }
        },
        None => None,
    };

    let Some(translated) = translated else {
        error!(
            "[translate] Failed to process request. Not valid service {}",
            service
        );
        return Err(RelayError::InvalidService(service.as_str().to_string()));
    };

    let result = TranslationResult {
        service: request.service.clone(),
        target_language: request.target_language.clone(),
        html: sanitize_html(&translated),
    };

    info!("[translate] Returning with success");
    Ok(vec![result])
}
