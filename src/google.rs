use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::backend::{resolve_source, Backend, TranslateError};
use crate::i18n::Language;

const SERVICE: &str = "google";

/// Google Cloud Translation (v2) response envelope
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

/// Client for the Google Cloud Translation v2 REST API.
#[derive(Debug, Clone)]
pub struct GoogleBackend {
    client: reqwest::Client,
    api_key: Option<String>,
    api_url: String,
}

impl GoogleBackend {
    pub fn new(client: reqwest::Client, api_key: Option<String>, api_url: String) -> Self {
        Self {
            client,
            api_key,
            api_url,
        }
    }
}

#[async_trait]
impl Backend for GoogleBackend {
    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn translate_html(
        &self,
        html: &str,
        destination_language: &str,
        source_language: &str,
    ) -> Result<String, TranslateError> {
        let target = Language::resolve(destination_language)?;
        let source = resolve_source(source_language)?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(TranslateError::NotConfigured { service: SERVICE })?;

        debug!("Translating into {} with Google", target.code());

        let mut form = vec![
            ("q", html),
            ("target", target.config().google_code),
            ("format", "html"),
            ("key", api_key),
        ];
        if let Some(source) = source {
            form.push(("source", source.config().google_code));
        }

        let response = self
            .client
            .post(&self.api_url)
            .form(&form)
            .send()
            .await
            .map_err(|source| TranslateError::Request {
                service: SERVICE,
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslateError::Api {
                service: SERVICE,
                status,
                body,
            });
        }

        let parsed: TranslateResponse =
            response
                .json()
                .await
                .map_err(|source| TranslateError::Parse {
                    service: SERVICE,
                    source,
                })?;

        let translation = parsed
            .data
            .translations
            .into_iter()
            .next()
            .ok_or(TranslateError::NoResult { service: SERVICE })?;

        if let Some(detected) = &translation.detected_source_language {
            debug!("Google detected source language {}", detected);
        }

        Ok(translation.translated_text)
    }
}
