use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::backend::{resolve_source, Backend, TranslateError};
use crate::i18n::Language;

const SERVICE: &str = "deepl";

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

/// Client for the DeepL v2 REST API.
#[derive(Debug, Clone)]
pub struct DeepLBackend {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl DeepLBackend {
    /// `base_url` is the API host without the `/v2/translate` path.
    pub fn new(client: reqwest::Client, api_key: Option<String>, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn translate_url(&self) -> String {
        format!("{}/v2/translate", self.base_url)
    }
}

#[async_trait]
impl Backend for DeepLBackend {
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
        let target_code = target
            .config()
            .deepl_code
            .ok_or(TranslateError::UnsupportedLanguage {
                service: SERVICE,
                language: target.name(),
            })?;

        let source_code = match resolve_source(source_language)? {
            Some(source) => Some(source.config().deepl_source_code().ok_or(
                TranslateError::UnsupportedLanguage {
                    service: SERVICE,
                    language: source.name(),
                },
            )?),
            None => None,
        };

        let api_key = self
            .api_key
            .as_deref()
            .ok_or(TranslateError::NotConfigured { service: SERVICE })?;

        debug!("Translating into {} ({}) with DeepL", target.code(), target_code);

        let mut form = vec![
            ("text", html),
            ("target_lang", target_code),
            ("tag_handling", "html"),
        ];
        if let Some(code) = source_code {
            form.push(("source_lang", code));
        }

        let response = self
            .client
            .post(self.translate_url())
            .header("Authorization", format!("DeepL-Auth-Key {}", api_key))
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
            .translations
            .into_iter()
            .next()
            .ok_or(TranslateError::NoResult { service: SERVICE })?;

        if let Some(detected) = &translation.detected_source_language {
            debug!("DeepL detected source language {}", detected);
        }

        Ok(translation.text)
    }
}
