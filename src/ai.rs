// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! External AI service boundary: summarization, smart-id naming and URL
//! title fetch. All calls are best-effort; failures surface as
//! `ExternalService` errors and never corrupt store state.

use crate::config::AiConfig;
use crate::error::{CatalogError, CatalogResult};

/// Best-effort metadata resolved from a PF URL; fields are empty on failure
#[derive(Debug, Clone, Default)]
pub struct UrlMetadata {
    pub title: String,
    pub reference_number: String,
}

pub struct AiClient {
    config: AiConfig,
    client: reqwest::Client,
}

impl AiClient {
    pub fn new(config: &AiConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent("pfbase/0.3")
            .build()
            .map_err(|e| CatalogError::ExternalService(e.to_string()))?;

        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    /// Concise technical summary of the record's raw content. Fails with a
    /// recognizable error rather than silently returning empty; the caller
    /// leaves the record's summary unchanged on failure.
    pub async fn summarize(
        &self,
        reference_number: &str,
        title: &str,
        raw_content: &str,
        system: &str,
    ) -> CatalogResult<String> {
        if raw_content.trim().is_empty() {
            return Err(CatalogError::ExternalService(
                "no raw content to summarize".to_string(),
            ));
        }

        let prompt = format!(
            "You are a technical support assistant.\n\
             Analyze the following FAQ record content.\n\n\
             Information:\n\
             - System: {}\n\
             - Reference number: {}\n\
             - Question/Title: {}\n\n\
             Raw content:\n{}\n\n\
             Task:\n\
             Write a concise technical summary (3 paragraphs at most).\n\
             Focus on the cause of the problem and the presented solution.\n\
             ALWAYS list prerequisites or conditions if the text mentions any.\n\
             If the content is empty or irrelevant, say so.",
            system, reference_number, title, raw_content
        );

        let text = self.generate(&prompt).await?;
        if text.trim().is_empty() {
            return Err(CatalogError::ExternalService(
                "summarization returned no text".to_string(),
            ));
        }
        Ok(text.trim().to_string())
    }

    /// Short kebab-case identifier candidate for a new record. Best-effort:
    /// the caller falls back to the local id strategy on any error.
    pub async fn generate_smart_id(
        &self,
        reference_number: &str,
        title: &str,
    ) -> CatalogResult<String> {
        let clean_title: String = title
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
            .collect::<String>()
            .to_lowercase();

        let prompt = format!(
            "Create a short kebab-case ID for \"PF {} {}\". Max 4 words. Output ONLY the ID.",
            reference_number, clean_title
        );

        let raw = self.generate(&prompt).await?;
        let slug = crate::catalog::store::sanitize_id(&raw);
        if slug.is_empty() {
            return Err(CatalogError::ExternalService(
                "smart id generation returned no usable text".to_string(),
            ));
        }
        Ok(slug)
    }

    /// Resolves (title, reference number) for a PF URL. The reference is
    /// extracted locally from the `id` query parameter when present; the
    /// title comes from the AI service. Returns empty fields instead of
    /// failing.
    pub async fn fetch_url_metadata(&self, url: &str) -> UrlMetadata {
        let reference_from_url = reference_from_url(url);

        let prompt = format!(
            "Find the exact page title for: {}\n\
             Return ONLY the title in plain text.\n\
             If it starts with \"PF XXX -\", include that part.",
            url
        );

        let raw_title = match self.generate(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!("title fetch failed for {}: {}", url, e);
                return UrlMetadata {
                    title: String::new(),
                    reference_number: reference_from_url,
                };
            }
        };

        let reference_from_title = reference_from_title(&raw_title);
        let title = clean_title(&raw_title);

        let reference_number = if !reference_from_url.is_empty() {
            reference_from_url
        } else {
            reference_from_title
        };

        UrlMetadata {
            title,
            reference_number,
        }
    }

    async fn generate(&self, prompt: &str) -> CatalogResult<String> {
        let api_key = std::env::var(&self.config.api_key_env).map_err(|_| {
            CatalogError::ExternalService(format!(
                "API key not set ({})",
                self.config.api_key_env
            ))
        })?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, api_key
        );

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CatalogError::ExternalService(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::ExternalService(format!(
                "AI service returned HTTP {}",
                response.status()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CatalogError::ExternalService(e.to_string()))?;

        let text = payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .unwrap_or_default();

        Ok(text.to_string())
    }
}

/// Extracts the `id` query parameter from a URL without fetching it
pub fn reference_from_url(url: &str) -> String {
    let Some(query) = url.split_once('?').map(|(_, q)| q) else {
        return String::new();
    };
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix("id=") {
            return value.split('#').next().unwrap_or_default().to_string();
        }
    }
    String::new()
}

/// Pulls a "PF 123" reference out of a page title, if present
fn reference_from_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let Some(pos) = lowered.find("pf") else {
        return String::new();
    };
    lowered[pos + 2..]
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect()
}

/// Strips a leading "PF 123 - " marker and a trailing site-name suffix
fn clean_title(raw: &str) -> String {
    let mut title = raw.trim();

    let lowered = title.to_lowercase();
    if lowered.starts_with("pf") {
        // Skip past "PF <digits>" and any " - " separator
        let rest = title[2..].trim_start();
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0 {
            let mut remainder = rest[digits..].trim_start();
            remainder = remainder.strip_prefix('-').unwrap_or(remainder);
            title = remainder.trim_start();
        }
    }

    if let Some(pos) = title.rfind(" - ") {
        title = title[..pos].trim_end();
    }

    title.to_string()
}
