use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::analysis::AnalysisRequest;
use crate::error::AnalysisError;
use crate::services::LanguageModelService;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";

pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    fn api_key(&self) -> Result<&str, AnalysisError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(AnalysisError::MissingCredential)
    }

    fn generate_endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl LanguageModelService for GeminiClient {
    async fn generate(&self, request: &AnalysisRequest) -> Result<String, AnalysisError> {
        let api_key = self.api_key()?;
        let endpoint = self.generate_endpoint();
        debug!(model = %self.model, %endpoint, "calling Gemini generateContent");

        let response = self
            .http
            .post(endpoint)
            .header(API_KEY_HEADER, api_key)
            .header(ACCEPT, JSON_MIME_TYPE)
            .header(CONTENT_TYPE, JSON_MIME_TYPE)
            .json(&GenerateContentRequest::new(request))
            .send()
            .await
            .map_err(|err| AnalysisError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| AnalysisError::Transport(format!("unreadable Gemini response: {err}")))?;

        payload.into_text().ok_or(AnalysisError::EmptyResponse)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: GeminiContent<'a>,
    contents: Vec<GeminiContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(request: &'a AnalysisRequest) -> Self {
        Self {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: &request.system_instruction,
                }],
            },
            contents: vec![GeminiContent {
                role: Some("user"),
                parts: vec![GeminiPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: &request.schema,
            },
        }
    }
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text = candidate
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect::<String>();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
