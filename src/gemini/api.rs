use std::{
    collections::HashSet,
    time::Duration,
};

use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};

use super::prompts;
use crate::core::{
    errors::StudyWiseError,
    models::{
        ChatTurn,
        DocumentKind,
        ScholarshipFilters,
        SearchOutcome,
    },
};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_SEARCH_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_REVIEW_MODEL: &str = "gemini-3-pro-preview";

// Shown when the service answers successfully but with an empty payload.
const EMPTY_CHAT_REPLY: &str = "I'm sorry, I couldn't process that.";
const EMPTY_SEARCH_REPLY: &str = "No scholarship details were found for your query.";
const EMPTY_REVIEW_REPLY: &str = "Failed to analyze document.";

/// Client for the Gemini `generateContent` endpoint. Cheap to clone, so each
/// background task can carry its own copy.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    chat_model: String,
    search_model: String,
    review_model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        chat_model: impl Into<String>,
        search_model: impl Into<String>,
        review_model: impl Into<String>,
    ) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to build Gemini HTTP client");

        Self {
            http,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            chat_model: chat_model.into(),
            search_model: search_model.into(),
            review_model: review_model.into(),
        }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends the latest turn with the advisor persona as the standing
    /// instruction. The upstream chat is stateless; earlier turns only live
    /// in the local transcript.
    pub async fn consult(&self, transcript: &[ChatTurn]) -> Result<String, StudyWiseError> {
        let request = chat_request(transcript)?;

        let response = self.generate(&self.chat_model, &request).await?;

        Ok(non_empty_or(first_candidate_text(&response), EMPTY_CHAT_REPLY))
    }

    pub async fn search_scholarships(
        &self,
        filters: &ScholarshipFilters,
    ) -> Result<SearchOutcome, StudyWiseError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompts::scholarship_prompt(filters))],
            system_instruction: None,
            tools: vec![Tool::google_search()],
        };

        let response = self.generate(&self.search_model, &request).await?;

        let text = non_empty_or(first_candidate_text(&response), EMPTY_SEARCH_REPLY);
        let urls = grounded_urls(&response);

        Ok(SearchOutcome { text, urls })
    }

    pub async fn review_document(
        &self,
        draft: &str,
        kind: DocumentKind,
    ) -> Result<String, StudyWiseError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompts::review_prompt(draft, kind))],
            system_instruction: None,
            tools: Vec::new(),
        };

        let response = self.generate(&self.review_model, &request).await?;

        Ok(non_empty_or(first_candidate_text(&response), EMPTY_REVIEW_REPLY))
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, StudyWiseError> {
        let api_key = self.api_key.as_deref().ok_or(StudyWiseError::MissingApiKey)?;
        let url = format!("{}/{}:generateContent?key={}", BASE_URL, model, api_key);

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}

fn chat_request(transcript: &[ChatTurn]) -> Result<GenerateContentRequest, StudyWiseError> {
    let latest = transcript
        .last()
        .ok_or_else(|| StudyWiseError::Custom("consultant transcript is empty".to_string()))?;

    Ok(GenerateContentRequest {
        contents: vec![Content::user(latest.text.clone())],
        system_instruction: Some(Content::system(prompts::ADVISOR_PERSONA.to_string())),
        tools: Vec::new(),
    })
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn user(text: String) -> Self {
        Content { role: "user".to_string(), parts: vec![Part { text }] }
    }

    fn system(text: String) -> Self {
        Content { role: "system".to_string(), parts: vec![Part { text }] }
    }
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize, Default)]
struct Tool {
    #[serde(rename = "google_search")]
    google_search: GoogleSearchConfig,
}

impl Tool {
    fn google_search() -> Self {
        Tool::default()
    }
}

#[derive(Serialize, Default)]
struct GoogleSearchConfig {}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    uri: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn first_candidate_text(response: &GenerateContentResponse) -> String {
    let parts = response
        .candidates
        .as_deref()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| content.parts.as_slice())
        .unwrap_or_default();

    let mut text = String::new();
    for part in parts {
        if let Some(chunk) = &part.text {
            text.push_str(chunk);
        }
    }

    text
}

fn non_empty_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Source links from the first candidate's grounding metadata, deduplicated
/// in first-seen order. Empty and malformed URIs are dropped.
fn grounded_urls(response: &GenerateContentResponse) -> Vec<String> {
    let chunks = response
        .candidates
        .as_deref()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.grounding_metadata.as_ref())
        .map(|metadata| metadata.grounding_chunks.as_slice())
        .unwrap_or_default();

    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for chunk in chunks {
        let Some(uri) = chunk.web.as_ref().and_then(|web| web.uri.as_deref()) else {
            continue;
        };

        if uri.is_empty() || reqwest::Url::parse(uri).is_err() {
            continue;
        }

        if seen.insert(uri.to_string()) {
            urls.push(uri.to_string());
        }
    }

    urls
}

fn api_error(status: u16, body: &str) -> StudyWiseError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .ok()
        .and_then(|wrapper| wrapper.error.message)
        .unwrap_or_else(|| body.to_string());

    StudyWiseError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response_from(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).expect("test fixture should deserialize")
    }

    #[test]
    fn request_wire_shape_matches_the_service() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello".to_string())],
            system_instruction: Some(Content::system("persona".to_string())),
            tools: vec![Tool::google_search()],
        };

        let value = serde_json::to_value(&request).expect("request should serialize");

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["system_instruction"]["role"], "system");
        assert!(value["tools"][0]["google_search"].is_object());
    }

    #[test]
    fn optional_request_fields_are_omitted_when_unused() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello".to_string())],
            system_instruction: None,
            tools: Vec::new(),
        };

        let value = serde_json::to_value(&request).expect("request should serialize");

        assert!(value.get("system_instruction").is_none());
        assert!(value.get("tools").is_none());
    }

    #[test]
    fn chat_request_sends_only_the_latest_turn() {
        let transcript = vec![
            ChatTurn::assistant("Namaste!"),
            ChatTurn::user("Tell me about Germany"),
            ChatTurn::assistant("Germany has tuition-free public universities."),
            ChatTurn::user("What about Ireland?"),
        ];

        let request = chat_request(&transcript).expect("non-empty transcript");
        let value = serde_json::to_value(&request).expect("request should serialize");

        assert_eq!(value["contents"].as_array().map(|c| c.len()), Some(1));
        assert_eq!(value["contents"][0]["parts"][0]["text"], "What about Ireland?");
        let persona = value["system_instruction"]["parts"][0]["text"]
            .as_str()
            .expect("persona should be attached");
        assert!(persona.starts_with("You are StudyWise AI"));
    }

    #[test]
    fn chat_request_rejects_an_empty_transcript() {
        if let Err(StudyWiseError::Custom(message)) = chat_request(&[]) {
            assert!(message.contains("empty"));
        } else {
            panic!("expected a Custom error for an empty transcript");
        }
    }

    #[test]
    fn first_candidate_text_joins_all_parts() {
        let response = response_from(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Part one. " },
                        { "text": "Part two." }
                    ]
                }
            }]
        }));

        assert_eq!(first_candidate_text(&response), "Part one. Part two.");
    }

    #[test]
    fn empty_payloads_map_to_the_fixed_fallbacks() {
        let empty = response_from(json!({}));

        assert_eq!(
            non_empty_or(first_candidate_text(&empty), EMPTY_CHAT_REPLY),
            "I'm sorry, I couldn't process that."
        );
        assert_eq!(
            non_empty_or(first_candidate_text(&empty), EMPTY_SEARCH_REPLY),
            "No scholarship details were found for your query."
        );
        assert_eq!(
            non_empty_or(first_candidate_text(&empty), EMPTY_REVIEW_REPLY),
            "Failed to analyze document."
        );
    }

    #[test]
    fn grounded_urls_deduplicate_in_first_seen_order() {
        let response = response_from(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "answer" }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://daad.de/scholarships" } },
                        { "web": { "uri": "https://chevening.org" } },
                        { "web": { "uri": "https://daad.de/scholarships" } },
                        { "web": { "uri": "" } },
                        { "web": { "uri": "not a url" } },
                        { "web": {} },
                        {},
                        { "web": { "uri": "https://chevening.org" } }
                    ]
                }
            }]
        }));

        assert_eq!(
            grounded_urls(&response),
            vec!["https://daad.de/scholarships".to_string(), "https://chevening.org".to_string()]
        );
    }

    #[test]
    fn grounded_urls_handle_missing_metadata() {
        let response = response_from(json!({
            "candidates": [{ "content": { "parts": [{ "text": "answer" }] } }]
        }));

        assert!(grounded_urls(&response).is_empty());
    }

    #[test]
    fn api_error_prefers_the_service_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;

        if let StudyWiseError::Api { status, message } = api_error(400, body) {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid");
        } else {
            panic!("expected an Api error");
        }
    }

    #[test]
    fn api_error_falls_back_to_the_raw_body() {
        if let StudyWiseError::Api { status, message } = api_error(502, "Bad Gateway") {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        } else {
            panic!("expected an Api error");
        }
    }

    #[test]
    fn operations_require_an_api_key() {
        let client = GeminiClient::new(
            None,
            DEFAULT_CHAT_MODEL,
            DEFAULT_SEARCH_MODEL,
            DEFAULT_REVIEW_MODEL,
        );
        let runtime = tokio::runtime::Runtime::new().expect("test runtime");

        let result = runtime.block_on(client.consult(&[ChatTurn::user("hi")]));

        assert!(matches!(result, Err(StudyWiseError::MissingApiKey)));
    }

    #[test]
    fn blank_api_keys_are_treated_as_missing() {
        let client = GeminiClient::new(
            Some("   ".to_string()),
            DEFAULT_CHAT_MODEL,
            DEFAULT_SEARCH_MODEL,
            DEFAULT_REVIEW_MODEL,
        );

        assert!(!client.has_key());
    }
}
