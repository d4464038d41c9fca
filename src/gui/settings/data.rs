use serde::{
    Deserialize,
    Serialize,
};

use crate::gemini::{
    api::{
        DEFAULT_CHAT_MODEL,
        DEFAULT_REVIEW_MODEL,
        DEFAULT_SEARCH_MODEL,
    },
    GeminiClient,
};

/// Environment variables checked when no key is set in the settings file.
const KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub api_key: String,
    pub chat_model: String,
    pub search_model: String,
    pub review_model: String,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            search_model: DEFAULT_SEARCH_MODEL.to_string(),
            review_model: DEFAULT_REVIEW_MODEL.to_string(),
            dark_mode: true,
        }
    }
}

impl SettingsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// A non-empty settings override wins over the ambient environment
    /// credential.
    pub fn resolve_api_key(&self) -> Option<String> {
        if !self.api_key.trim().is_empty() {
            return Some(self.api_key.trim().to_string());
        }

        KEY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|key| !key.trim().is_empty())
    }

    pub fn build_client(&self) -> GeminiClient {
        GeminiClient::new(
            self.resolve_api_key(),
            &self.chat_model,
            &self.search_model,
            &self.review_model,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_models() {
        let settings = SettingsData::default();

        assert!(settings.api_key.is_empty());
        assert_eq!(settings.chat_model, "gemini-3-flash-preview");
        assert_eq!(settings.search_model, "gemini-3-flash-preview");
        assert_eq!(settings.review_model, "gemini-3-pro-preview");
        assert!(settings.dark_mode);
    }

    #[test]
    fn settings_key_override_wins() {
        let settings = SettingsData { api_key: "  abc123  ".to_string(), ..Default::default() };

        assert_eq!(settings.resolve_api_key().as_deref(), Some("abc123"));
    }

    #[test]
    fn partial_settings_files_fill_in_defaults() {
        let settings: SettingsData =
            serde_json::from_str(r#"{"api_key": "xyz"}"#).expect("partial file should parse");

        assert_eq!(settings.api_key, "xyz");
        assert_eq!(settings.chat_model, "gemini-3-flash-preview");
        assert!(settings.dark_mode);
    }
}
