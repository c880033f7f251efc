use serde_json::Value;

use crate::errors::BackendError;
use crate::models::UsageStats;

/// Interface of the Google Translate client library
pub trait GoogleBackend {
    /// Returns the translated text directly
    fn translate_text(&self, text: &str, destination: &str) -> Result<String, BackendError>;

    fn supported_languages(&self) -> Vec<String>;
}

/// Interface of the DeepL client library
pub trait DeepLBackend {
    /// Returns the raw response document, translations nested inside
    fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>
    ) -> Result<Value, BackendError>;

    fn usage_stats(&self) -> Result<UsageStats, BackendError>;
}
