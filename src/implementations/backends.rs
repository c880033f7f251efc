use std::cell::Cell;

use log::debug;
use serde_json::{ json, Value };

use crate::errors::BackendError;
use crate::models::UsageStats;
use crate::traits::backend::{ DeepLBackend, GoogleBackend };

/// Default monthly character allowance of the DeepL free tier
pub const DEEPL_DEFAULT_CHARACTER_LIMIT: usize = 500_000;

/// Stand-in for the Google Translate client. No requests leave the process.
#[derive(Debug, Clone)]
pub struct GoogleTranslateApi {
    available: bool,
}

impl GoogleTranslateApi {
    pub fn new() -> Self {
        Self { available: true }
    }

    /// A client whose every call fails as if the service were down
    pub fn unavailable() -> Self {
        Self { available: false }
    }
}

impl Default for GoogleTranslateApi {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleBackend for GoogleTranslateApi {
    fn translate_text(&self, text: &str, destination: &str) -> Result<String, BackendError> {
        if !self.available {
            return Err(BackendError::Unavailable("translate.googleapis.com".to_string()));
        }
        if text.is_empty() {
            return Err(BackendError::EmptyText);
        }
        debug!("Google backend translating {} characters to {}", text.chars().count(), destination);
        Ok(format!("[Google] {} -> {}", text, destination))
    }

    fn supported_languages(&self) -> Vec<String> {
        ["EN", "PT", "ES", "FR", "DE", "IT", "JA", "ZH"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }
}

/// Stand-in for the DeepL client. Responses are JSON documents shaped like the real API's.
#[derive(Debug)]
pub struct DeepLApi {
    available: bool,
    character_limit: usize,
    character_count: Cell<usize>,
}

impl DeepLApi {
    pub fn new() -> Self {
        Self::with_character_limit(DEEPL_DEFAULT_CHARACTER_LIMIT)
    }

    pub fn with_character_limit(character_limit: usize) -> Self {
        Self {
            available: true,
            character_limit,
            character_count: Cell::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }
}

impl Default for DeepLApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DeepLBackend for DeepLApi {
    fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>
    ) -> Result<Value, BackendError> {
        if !self.available {
            return Err(BackendError::Unavailable("api-free.deepl.com".to_string()));
        }
        if text.is_empty() {
            return Err(BackendError::EmptyText);
        }

        let used = self.character_count.get() + text.chars().count();
        if used > self.character_limit {
            return Err(BackendError::QuotaExceeded {
                used: self.character_count.get(),
                limit: self.character_limit,
            });
        }
        self.character_count.set(used);
        debug!("DeepL backend usage now {}/{}", used, self.character_limit);

        Ok(json!({
            "translations": [{
                "detected_source_language": source_lang.unwrap_or("auto"),
                "text": format!("[DeepL] {} translated to {}", text, target_lang),
            }],
            "metadata": {
                "provider": "deepl",
                "confidence": 0.95,
            },
        }))
    }

    fn usage_stats(&self) -> Result<UsageStats, BackendError> {
        if !self.available {
            return Err(BackendError::Unavailable("api-free.deepl.com".to_string()));
        }
        Ok(UsageStats {
            character_count: self.character_count.get(),
            character_limit: self.character_limit,
        })
    }
}
