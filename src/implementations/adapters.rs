use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{ BackendError, TranslationError, TranslationResult };
use crate::implementations::backends::{ DeepLApi, GoogleTranslateApi };
use crate::models::{ SupportedLanguages, UsageStats };
use crate::traits::backend::{ DeepLBackend, GoogleBackend };
use crate::traits::translator::Translator;

pub const GOOGLE_PROVIDER_NAME: &str = "Google Translate";
pub const DEEPL_PROVIDER_NAME: &str = "DeepL";

/// Adapts the Google client (`translate_text`, plain string result) to [`Translator`]
#[derive(Debug)]
pub struct GoogleAdapter<B = GoogleTranslateApi> {
    backend: B,
    languages: SupportedLanguages,
}

impl<B: GoogleBackend> GoogleAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self::with_languages(backend, SupportedLanguages::default())
    }

    pub fn with_languages(backend: B, languages: SupportedLanguages) -> Self {
        Self { backend, languages }
    }

    /// Languages the Google client itself advertises, independent of our allow-list
    pub fn backend_languages(&self) -> Vec<String> {
        self.backend.supported_languages()
    }
}

impl<B: GoogleBackend> Translator for GoogleAdapter<B> {
    fn provider_name(&self) -> &str {
        GOOGLE_PROVIDER_NAME
    }

    fn translate(&self, text: &str, target_language: &str) -> TranslationResult<String> {
        if !self.languages.contains(target_language) {
            return Err(TranslationError::unsupported_language(GOOGLE_PROVIDER_NAME, target_language));
        }

        let destination = target_language.trim().to_ascii_uppercase();
        debug!("Delegating to Google backend (destination={})", destination);
        self.backend
            .translate_text(text, &destination)
            .map_err(|e| TranslationError::new(GOOGLE_PROVIDER_NAME, e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct DeepLResponse {
    translations: Vec<DeepLTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeepLTranslation {
    text: String,
}

fn extract_first_translation(document: Value) -> Result<String, BackendError> {
    let response: DeepLResponse = serde_json::from_value(document)
        .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

    response.translations
        .into_iter()
        .next()
        .map(|t| t.text)
        .ok_or_else(|| BackendError::MalformedResponse("response contained no translations".to_string()))
}

/// Adapts the DeepL client (`translate`, nested JSON result) to [`Translator`]
#[derive(Debug)]
pub struct DeepLAdapter<B = DeepLApi> {
    backend: B,
    languages: SupportedLanguages,
}

impl<B: DeepLBackend> DeepLAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self::with_languages(backend, SupportedLanguages::default())
    }

    pub fn with_languages(backend: B, languages: SupportedLanguages) -> Self {
        Self { backend, languages }
    }

    /// Character usage of the wrapped DeepL account
    pub fn check_quota(&self) -> TranslationResult<UsageStats> {
        self.backend
            .usage_stats()
            .map_err(|e| TranslationError::new(DEEPL_PROVIDER_NAME, format!("could not check quota: {}", e)))
    }
}

impl<B: DeepLBackend> Translator for DeepLAdapter<B> {
    fn provider_name(&self) -> &str {
        DEEPL_PROVIDER_NAME
    }

    fn translate(&self, text: &str, target_language: &str) -> TranslationResult<String> {
        if !self.languages.contains(target_language) {
            return Err(TranslationError::unsupported_language(DEEPL_PROVIDER_NAME, target_language));
        }

        let target_lang = target_language.trim().to_ascii_uppercase();
        let document = self.backend
            .translate(text, &target_lang, None)
            .map_err(|e| TranslationError::new(DEEPL_PROVIDER_NAME, e.to_string()))?;

        extract_first_translation(document).map_err(|e|
            TranslationError::new(DEEPL_PROVIDER_NAME, e.to_string())
        )
    }
}
