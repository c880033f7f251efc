use crate::errors::TranslationResult;

/// Uniform translation contract every provider adapter implements
pub trait Translator {
    /// Human-readable provider name used in logs and statistics
    fn provider_name(&self) -> &str;

    /// Translate `text` into the language identified by `target_language`
    fn translate(&self, text: &str, target_language: &str) -> TranslationResult<String>;
}

