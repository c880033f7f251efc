use log::{ debug, info, warn };

use crate::config::ConfigError;
use crate::models::{ Message, TranslationStatistics };
use crate::traits::translator::Translator;

/// Source-language marker recorded for translations requested without a message
pub const UNKNOWN_SOURCE_LANGUAGE: &str = "AUTO";

/// Translates messages through an ordered chain of providers, falling back on failure.
///
/// Providers are attempted in the order given at construction. The first
/// success wins; a provider failure only moves the chain along. Running out
/// of providers is reported as `false`/`None`, never as an error.
pub struct TranslationService {
    providers: Vec<Box<dyn Translator>>,
    history: Vec<Message>,
}

impl TranslationService {
    /// Fails with [`ConfigError::NoProviders`] when the chain is empty
    pub fn new(providers: Vec<Box<dyn Translator>>) -> Result<Self, ConfigError> {
        if providers.is_empty() {
            return Err(ConfigError::NoProviders);
        }

        info!(
            "Translation service ready with {} provider(s): {}",
            providers.len(),
            providers
                .iter()
                .map(|p| p.provider_name())
                .collect::<Vec<_>>()
                .join(" -> ")
        );

        Ok(Self {
            providers,
            history: Vec::new(),
        })
    }

    /// Translate a message in place.
    ///
    /// Returns `true` when the message ends up with a translation. A message
    /// whose source and target language match is translated to itself without
    /// consulting any provider. A translation is assigned once; messages that
    /// already carry one are left untouched.
    pub fn translate_message(&mut self, message: &mut Message) -> bool {
        if message.is_translated() {
            debug!("Message from {} is already translated; skipping", message.sender);
            return true;
        }

        let target = match message.target_language.clone() {
            Some(target) => target,
            None => {
                warn!("Message has no target language; keeping original text");
                return false;
            }
        };

        if message.is_same_language() {
            info!("Source and target language are both {}; no translation needed", target);
            message.set_translation(message.content.clone());
            return true;
        }

        match self.run_chain(&message.content, &target) {
            Some(translated) => {
                message.set_translation(translated);
                self.history.push(message.clone());
                true
            }
            None => false,
        }
    }

    /// Translate bare text, returning `None` when every provider fails
    pub fn translate_text(&mut self, text: &str, target_language: &str) -> Option<String> {
        let translated = self.run_chain(text, target_language)?;

        let mut record = Message::new(text, UNKNOWN_SOURCE_LANGUAGE, "", "")
            .with_target_language(target_language);
        record.set_translation(translated.clone());
        self.history.push(record);

        Some(translated)
    }

    /// Like [`translate_text`](Self::translate_text), but hands back the input when the chain is exhausted
    pub fn translate_or_original(&mut self, text: &str, target_language: &str) -> String {
        self.translate_text(text, target_language).unwrap_or_else(|| text.to_string())
    }

    pub fn statistics(&self) -> TranslationStatistics {
        TranslationStatistics {
            provider_count: self.providers.len(),
            provider_names: self.provider_names(),
            translated_count: self.history.len(),
        }
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.providers
            .iter()
            .map(|p| p.provider_name().to_string())
            .collect()
    }

    /// Copy of the messages translated so far, oldest first
    pub fn history(&self) -> Vec<Message> {
        self.history.clone()
    }

    pub fn clear_history(&mut self) {
        debug!("Clearing {} history entries", self.history.len());
        self.history.clear();
    }

    // Single pass over the chain; stops at the first provider that succeeds.
    fn run_chain(&self, text: &str, target_language: &str) -> Option<String> {
        let total = self.providers.len();
        for (attempt, provider) in self.providers.iter().enumerate() {
            info!("Attempt {}/{}: using {}", attempt + 1, total, provider.provider_name());

            match provider.translate(text, target_language) {
                Ok(translated) => {
                    info!("Translation succeeded with {}", provider.provider_name());
                    return Some(translated);
                }
                Err(e) => {
                    warn!("{}", e);
                    if attempt + 1 < total {
                        debug!("Trying next provider");
                    }
                }
            }
        }

        warn!("All {} providers failed for target language {}; keeping original text", total, target_language);
        None
    }
}
