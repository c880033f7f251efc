pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ ConfigError, CorreioConfig, ProviderConfig, ProviderKind };
pub use errors::{ BackendError, TranslationError, TranslationResult };
pub use implementations::{
    adapters::{ DeepLAdapter, GoogleAdapter },
    backends::{ DeepLApi, GoogleTranslateApi },
    message_system::MessageSystem,
    notifiers::{ EmailNotifier, MobileNotifier, Outbox, WebNotifier },
    translation_service::TranslationService,
};
pub use models::{
    message::Message,
    language::{ SupportedLanguages, DEFAULT_SUPPORTED_LANGUAGES },
    statistics::{ TranslationStatistics, UsageStats },
};
pub use traits::{ DeepLBackend, GoogleBackend, Observer, Subject, Translator };
