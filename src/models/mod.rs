pub mod message;
pub mod language;
pub mod statistics;

// Re-export common model types
pub use message::Message;
pub use language::{ SupportedLanguages, DEFAULT_SUPPORTED_LANGUAGES };
pub use statistics::{ TranslationStatistics, UsageStats };
