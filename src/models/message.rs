use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };

/// A unit of communication exchanged through the digital mail system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message body as written by the sender
    pub content: String,

    /// Language code the content is written in
    pub source_language: String,

    /// Language code the recipient wants to read, if any
    pub target_language: Option<String>,

    pub sender: String,
    pub recipient: String,
    pub timestamp: DateTime<Utc>,

    /// Filled in by the translation service, never by callers
    #[serde(default, skip_deserializing)]
    translation: Option<String>,
}

impl Message {
    pub fn new(
        content: impl Into<String>,
        source_language: impl Into<String>,
        sender: impl Into<String>,
        recipient: impl Into<String>
    ) -> Self {
        Self {
            content: content.into(),
            source_language: source_language.into(),
            target_language: None,
            sender: sender.into(),
            recipient: recipient.into(),
            timestamp: Utc::now(),
            translation: None,
        }
    }

    pub fn with_target_language(mut self, target_language: impl Into<String>) -> Self {
        self.target_language = Some(target_language.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    pub fn is_translated(&self) -> bool {
        self.translation.is_some()
    }

    /// Text to show the recipient: the translation when present, the original otherwise
    pub fn display_text(&self) -> &str {
        self.translation.as_deref().unwrap_or(&self.content)
    }

    /// Whether source and target name the same language (codes compare case-insensitively)
    pub fn is_same_language(&self) -> bool {
        self.target_language
            .as_deref()
            .map_or(false, |target| target.eq_ignore_ascii_case(&self.source_language))
    }

    pub(crate) fn set_translation(&mut self, translated: impl Into<String>) {
        self.translation = Some(translated.into());
    }
}
