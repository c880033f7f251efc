use serde::{ Deserialize, Serialize };

use crate::config::ConfigError;

/// ISO 639-1 codes accepted by every adapter unless configured otherwise
pub const DEFAULT_SUPPORTED_LANGUAGES: [&str; 10] = [
    "PT",
    "EN",
    "ES",
    "FR",
    "DE",
    "IT",
    "JA",
    "ZH",
    "AR",
    "RU",
];

/// Allow-list of two-letter language codes, stored upper-case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SupportedLanguages {
    codes: Vec<String>,
}

impl SupportedLanguages {
    /// Build an allow-list, rejecting anything that is not two ASCII letters
    pub fn from_codes<I, S>(codes: I) -> Result<Self, ConfigError>
        where I: IntoIterator<Item = S>, S: AsRef<str>
    {
        let mut normalized: Vec<String> = Vec::new();
        for code in codes {
            let code = code.as_ref().trim();
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ConfigError::InvalidLanguageCode(code.to_string()));
            }
            let code = code.to_ascii_uppercase();
            if !normalized.contains(&code) {
                normalized.push(code);
            }
        }
        Ok(Self { codes: normalized })
    }

    /// Case-insensitive membership check
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c.eq_ignore_ascii_case(code.trim()))
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for SupportedLanguages {
    fn default() -> Self {
        Self {
            codes: DEFAULT_SUPPORTED_LANGUAGES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for SupportedLanguages {
    type Error = ConfigError;

    fn try_from(codes: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_codes(codes)
    }
}

impl From<SupportedLanguages> for Vec<String> {
    fn from(languages: SupportedLanguages) -> Self {
        languages.codes
    }
}
