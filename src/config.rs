use serde::{ Deserialize, Serialize };
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::implementations::adapters::{ DeepLAdapter, GoogleAdapter };
use crate::implementations::backends::{ DeepLApi, GoogleTranslateApi, DEEPL_DEFAULT_CHARACTER_LIMIT };
use crate::implementations::translation_service::TranslationService;
use crate::models::SupportedLanguages;
use crate::traits::translator::Translator;

/// Environment variable that overrides provider order, e.g. `deepl,google`
pub const PROVIDERS_ENV_VAR: &str = "CORREIO_PROVIDERS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Unknown translation provider: {0}")]
    UnknownProvider(String),

    #[error("Invalid language code: {0:?} (expected two ASCII letters)")]
    InvalidLanguageCode(String),

    #[error("At least one translation provider is required")]
    NoProviders,
}

/// Translation backends the service knows how to wire up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    DeepL,
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" | "google-translate" => Ok(ProviderKind::Google),
            "deepl" => Ok(ProviderKind::DeepL),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Google => write!(f, "google"),
            ProviderKind::DeepL => write!(f, "deepl"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Which backend to adapt
    pub kind: ProviderKind,

    /// When false the backend behaves as if the remote service were down
    #[serde(default = "default_available")]
    pub available: bool,

    /// Character allowance (DeepL only)
    #[serde(default)]
    pub character_limit: Option<usize>,
}

fn default_available() -> bool {
    true
}

impl ProviderConfig {
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            available: true,
            character_limit: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CorreioConfig {
    /// Language codes every adapter accepts
    #[serde(default)]
    pub supported_languages: SupportedLanguages,

    /// Providers in priority order
    pub providers: Vec<ProviderConfig>,
}

impl CorreioConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: CorreioConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    /// Reorder or select providers from [`PROVIDERS_ENV_VAR`] if it is set
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        use log::{ debug, info };

        match std::env::var(PROVIDERS_ENV_VAR) {
            Ok(value) => {
                info!("Using provider order from {}: {}", PROVIDERS_ENV_VAR, value);
                self.apply_provider_order(&value)
            }
            Err(_) => {
                debug!("{} not set, keeping configured provider order", PROVIDERS_ENV_VAR);
                Ok(())
            }
        }
    }

    /// Rebuild the provider list from a comma-separated list of provider kinds.
    ///
    /// Settings of providers already configured are kept; new ones get defaults.
    pub fn apply_provider_order(&mut self, order: &str) -> Result<(), ConfigError> {
        let mut providers = Vec::new();
        for name in order.split(',').filter(|s| !s.trim().is_empty()) {
            let kind: ProviderKind = name.parse()?;
            if providers.iter().any(|p: &ProviderConfig| p.kind == kind) {
                continue;
            }
            let existing = self.providers
                .iter()
                .find(|p| p.kind == kind)
                .cloned()
                .unwrap_or_else(|| ProviderConfig::new(kind));
            providers.push(existing);
        }

        if providers.is_empty() {
            return Err(ConfigError::NoProviders);
        }
        self.providers = providers;
        Ok(())
    }

    /// Wire adapters for every configured provider into a translation service
    pub fn build_service(&self) -> Result<TranslationService, ConfigError> {
        let providers: Vec<Box<dyn Translator>> = self.providers
            .iter()
            .map(|p| self.build_translator(p))
            .collect();
        TranslationService::new(providers)
    }

    pub fn build_deepl_adapter(&self, provider: &ProviderConfig) -> DeepLAdapter {
        let limit = provider.character_limit.unwrap_or(DEEPL_DEFAULT_CHARACTER_LIMIT);
        let api = if provider.available {
            DeepLApi::with_character_limit(limit)
        } else {
            DeepLApi::unavailable()
        };
        DeepLAdapter::with_languages(api, self.supported_languages.clone())
    }

    pub fn build_google_adapter(&self, provider: &ProviderConfig) -> GoogleAdapter {
        let api = if provider.available {
            GoogleTranslateApi::new()
        } else {
            GoogleTranslateApi::unavailable()
        };
        GoogleAdapter::with_languages(api, self.supported_languages.clone())
    }

    fn build_translator(&self, provider: &ProviderConfig) -> Box<dyn Translator> {
        match provider.kind {
            ProviderKind::Google => Box::new(self.build_google_adapter(provider)),
            ProviderKind::DeepL => Box::new(self.build_deepl_adapter(provider)),
        }
    }
}

/// Google first, DeepL as fallback, default language set
impl Default for CorreioConfig {
    fn default() -> Self {
        CorreioConfig {
            supported_languages: SupportedLanguages::default(),
            providers: vec![
                ProviderConfig::new(ProviderKind::Google),
                ProviderConfig::new(ProviderKind::DeepL)
            ],
        }
    }
}
