use serde::{ Deserialize, Serialize };

/// Snapshot of a translation service, computed on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationStatistics {
    pub provider_count: usize,
    pub provider_names: Vec<String>,
    pub translated_count: usize,
}

/// Character usage reported by the DeepL backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub character_count: usize,
    pub character_limit: usize,
}

impl UsageStats {
    pub fn remaining(&self) -> usize {
        self.character_limit.saturating_sub(self.character_count)
    }
}
