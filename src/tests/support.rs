use std::cell::{ Cell, RefCell };
use std::rc::Rc;

use dotenv::dotenv;
use log::{ debug, info };
use serde_json::Value;

use crate::errors::{ BackendError, TranslationError, TranslationResult };
use crate::models::UsageStats;
use crate::traits::backend::{ DeepLBackend, GoogleBackend };
use crate::traits::translator::Translator;

// Setup function to initialize logging and environment
pub fn setup() {
    // Initialize logger if not already initialized
    if env_logger::builder().is_test(true).try_init().is_ok() {
        info!("Logger initialized");
    }

    if dotenv().is_ok() {
        debug!("Loaded environment variables from .env file");
    }
}

/// Ordered record of which scripted providers were called
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Translator double that always succeeds or always fails, recording every call
pub struct ScriptedTranslator {
    name: String,
    succeeds: bool,
    calls: CallLog,
}

impl ScriptedTranslator {
    pub fn succeeding(name: &str, calls: &CallLog) -> Box<dyn Translator> {
        Box::new(Self {
            name: name.to_string(),
            succeeds: true,
            calls: Rc::clone(calls),
        })
    }

    pub fn failing(name: &str, calls: &CallLog) -> Box<dyn Translator> {
        Box::new(Self {
            name: name.to_string(),
            succeeds: false,
            calls: Rc::clone(calls),
        })
    }
}

impl Translator for ScriptedTranslator {
    fn provider_name(&self) -> &str {
        &self.name
    }

    fn translate(&self, text: &str, target_language: &str) -> TranslationResult<String> {
        self.calls.borrow_mut().push(self.name.clone());
        if self.succeeds {
            Ok(format!("<{}> {} ({})", self.name, text, target_language))
        } else {
            Err(TranslationError::new(self.name.clone(), "simulated outage"))
        }
    }
}

/// Google-shaped backend that fails on every call and counts how often it was hit
#[derive(Default)]
pub struct BrokenGoogle {
    calls: Rc<Cell<usize>>,
}

impl BrokenGoogle {
    /// Handle to the call counter that stays valid after the adapter takes ownership
    pub fn counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl GoogleBackend for BrokenGoogle {
    fn translate_text(&self, _text: &str, _destination: &str) -> Result<String, BackendError> {
        self.calls.set(self.calls.get() + 1);
        Err(BackendError::Unavailable("simulated failure".to_string()))
    }

    fn supported_languages(&self) -> Vec<String> {
        Vec::new()
    }
}

/// DeepL-shaped backend returning a canned document
pub struct CannedDeepL {
    pub document: Value,
}

impl DeepLBackend for CannedDeepL {
    fn translate(
        &self,
        _text: &str,
        _target_lang: &str,
        _source_lang: Option<&str>
    ) -> Result<Value, BackendError> {
        Ok(self.document.clone())
    }

    fn usage_stats(&self) -> Result<UsageStats, BackendError> {
        Err(BackendError::Unavailable("usage endpoint down".to_string()))
    }
}
