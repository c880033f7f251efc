pub mod translator;
pub mod backend;
pub mod observer;

// Re-export traits
pub use translator::Translator;
pub use backend::{ DeepLBackend, GoogleBackend };
pub use observer::{ Observer, Subject };
