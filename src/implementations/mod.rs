pub mod backends;
pub mod adapters;
pub mod translation_service;
pub mod notifiers;
pub mod message_system;
