use std::rc::Rc;

use log::info;

use crate::models::Message;
use crate::traits::observer::{ Observer, Subject };

/// Language recorded on messages received through the notification system
pub const DEFAULT_MESSAGE_LANGUAGE: &str = "PT";

/// Receives messages and pushes each new one to every attached observer
#[derive(Default)]
pub struct MessageSystem {
    observers: Vec<Rc<dyn Observer>>,
    messages: Vec<Message>,
}

impl MessageSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new message and notify observers about it.
    ///
    /// Returns how many observers were notified.
    pub fn receive(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        content: impl Into<String>
    ) -> usize {
        let message = Message::new(content, DEFAULT_MESSAGE_LANGUAGE, sender, recipient);
        info!("New message received from {}", message.sender);
        self.messages.push(message);
        self.notify();
        self.observers.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn latest(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Subject for MessageSystem {
    fn attach(&mut self, observer: Rc<dyn Observer>) -> bool {
        if self.observers.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            info!("{} is already attached", observer.name());
            return false;
        }
        info!("{} attached", observer.name());
        self.observers.push(observer);
        true
    }

    fn detach(&mut self, observer: &Rc<dyn Observer>) -> bool {
        match self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                self.observers.remove(index);
                info!("{} detached", observer.name());
                true
            }
            None => {
                info!("{} is not attached", observer.name());
                false
            }
        }
    }

    fn notify(&self) {
        let latest = match self.messages.last() {
            Some(message) => message,
            None => {
                return;
            }
        };

        info!("Notifying {} observer(s)", self.observers.len());
        for observer in &self.observers {
            observer.update(latest);
        }
    }
}
