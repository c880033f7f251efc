use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::models::Message;
use crate::traits::observer::Observer;

/// Shared sink the notifiers deliver into, in delivery order
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, line: String) {
        self.lines.borrow_mut().push(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Remove and return everything delivered so far
    pub fn drain(&self) -> Vec<String> {
        self.lines.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

fn preview(content: &str, max_chars: usize) -> String {
    content.chars().take(max_chars).collect()
}

/// Push notification for the web client
#[derive(Debug)]
pub struct WebNotifier {
    outbox: Outbox,
}

impl WebNotifier {
    pub fn new(outbox: Outbox) -> Self {
        Self { outbox }
    }
}

impl Observer for WebNotifier {
    fn name(&self) -> &str {
        "WebNotifier"
    }

    fn update(&self, message: &Message) {
        debug!("{} received message from {}", self.name(), message.sender);
        self.outbox.push(
            format!(
                "[WEB] Push notification: 'New message from {}: {}...'",
                message.sender,
                preview(&message.content, 20)
            )
        );
    }
}

/// E-mail alert to the recipient's inbox
#[derive(Debug)]
pub struct EmailNotifier {
    outbox: Outbox,
}

impl EmailNotifier {
    pub fn new(outbox: Outbox) -> Self {
        Self { outbox }
    }
}

impl Observer for EmailNotifier {
    fn name(&self) -> &str {
        "EmailNotifier"
    }

    fn update(&self, message: &Message) {
        debug!("{} received message from {}", self.name(), message.sender);
        self.outbox.push(
            format!(
                "[EMAIL] Sending e-mail to {}: 'Subject: New message from {}'",
                message.recipient,
                message.sender
            )
        );
    }
}

/// Notification for the mobile app
#[derive(Debug)]
pub struct MobileNotifier {
    outbox: Outbox,
}

impl MobileNotifier {
    pub fn new(outbox: Outbox) -> Self {
        Self { outbox }
    }
}

impl Observer for MobileNotifier {
    fn name(&self) -> &str {
        "MobileNotifier"
    }

    fn update(&self, message: &Message) {
        debug!("{} received message from {}", self.name(), message.sender);
        self.outbox.push(
            format!(
                "[MOBILE] Notification (Ping!): '{} said: {}...'",
                message.sender,
                preview(&message.content, 15)
            )
        );
    }
}
