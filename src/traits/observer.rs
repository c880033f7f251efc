use std::rc::Rc;

use crate::models::Message;

/// Receives pushed updates from a subject
pub trait Observer {
    fn name(&self) -> &str;

    fn update(&self, message: &Message);
}

/// Keeps a set of observers and notifies them of changes
pub trait Subject {
    /// Returns false when the observer was already attached
    fn attach(&mut self, observer: Rc<dyn Observer>) -> bool;

    /// Returns false when the observer was not attached
    fn detach(&mut self, observer: &Rc<dyn Observer>) -> bool;

    fn notify(&self);
}
