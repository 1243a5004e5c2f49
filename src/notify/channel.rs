// Ready-made subscribers

use super::Subscriber;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

/// Ordered output lines shared between several [`Channel`]s
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    /// Transcript wrapped for sharing between channels
    pub fn shared() -> Rc<RefCell<Transcript>> {
        Rc::new(RefCell::new(Transcript::new()))
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Remove and return every line recorded so far
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

/// Named subscriber that writes `Channel <name>: <message>` lines
#[derive(Debug)]
pub struct Channel {
    name: String,
    transcript: Rc<RefCell<Transcript>>,
}

impl Channel {
    pub fn new(name: impl Into<String>, transcript: Rc<RefCell<Transcript>>) -> Self {
        Channel {
            name: name.into(),
            transcript,
        }
    }
}

impl Subscriber for Channel {
    fn receive(&self, message: &str) {
        trace!(channel = %self.name, "received");
        self.transcript
            .borrow_mut()
            .push(format!("Channel {}: {}", self.name, message));
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Subscriber that keeps every message it receives
#[derive(Debug, Default)]
pub struct Inbox {
    messages: RefCell<Vec<String>>,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the received messages, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl Subscriber for Inbox {
    fn receive(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn name(&self) -> &str {
        "inbox"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationHub;

    #[test]
    fn test_channels_share_transcript() {
        let transcript = Transcript::shared();
        let one = Rc::new(Channel::new("1", Rc::clone(&transcript)));
        let two = Rc::new(Channel::new("2", Rc::clone(&transcript)));

        let mut hub = NotificationHub::new();
        hub.subscribe(one);
        hub.subscribe(two);
        hub.publish("hi");

        let lines = transcript.borrow_mut().drain();
        assert_eq!(lines, vec!["Channel 1: hi", "Channel 2: hi"]);
        assert!(transcript.borrow().lines.is_empty());
    }

    #[test]
    fn test_inbox_records_in_order() {
        let inbox = Rc::new(Inbox::new());
        let mut hub = NotificationHub::new();
        hub.subscribe(inbox.clone());

        hub.publish("first");
        hub.publish(String::from("second"));
        assert_eq!(inbox.messages(), vec!["first", "second"]);
        assert_eq!(inbox.len(), 2);
    }
}
