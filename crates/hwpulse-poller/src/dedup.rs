//! Last-sent message log. One entry per subject for the process lifetime;
//! a message goes out only when it differs from the subject's stored text.

use std::collections::HashMap;

/// Reserved subject under which scheduler failures are deduplicated.
pub const ERROR_SUBJECT: &str = "error";

/// Per-subject memory of the last message sent.
#[derive(Debug, Default)]
pub struct SentLog {
    last: HashMap<String, String>,
}

impl SentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff nothing was ever sent for `subject`, or the stored text
    /// differs from `text`.
    pub fn should_send(&self, subject: &str, text: &str) -> bool {
        self.last.get(subject).map(String::as_str) != Some(text)
    }

    /// Remember `text` as the last message for `subject`. Call after a send
    /// attempt — attempted, not necessarily delivered.
    pub fn record(&mut self, subject: &str, text: &str) {
        self.last.insert(subject.to_string(), text.to_string());
    }

    /// Forget the stored text for `subject`, so an identical future message
    /// is sent again.
    pub fn clear(&mut self, subject: &str) {
        self.last.remove(subject);
    }
}
