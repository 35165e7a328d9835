//! One poll cycle: fetch → validate → interpret → dedup → notify.

use hwpulse_core::error::Result;
use hwpulse_core::traits::{Messenger, StatusSource};

use crate::dedup::SentLog;
use crate::notify::Notifier;
use crate::validate::validate;
use crate::verdict::interpret;

/// Runs a single fetch-validate-interpret-notify pass and advances the
/// checkpoint cursor.
pub struct PollCycle<S: StatusSource, M: Messenger> {
    source: S,
    notifier: Notifier<M>,
}

impl<S: StatusSource, M: Messenger> PollCycle<S, M> {
    pub fn new(source: S, notifier: Notifier<M>) -> Self {
        Self { source, notifier }
    }

    /// The notifier, for callers that report their own failures to the chat.
    pub fn notifier(&self) -> &Notifier<M> {
        &self.notifier
    }

    /// Run one cycle starting at `checkpoint`; returns the checkpoint for
    /// the next window. Every record must interpret cleanly before anything
    /// is sent — one bad record aborts the batch with nothing delivered.
    pub async fn run(&self, checkpoint: i64, sent: &mut SentLog) -> Result<i64> {
        let raw = self.source.fetch(checkpoint).await?;
        let response = validate(&raw)?;
        // Absent only when the server sends a non-integer current_date;
        // the window then stays where it was instead of crashing.
        let next = response.current_date.unwrap_or(checkpoint);

        if response.homeworks.is_empty() {
            tracing::debug!("no homework updates in this window");
            return Ok(next);
        }

        let mut updates = Vec::with_capacity(response.homeworks.len());
        for record in &response.homeworks {
            updates.push(interpret(record)?);
        }

        for note in updates {
            if sent.should_send(&note.subject, &note.text) {
                self.notifier.notify(&note.text).await;
                sent.record(&note.subject, &note.text);
            } else {
                tracing::debug!("suppressing repeat for '{}'", note.subject);
            }
        }

        Ok(next)
    }
}
