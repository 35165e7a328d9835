//! Best-effort notification delivery: transport errors are logged and
//! dropped, never surfaced to the poll loop.

use hwpulse_core::traits::Messenger;

/// Wraps the chat channel and swallows its failures.
pub struct Notifier<M: Messenger> {
    channel: M,
}

impl<M: Messenger> Notifier<M> {
    pub fn new(channel: M) -> Self {
        Self { channel }
    }

    /// Deliver `text` to the chat. Never fails observably: transport errors
    /// are logged and dropped.
    pub async fn notify(&self, text: &str) {
        tracing::debug!("📨 sending notification: {text}");
        match self.channel.send(text).await {
            Ok(()) => tracing::info!("✅ notification sent"),
            Err(e) => tracing::error!("⚠️ notification dropped: {e}"),
        }
    }
}
