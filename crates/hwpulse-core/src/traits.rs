//! Trait seams for the two opaque capabilities the poll loop depends on:
//! fetching the raw status feed and delivering a chat message. The cycle is
//! written against these so tests can swap in in-memory fakes.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Produces the raw, possibly malformed status payload for a poll window.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch everything that changed since `from_date` (epoch seconds).
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

/// Delivers one plain-text message to the configured chat.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}
