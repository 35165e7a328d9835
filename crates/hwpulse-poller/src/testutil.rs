//! In-memory fakes for the core trait seams.

use async_trait::async_trait;
use hwpulse_core::error::{HwPulseError, Result};
use hwpulse_core::traits::{Messenger, StatusSource};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays a scripted sequence of fetch results and records every
/// `from_date` it was asked for.
#[derive(Clone)]
pub struct ScriptedSource {
    responses: Arc<Mutex<VecDeque<Result<Value>>>>,
    pub fetched_from: Arc<Mutex<Vec<i64>>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<Value>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().collect())),
            fetched_from: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        self.fetched_from.lock().unwrap().push(from_date);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HwPulseError::Transport("script exhausted".into())))
    }
}

/// Records every send attempt; optionally fails them all.
#[derive(Clone, Default)]
pub struct RecordingMessenger {
    pub sent: Arc<Mutex<Vec<String>>>,
    fail_sends: bool,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A messenger whose every send attempt errors after being recorded.
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_sends: true,
        }
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        if self.fail_sends {
            Err(HwPulseError::Delivery("chat unavailable".into()))
        } else {
            Ok(())
        }
    }
}
