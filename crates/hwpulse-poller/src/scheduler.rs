//! The forever loop: run one cycle, report failures to the chat under the
//! reserved error subject, sleep the fixed period, repeat. No backoff and no
//! retry cap — the period is the only throttle.

use std::time::Duration;

use hwpulse_core::error::Result;
use hwpulse_core::traits::{Messenger, StatusSource};

use crate::cycle::PollCycle;
use crate::dedup::{ERROR_SUBJECT, SentLog};

/// Drives the poll cycle at a fixed period and owns all mutable loop state:
/// the checkpoint cursor and the per-subject sent log.
pub struct Scheduler<S: StatusSource, M: Messenger> {
    cycle: PollCycle<S, M>,
    sent: SentLog,
    checkpoint: i64,
    period: Duration,
}

impl<S: StatusSource, M: Messenger> Scheduler<S, M> {
    pub fn new(cycle: PollCycle<S, M>, start_checkpoint: i64, period: Duration) -> Self {
        Self {
            cycle,
            sent: SentLog::new(),
            checkpoint: start_checkpoint,
            period,
        }
    }

    pub fn checkpoint(&self) -> i64 {
        self.checkpoint
    }

    /// Loop forever. Only process termination stops this.
    pub async fn run(mut self) {
        tracing::info!(
            "⏰ poll loop started (every {}s, from_date={})",
            self.period.as_secs(),
            self.checkpoint
        );
        loop {
            self.step().await;
            tokio::time::sleep(self.period).await;
        }
    }

    /// Run exactly one cycle, propagating its failure. Used by `--once`.
    pub async fn run_cycle(&mut self) -> Result<i64> {
        let next = self.cycle.run(self.checkpoint, &mut self.sent).await?;
        if next != self.checkpoint {
            tracing::debug!("checkpoint advanced to {next}");
        }
        self.checkpoint = next;
        Ok(next)
    }

    /// One scheduler iteration without the sleep. A failed cycle becomes at
    /// most one chat notification; a clean cycle clears the error subject so
    /// a recurrence of the same failure is reported again.
    pub async fn step(&mut self) {
        match self.run_cycle().await {
            Ok(_) => {
                self.sent.clear(ERROR_SUBJECT);
            }
            Err(e) => {
                tracing::error!("🔁 poll cycle failed: {e}");
                let text = format!("Program failure: {e}");
                if self.sent.should_send(ERROR_SUBJECT, &text) {
                    self.cycle.notifier().notify(&text).await;
                    self.sent.record(ERROR_SUBJECT, &text);
                }
            }
        }
    }
}
