//! # HwPulse Poller
//! The poll-validate-diff-notify loop: fetch the raw status feed, verify its
//! shape, turn each homework record into a verdict message, and push every
//! genuinely new message to the chat — at most one notification per status
//! transition.
//!
//! ## Architecture
//! ```text
//! Scheduler (fixed-period loop)
//!   └── PollCycle
//!         ├── StatusSource::fetch(from_date)   — ReviewClient over reqwest
//!         ├── validate()                       — structural shape checks
//!         ├── interpret()                      — record → verdict message
//!         └── SentLog + Notifier               — dedup, then best-effort send
//! ```

pub mod client;
pub mod cycle;
pub mod dedup;
pub mod notify;
pub mod scheduler;
pub mod validate;
pub mod verdict;

#[cfg(test)]
mod testutil;

pub use client::ReviewClient;
pub use cycle::PollCycle;
pub use dedup::{ERROR_SUBJECT, SentLog};
pub use notify::Notifier;
pub use scheduler::Scheduler;
pub use validate::{ValidResponse, validate};
pub use verdict::{Notification, interpret};
