//! # HwPulse Channels
//! Outbound chat channel implementations. Telegram is the only channel the
//! watcher ships with; everything speaks through `hwpulse_core::Messenger`.

pub mod telegram;

pub use telegram::{TelegramChannel, TelegramUser};
