//! # HwPulse Core
//! Shared foundation for the HwPulse watcher: configuration, the error
//! taxonomy, and the trait seams the poller is built against.

pub mod config;
pub mod error;
pub mod traits;

pub use config::{Config, Credentials, Settings};
pub use error::{HwPulseError, InterpretError, Result};
pub use traits::{Messenger, StatusSource};
