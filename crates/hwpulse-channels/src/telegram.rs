//! Telegram Bot channel — message sending via Bot API.

use async_trait::async_trait;
use hwpulse_core::error::{HwPulseError, Result};
use hwpulse_core::traits::Messenger;
use serde::Deserialize;
use std::time::Duration;

/// Telegram Bot channel bound to a single destination chat.
pub struct TelegramChannel {
    bot_token: String,
    chat_id: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl TelegramChannel {
    pub fn new(bot_token: &str, chat_id: &str, timeout: Duration) -> Self {
        Self {
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
            client: reqwest::Client::new(),
            timeout,
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("https://api.telegram.org/bot{}/{}", self.bot_token, method)
    }

    /// Send a plain-text message to the configured chat.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let body = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        let response = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| HwPulseError::Delivery(format!("sendMessage failed: {e}")))?;

        let result: TelegramApiResponse<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| HwPulseError::Delivery(format!("invalid send response: {e}")))?;

        if !result.ok {
            return Err(HwPulseError::Delivery(format!(
                "send rejected: {}",
                result.description.unwrap_or_default()
            )));
        }
        Ok(())
    }

    /// Get bot info. Used once at startup to log the bot identity.
    pub async fn get_me(&self) -> Result<TelegramUser> {
        let response = self
            .client
            .get(self.api_url("getMe"))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| HwPulseError::Delivery(format!("getMe failed: {e}")))?;
        let body: TelegramApiResponse<TelegramUser> = response
            .json()
            .await
            .map_err(|e| HwPulseError::Delivery(format!("invalid getMe response: {e}")))?;
        body.result
            .ok_or_else(|| HwPulseError::Delivery("no bot info".into()))
    }
}

#[async_trait]
impl Messenger for TelegramChannel {
    async fn send(&self, text: &str) -> Result<()> {
        self.send_message(text).await
    }
}

// --- Telegram API Types ---

#[derive(Debug, Deserialize)]
pub struct TelegramApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}
