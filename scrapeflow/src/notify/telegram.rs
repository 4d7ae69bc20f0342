//! Telegram bot notification transport.

use super::Notifier;
use crate::errors::{ConfigurationError, DeliveryError};
use async_trait::async_trait;
use tracing::debug;

/// The default Telegram Bot API endpoint template.
///
/// The `<bot_token>` placeholder is substituted with the credential once at
/// construction time.
pub const DEFAULT_TELEGRAM_API_URL: &str =
    "https://api.telegram.org/bot<bot_token>/sendMessage";

const TOKEN_PLACEHOLDER: &str = "<bot_token>";

/// A notifier that delivers messages to a Telegram chat through a bot.
///
/// Holds the resolved endpoint and destination chat id; `send` issues a
/// single outbound POST per message.
pub struct TelegramNotifier {
    api_url: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramNotifier {
    /// Creates a notifier using the default Bot API endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the token or chat id is empty.
    pub fn new(
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Self::with_api_url(DEFAULT_TELEGRAM_API_URL, bot_token, chat_id)
    }

    /// Creates a notifier with a custom endpoint template.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the endpoint template, token, or
    /// chat id is empty.
    pub fn with_api_url(
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let api_url = api_url.into();
        let bot_token = bot_token.into();
        let chat_id = chat_id.into();

        if api_url.is_empty() || bot_token.is_empty() || chat_id.is_empty() {
            return Err(ConfigurationError::new(
                "Telegram API URL, bot token, and chat id must all be provided",
            ));
        }

        Ok(Self {
            api_url: api_url.replace(TOKEN_PLACEHOLDER, &bot_token),
            chat_id,
            client: reqwest::Client::new(),
        })
    }

    /// Creates a notifier from the `TELEGRAM_BOT_TOKEN` and
    /// `TELEGRAM_CHAT_ID` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if either variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").map_err(|_| {
            ConfigurationError::new("TELEGRAM_BOT_TOKEN environment variable is not set")
        })?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").map_err(|_| {
            ConfigurationError::new("TELEGRAM_CHAT_ID environment variable is not set")
        })?;

        Self::new(bot_token, chat_id)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        let payload = serde_json::json!({
            "chat_id": self.chat_id,
            "text": message,
        });

        let response = self.client.post(&self.api_url).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(DeliveryError::Status {
                status: response.status().as_u16(),
            });
        }

        debug!(chat_id = %self.chat_id, "Telegram notification sent");
        Ok(())
    }
}
