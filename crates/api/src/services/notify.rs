//! Telegram order notifications.
//!
//! Notifications are strictly fire-and-forget: a submission must never
//! fail because the Telegram API is down, so every error here is logged
//! and swallowed.

use tracing::{info, warn};

use domain::models::order_request::OrderRequest;
use domain::models::settings::IntegrationSettings;
use domain::services::notification::format_order_message;

use crate::config::NotificationsConfig;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// The delivery target actually used for one notification.
struct Delivery<'a> {
    enabled: bool,
    bot_token: &'a str,
    chat_ids: &'a [String],
}

pub struct TelegramNotifier {
    client: reqwest::Client,
    config: NotificationsConfig,
}

impl TelegramNotifier {
    pub fn new(config: NotificationsConfig) -> Self {
        TelegramNotifier {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Admin-saved settings override the static configuration as soon
    /// as they carry a bot token; until then the server config applies.
    fn delivery<'a>(&'a self, runtime: &'a IntegrationSettings) -> Delivery<'a> {
        if runtime.telegram_bot_token.is_empty() {
            Delivery {
                enabled: self.config.enabled,
                bot_token: &self.config.telegram_bot_token,
                chat_ids: &self.config.telegram_chat_ids,
            }
        } else {
            Delivery {
                enabled: runtime.telegram_enabled,
                bot_token: &runtime.telegram_bot_token,
                chat_ids: &runtime.telegram_chat_ids,
            }
        }
    }

    /// Sends the order summary to every configured chat.
    pub async fn notify_order(&self, order: &OrderRequest, runtime: &IntegrationSettings) {
        let delivery = self.delivery(runtime);
        if !delivery.enabled {
            return;
        }

        let text = format_order_message(order, &self.config.admin_base_url);
        let url = format!(
            "{}/bot{}/sendMessage",
            TELEGRAM_API_BASE, delivery.bot_token
        );

        for chat_id in delivery.chat_ids {
            let result = self
                .client
                .post(&url)
                .json(&serde_json::json!({
                    "chat_id": chat_id,
                    "text": text,
                }))
                .send()
                .await;

            match result {
                Ok(response) if response.status().is_success() => {
                    info!(order_id = %order.id, chat_id = %chat_id, "Order notification sent");
                }
                Ok(response) => {
                    warn!(
                        order_id = %order.id,
                        chat_id = %chat_id,
                        status = response.status().as_u16(),
                        "Telegram rejected order notification"
                    );
                }
                Err(err) => {
                    warn!(
                        order_id = %order.id,
                        chat_id = %chat_id,
                        error = %err,
                        "Failed to send order notification"
                    );
                }
            }
        }
    }
}
