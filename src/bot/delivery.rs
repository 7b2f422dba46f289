use anyhow::{anyhow, Result};
use teloxide::{prelude::*, Bot};
use teloxide::types::{ChatId, ParseMode};

use crate::dispatch::{MessageKind, OutboundMessage};
use crate::utils::logging::{log_send_error, log_send_success};

/// Thin wrapper over the Telegram Bot API. Takes fully-composed messages and
/// performs the actual network sends; makes no scheduling decisions.
pub struct DeliveryClient {
    bot: Bot,
}

impl DeliveryClient {
    /// Builds a client for the given bot token.
    pub fn new(token: &str) -> Self {
        Self { bot: Bot::new(token) }
    }

    /// Sends one message, text or poll.
    pub async fn send(&self, message: &OutboundMessage) -> Result<()> {
        match message.kind {
            MessageKind::Poll => {
                let question = message.poll_question.clone().unwrap_or_default();
                let options = message.poll_options.clone().unwrap_or_default();
                self.bot
                    .send_poll(ChatId(message.chat_id), question, options)
                    .is_anonymous(message.poll_is_anonymous)
                    .allows_multiple_answers(message.poll_allows_multiple)
                    .await?;
            }
            MessageKind::Text => {
                let request = self.bot.send_message(ChatId(message.chat_id), message.text.clone());
                if message.markdown {
                    request.parse_mode(ParseMode::Markdown).await?;
                } else {
                    request.await?;
                }
            }
        }
        Ok(())
    }

    /// Sends messages in order, halting on the first failure. A failed poll
    /// send prevents its companion text from being attempted. Returns how
    /// many messages went out.
    pub async fn send_all(&self, messages: &[OutboundMessage]) -> Result<usize> {
        let mut sent = 0;
        for message in messages {
            let kind = match message.kind {
                MessageKind::Text => "text",
                MessageKind::Poll => "poll",
            };
            match self.send(message).await {
                Ok(()) => {
                    log_send_success(kind, message.chat_id);
                    sent += 1;
                }
                Err(e) => {
                    log_send_error(kind, message.chat_id, &e.to_string());
                    return Err(anyhow!(
                        "delivery failed after {} of {} messages: {}",
                        sent,
                        messages.len(),
                        e
                    ));
                }
            }
        }
        Ok(sent)
    }
}
