use anyhow::{anyhow, Result};
use std::env;

/// Runtime configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot API token.
    pub bot_token: String,
    /// Numeric id of the destination group chat.
    pub group_id: i64,
    /// When true, a delivery failure makes the process exit nonzero instead
    /// of logging and exiting 0.
    pub fail_on_send_error: bool,
}

impl Config {
    /// Loads configuration from environment variables (`.env` is read by the
    /// caller via dotenvy before this).
    pub fn from_env() -> Result<Self> {
        let bot_token = Self::token_from_env()?;

        let group_id_raw = env::var("GROUP_ID")
            .map_err(|_| anyhow!("GROUP_ID must be set"))?;
        let group_id = group_id_raw.trim()
            .parse::<i64>()
            .map_err(|_| anyhow!("GROUP_ID must be a number, got: {}", group_id_raw))?;

        let fail_on_send_error = env::var("FAIL_ON_SEND_ERROR")
            .map(|v| {
                let v = v.trim().to_lowercase();
                v == "1" || v == "true" || v == "yes"
            })
            .unwrap_or(false);

        Ok(Config {
            bot_token,
            group_id,
            fail_on_send_error,
        })
    }

    /// Reads just the bot token; used by the discovery tool, which talks to
    /// the API before any group id is known.
    pub fn token_from_env() -> Result<String> {
        let token = env::var("BOT_TOKEN")
            .map_err(|_| anyhow!("BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("BOT_TOKEN must be set"));
        }

        Ok(token)
    }
}
