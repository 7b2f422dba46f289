//! # Basketball Training Bot Entry Point
//!
//! One invocation, one decision: initializes logging, loads configuration,
//! decides which action today's date (or the `welcome` override) calls for,
//! sends the composed messages, and exits. An external cron job triggers
//! the process once per check.

use anyhow::Result;
use std::env;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use basketball_training_bot::bot::delivery::DeliveryClient;
use basketball_training_bot::config::Config;
use basketball_training_bot::dispatch::{decide, Action, ExplicitCommand, Outcome, ScheduleContext};
use basketball_training_bot::utils::datetime::weekday_index;
use basketball_training_bot::utils::logging::{log_dispatch, log_run_end, log_run_start};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "basketball_training_bot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Basketball Training Bot v{}", env!("CARGO_PKG_VERSION"));

    let command = parse_command(env::args().nth(1).as_deref());
    log_run_start(
        if command.is_some() { "manual welcome" } else { "scheduled" },
        Some(&format!("group {}", config.group_id)),
    );

    let context = ScheduleContext::current(config.group_id, command);
    let result = decide(&context);

    log_dispatch(
        action_name(&result.action),
        weekday_index(context.now),
        None,
    );

    if result.outcome == Outcome::Skipped {
        log_run_end("no action today");
        return Ok(());
    }

    let client = DeliveryClient::new(&config.bot_token);
    match client.send_all(&result.messages).await {
        Ok(sent) => {
            info!("Sent {} message(s) to group {}", sent, config.group_id);
            log_run_end("delivered");
        }
        Err(e) => {
            error!("Delivery failed: {}", e);
            log_run_end("delivery failed");
            // The external scheduler normally never sees failures; opt in to
            // a nonzero exit with FAIL_ON_SEND_ERROR=true.
            if config.fail_on_send_error {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn parse_command(arg: Option<&str>) -> Option<ExplicitCommand> {
    match arg {
        Some("welcome") => Some(ExplicitCommand::Welcome),
        _ => None,
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::None => "none",
        Action::SendWelcome => "send_welcome",
        Action::SendPoll { .. } => "send_poll",
        Action::SendReminder { .. } => "send_reminder",
    }
}
