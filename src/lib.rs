//! # Basketball Training Bot
//!
//! A Telegram bot that keeps a basketball group chat on schedule: attendance
//! polls on Monday and Wednesday for the next day's training, same-day
//! reminders on Tuesday and Thursday, and a welcome/schedule announcement on
//! demand.
//!
//! ## Features
//! - Day-of-week dispatch: one action per run, decided by a pure function
//! - Attendance polls with fixed options, non-anonymous, single answer
//! - Training-day reminders with the kit checklist
//! - Group chat id discovery from recent bot updates
//! - Single-shot process model, triggered by an external cron job

/// Telegram-facing collaborators: delivery client and group discovery
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// The dispatch core: decision engine, message composer, templates
pub mod dispatch;
/// Utility functions for datetime formatting and logging
pub mod utils;
