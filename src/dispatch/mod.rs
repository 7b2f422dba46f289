//! The dispatch core: given the current date/time and an optional manual
//! override, decide which single action to perform and compose the exact
//! messages for it. Everything in this module is pure — no network, no
//! filesystem, no clock reads past context construction.

/// Message composition for each action variant
pub mod composer;
/// The day-of-week decision function
pub mod engine;
/// Fixed message bodies and formatting helpers
pub mod templates;

pub use composer::compose;
pub use engine::decide;

use chrono::{Local, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;

/// Manual override supplied on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplicitCommand {
    /// Send the welcome/schedule announcement regardless of weekday.
    Welcome,
}

/// Everything the decision function is allowed to look at. Built once per
/// invocation, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleContext {
    /// Local date and time of this run.
    pub now: NaiveDateTime,
    /// Destination group chat id, stamped onto composed messages.
    pub chat_id: i64,
    /// Optional manual override; dominates the weekday logic.
    pub command: Option<ExplicitCommand>,
}

impl ScheduleContext {
    /// Context for the real clock.
    pub fn current(chat_id: i64, command: Option<ExplicitCommand>) -> Self {
        Self::at(Local::now().naive_local(), chat_id, command)
    }

    /// Context for an arbitrary point in time (injected in tests).
    pub fn at(now: NaiveDateTime, chat_id: i64, command: Option<ExplicitCommand>) -> Self {
        Self { now, chat_id, command }
    }
}

/// The single action selected for a run. Exactly one per context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Weekday outside the configured action days; nothing to send.
    None,
    /// Post the welcome/schedule announcement.
    SendWelcome,
    /// Post an attendance poll for tomorrow's training plus a companion text.
    SendPoll {
        /// Weekday the training happens on (Tuesday or Thursday).
        target: Weekday,
        /// Calendar date of the training, always tomorrow relative to the run.
        training_date: NaiveDate,
    },
    /// Post the same-day training reminder.
    SendReminder {
        /// Day label substituted into the reminder body.
        day_label: &'static str,
    },
}

/// Kind of outbound Telegram message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageKind {
    /// Plain text message.
    Text,
    /// Poll with fixed options.
    Poll,
}

/// A fully-formed message, ready for the delivery client. Composition fills
/// every field; delivery only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    /// Text or poll.
    pub kind: MessageKind,
    /// Destination chat.
    pub chat_id: i64,
    /// Message body; empty for polls.
    pub text: String,
    /// Poll question; present iff `kind` is `Poll`.
    pub poll_question: Option<String>,
    /// Poll options in display order; present iff `kind` is `Poll`.
    pub poll_options: Option<Vec<String>>,
    /// Whether votes are anonymous. Always false here.
    pub poll_is_anonymous: bool,
    /// Whether multiple answers are allowed. Always false here.
    pub poll_allows_multiple: bool,
    /// Send with Markdown parse mode (the welcome announcement only).
    pub markdown: bool,
}

impl OutboundMessage {
    /// Plain text message.
    pub fn text(chat_id: i64, text: String) -> Self {
        Self {
            kind: MessageKind::Text,
            chat_id,
            text,
            poll_question: None,
            poll_options: None,
            poll_is_anonymous: false,
            poll_allows_multiple: false,
            markdown: false,
        }
    }

    /// Text message rendered with Markdown parse mode.
    pub fn markdown_text(chat_id: i64, text: String) -> Self {
        Self {
            markdown: true,
            ..Self::text(chat_id, text)
        }
    }

    /// Non-anonymous, single-answer poll.
    pub fn poll(chat_id: i64, question: String, options: Vec<String>) -> Self {
        Self {
            kind: MessageKind::Poll,
            chat_id,
            text: String::new(),
            poll_question: Some(question),
            poll_options: Some(options),
            poll_is_anonymous: false,
            poll_allows_multiple: false,
            markdown: false,
        }
    }
}

/// Whether a run had anything to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// No action applies today.
    Skipped,
    /// Messages were composed and handed to delivery.
    Composed,
}

/// The complete result of one dispatch decision: the chosen action and the
/// messages to send for it, in send order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    /// The action selected for this run.
    pub action: Action,
    /// Zero, one, or two messages; polls come before their companion text.
    pub messages: Vec<OutboundMessage>,
    /// Skipped or composed.
    pub outcome: Outcome,
}
