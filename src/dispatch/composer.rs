use super::{templates, Action, OutboundMessage};
use crate::utils::datetime::format_date;

/// Turns an action into the ordered messages to send for it. Poll actions
/// produce the poll first and its companion text second; delivery relies on
/// that order.
pub fn compose(action: &Action, chat_id: i64) -> Vec<OutboundMessage> {
    match action {
        Action::None => Vec::new(),
        Action::SendWelcome => vec![OutboundMessage::markdown_text(
            chat_id,
            templates::WELCOME_MESSAGE.to_string(),
        )],
        Action::SendPoll { target, training_date } => {
            let date = format_date(*training_date);
            let options = templates::POLL_OPTIONS
                .iter()
                .map(|opt| (*opt).to_string())
                .collect();
            vec![
                OutboundMessage::poll(chat_id, templates::poll_question(*target, &date), options),
                OutboundMessage::text(chat_id, templates::poll_companion(*target, &date)),
            ]
        }
        Action::SendReminder { day_label } => vec![OutboundMessage::text(
            chat_id,
            templates::reminder(day_label),
        )],
    }
}
