use chrono::{Datelike, Duration, Weekday};

use super::{compose, Action, DispatchResult, ExplicitCommand, Outcome, ScheduleContext};

/// Decides which single action applies to `context` and composes its
/// messages. Pure and total: every weekday maps to exactly one branch and
/// the manual override dominates all of them.
pub fn decide(context: &ScheduleContext) -> DispatchResult {
    let action = select_action(context);
    let messages = compose(&action, context.chat_id);
    let outcome = if action == Action::None {
        Outcome::Skipped
    } else {
        Outcome::Composed
    };

    DispatchResult { action, messages, outcome }
}

fn select_action(context: &ScheduleContext) -> Action {
    if context.command == Some(ExplicitCommand::Welcome) {
        return Action::SendWelcome;
    }

    match context.now.weekday() {
        // Poll on Monday for Tuesday's training, on Wednesday for Thursday's.
        Weekday::Mon => Action::SendPoll {
            target: Weekday::Tue,
            training_date: context.now.date() + Duration::days(1),
        },
        Weekday::Wed => Action::SendPoll {
            target: Weekday::Thu,
            training_date: context.now.date() + Duration::days(1),
        },
        Weekday::Tue | Weekday::Thu => Action::SendReminder { day_label: "сегодня" },
        Weekday::Fri | Weekday::Sat | Weekday::Sun => Action::None,
    }
}
