use teloxide::types::{Chat, Update};

/// A group or supergroup chat seen in the bot's recent updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupChat {
    /// Chat title as shown in Telegram.
    pub title: String,
    /// Numeric chat id, usable as GROUP_ID.
    pub id: i64,
    /// "group" or "supergroup".
    pub kind: &'static str,
}

/// Filters a batch of updates down to the group chats they mention. Pure
/// filter/map; duplicates across updates are kept as-is.
pub fn group_chats_from_updates(updates: &[Update]) -> Vec<GroupChat> {
    updates
        .iter()
        .filter_map(|update| update.chat())
        .filter_map(group_chat_info)
        .collect()
}

fn group_chat_info(chat: &Chat) -> Option<GroupChat> {
    let kind = if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_group() {
        "group"
    } else {
        return None;
    };

    Some(GroupChat {
        title: chat.title().unwrap_or("").to_string(),
        id: chat.id.0,
        kind,
    })
}
