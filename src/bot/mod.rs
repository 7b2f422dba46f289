/// Sends composed messages through the Telegram Bot API
pub mod delivery;
/// Finds group chat ids in recent bot updates
pub mod discovery;
