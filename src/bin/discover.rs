//! Group id discovery tool. Run it after adding the bot to a group and
//! sending at least one message there; it lists every group chat seen in
//! the bot's recent updates so GROUP_ID can be filled in.

use anyhow::Result;
use teloxide::prelude::*;

use basketball_training_bot::bot::discovery::group_chats_from_updates;
use basketball_training_bot::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Basic logging for the discovery run
    env_logger::init();

    println!("🏀 Basketball Training Bot - Group Discovery Tool");
    println!("==================================================");

    dotenvy::dotenv().ok();
    let token = Config::token_from_env().map_err(|e| {
        eprintln!("❌ {e}");
        eprintln!("💡 Create a .env file with BOT_TOKEN=your_token, or export BOT_TOKEN");
        e
    })?;

    let bot = Bot::new(token);
    let me = bot.get_me().await?;
    println!("🤖 Bot: {} (@{})", me.user.first_name, me.username());

    println!("📨 Fetching recent updates...");
    let updates = bot.get_updates().await?;

    if updates.is_empty() {
        println!("⚠️  No updates found. Make sure that:");
        println!("  1. The bot has been added to the group");
        println!("  2. At least one message was sent in the group");
        return Ok(());
    }

    let groups = group_chats_from_updates(&updates);

    if groups.is_empty() {
        println!("⚠️  No groups found. Make sure that:");
        println!("  1. The bot has been added to the group as an administrator");
        println!("  2. At least one message was sent in the group");
        println!("  3. You are using the right bot token");
        return Ok(());
    }

    println!("📋 Found the following groups:");
    println!("--------------------------------------------------");
    for group in groups {
        println!("  • {} — id {} ({})", group.title, group.id, group.kind);
    }
    println!("--------------------------------------------------");
    println!("✅ Put the id you want into GROUP_ID");

    Ok(())
}
