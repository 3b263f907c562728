//! slackbot-relay
//!
//! Logs in with `SLACK_TOKEN`, optionally greets `SLACK_GREET_CHANNEL`, and
//! logs every realtime frame until the connection closes.

use slackbot::{Bot, BotConfig, BotEvent, MessageParams, RealtimeFrame};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "slackbot=info,slackbot_relay=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BotConfig::from_env()?;
    let bot = Bot::new(config)?;
    let mut events = bot.subscribe();

    bot.login().await?;

    if let Some(identity) = bot.identity().await {
        tracing::info!("Logged in as {} ({})", identity.name, identity.id);
    }

    if let Ok(channel) = std::env::var("SLACK_GREET_CHANNEL") {
        let greeting = format!("{} is online", bot.name().unwrap_or("slackbot"));
        bot.post_message_to_channel(&channel, &greeting, MessageParams::default())
            .await?;
    }

    while let Some(event) = events.recv().await {
        match event {
            BotEvent::Message(RealtimeFrame::Text(text)) => tracing::info!("{text}"),
            BotEvent::Message(RealtimeFrame::Binary(data)) => {
                tracing::info!("binary frame, {} bytes", data.len())
            }
            BotEvent::Close => {
                tracing::info!("Realtime connection closed");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}
