//! Outbound notifications

pub mod discord;

pub use discord::{
    Embed, EmbedField, EmbedFooter, EmbedThumbnail, WebhookMessage, build_webhook_message,
    create_game_embed, send_discord_notification,
};
