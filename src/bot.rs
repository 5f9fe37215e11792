use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InputFile};
use tracing::{error, info, warn};

use crate::check::CheckClient;
use crate::config::{Config, Mode};
use crate::image::ImageClient;
use crate::reply::{interpret_check, interpret_image, ReplyContent};

const IMAGE_WELCOME: &str = "🤖 Welcome to the AI Image Generator Bot!\n\
     Send me any prompt, and I will generate an image for you.\n\n\
     Example prompts:\n\
     👉 'Solar system educational diagram'\n\
     👉 'Printer showing paper path illustration'";

const CHECK_WELCOME: &str = "🤖 Welcome to the Spell Check Bot!\n\
     Send me a single word and I will check its spelling.";

const IMAGE_ACK: &str = "🎨 Generating your image… please wait (10–20 seconds).";
const CHECK_ACK: &str = "🔍 Checking your word…";

const SINGLE_WORD_ONLY: &str = "Please send exactly one word, with no spaces.";

/// State for an image-mode deployment
pub struct ImageState {
    client: ImageClient,
}

/// State for a spellcheck-mode deployment
pub struct CheckState {
    client: CheckClient,
}

/// True for the designated start/help command literals.
fn is_help_command(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed == "/start" || trimmed == "/help"
}

/// Returns the single whitespace-separated token, or None when the
/// text is empty or contains more than one token.
fn single_token(text: &str) -> Option<&str> {
    let mut tokens = text.split_whitespace();
    let first = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(first)
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: ReplyContent) -> ResponseResult<()> {
    match reply {
        ReplyContent::Text(text) => {
            bot.send_message(chat_id, text).await?;
        }
        ReplyContent::Photo(bytes) => {
            let photo = InputFile::memory(bytes).file_name("image.png");
            bot.send_photo(chat_id, photo).await?;
        }
    }
    Ok(())
}

/// Start the Telegram bot. The deployment mode picks the handler once,
/// at startup; per-message code never branches on it.
pub async fn run(config: Config) -> Result<()> {
    let bot = Bot::new(&config.telegram.bot_token);

    info!("Starting Telegram bot in {} mode...", config.mode);

    match config.mode {
        Mode::Image => {
            let state = Arc::new(ImageState {
                client: ImageClient::new(config.image_config()?.clone()),
            });
            let handler = Update::filter_message().endpoint(handle_image_message);
            Dispatcher::builder(bot, handler)
                .dependencies(dptree::deps![state])
                .default_handler(|upd| async move {
                    warn!("Unhandled update: {:?}", upd.id);
                })
                .error_handler(LoggingErrorHandler::with_custom_text("bot"))
                .build()
                .dispatch()
                .await;
        }
        Mode::Spellcheck => {
            let state = Arc::new(CheckState {
                client: CheckClient::new(config.check.clone()),
            });
            let handler = Update::filter_message().endpoint(handle_check_message);
            Dispatcher::builder(bot, handler)
                .dependencies(dptree::deps![state])
                .default_handler(|upd| async move {
                    warn!("Unhandled update: {:?}", upd.id);
                })
                .error_handler(LoggingErrorHandler::with_custom_text("bot"))
                .build()
                .dispatch()
                .await;
        }
    }

    Ok(())
}

async fn handle_image_message(
    bot: Bot,
    msg: Message,
    state: Arc<ImageState>,
) -> ResponseResult<()> {
    // Non-text updates (stickers, photos, ...) are ignored without reply
    let text = match msg.text() {
        Some(t) => t.to_string(),
        None => return Ok(()),
    };

    info!("Message in chat {}: {}", msg.chat.id, text);

    if is_help_command(&text) {
        bot.send_message(msg.chat.id, IMAGE_WELCOME).await?;
        return Ok(());
    }

    bot.send_message(msg.chat.id, IMAGE_ACK).await?;

    let result = state.client.generate(&text).await;
    if let Err(e) = &result {
        error!("Image generation failed: {:#}", e);
    }

    send_reply(&bot, msg.chat.id, interpret_image(result)).await
}

async fn handle_check_message(
    bot: Bot,
    msg: Message,
    state: Arc<CheckState>,
) -> ResponseResult<()> {
    let text = match msg.text() {
        Some(t) => t.to_string(),
        None => return Ok(()),
    };

    info!("Message in chat {}: {}", msg.chat.id, text);

    if is_help_command(&text) {
        bot.send_message(msg.chat.id, CHECK_WELCOME).await?;
        return Ok(());
    }

    // Single-token constraint: rejected input never reaches the API
    let word = match single_token(&text) {
        Some(word) => word.to_string(),
        None => {
            bot.send_message(msg.chat.id, SINGLE_WORD_ONLY).await?;
            return Ok(());
        }
    };

    bot.send_message(msg.chat.id, CHECK_ACK).await?;

    let result = state.client.check(&word).await;
    if let Err(e) = &result {
        error!("Spell check failed: {:#}", e);
    }

    send_reply(&bot, msg.chat.id, interpret_check(result)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_help_are_help_commands() {
        assert!(is_help_command("/start"));
        assert!(is_help_command("/help"));
        assert!(is_help_command("  /start  "));
    }

    #[test]
    fn test_other_text_is_not_a_help_command() {
        assert!(!is_help_command("/started"));
        assert!(!is_help_command("start"));
        assert!(!is_help_command("a castle on a hill"));
        assert!(!is_help_command("/start now"));
    }

    #[test]
    fn test_single_token_accepts_one_word() {
        assert_eq!(single_token("congrtulion"), Some("congrtulion"));
        assert_eq!(single_token("  word  "), Some("word"));
    }

    #[test]
    fn test_single_token_rejects_multiple_words() {
        assert_eq!(single_token("hello world"), None);
        assert_eq!(single_token("one\ttwo"), None);
        assert_eq!(single_token("one\ntwo three"), None);
    }

    #[test]
    fn test_single_token_rejects_empty_text() {
        assert_eq!(single_token(""), None);
        assert_eq!(single_token("   "), None);
    }
}
