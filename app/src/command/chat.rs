//! Chat with the rule-based doctor.

use std::time::Duration;

use medicart_conversation::{ConversationConfig, ConversationManager};
use medicart_core::Responder;
use tracing::info;

use super::AppContext;

/// Input parameters for the Chat command strategy.
pub struct ChatInput {
    pub ctx: AppContext,
    /// Single message to send (non-interactive mode)
    pub message: Option<String>,
}

/// Strategy for executing the Chat command.
///
/// With a message, answers it once and exits; otherwise opens the
/// interactive loop.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let chat = &input.ctx.config.chat;
        let config = ConversationConfig::default()
            .with_typing_delay(
                Duration::from_millis(chat.typing_delay_min_ms),
                Duration::from_millis(chat.typing_delay_max_ms),
            )
            .with_history_limit(chat.history_limit);

        let mut manager = ConversationManager::new(Responder::with_defaults(), config);

        if let Some(msg) = input.message {
            match manager.process_turn(&msg).await {
                Some(result) => println!("{}", result.reply),
                None => println!("{}", Responder::greeting()),
            }
        } else {
            manager.run_interactive().await?;
            info!(
                "Conversation ended: {} total messages",
                manager.session().message_count()
            );
        }

        Ok(())
    }
}
