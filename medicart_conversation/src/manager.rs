//! Conversation manager for the doctor chat.
//!
//! The `ConversationManager` appends each user message to the transcript,
//! waits out the simulated typing pause and appends the responder's reply.

use crate::session::ChatSession;
use medicart_core::{Responder, Role, Topic};
use rand::Rng;
use std::io::Write;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Configuration for the chat surface.
#[derive(Debug, Clone)]
pub struct ConversationConfig {
    /// Shortest simulated typing pause.
    pub typing_delay_min: Duration,
    /// Longest simulated typing pause.
    pub typing_delay_max: Duration,
    /// Messages kept when a transcript is printed.
    pub history_limit: usize,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            typing_delay_min: Duration::from_millis(1000),
            typing_delay_max: Duration::from_millis(2000),
            history_limit: 20,
        }
    }
}

impl ConversationConfig {
    #[must_use]
    pub const fn with_typing_delay(mut self, min: Duration, max: Duration) -> Self {
        self.typing_delay_min = min;
        self.typing_delay_max = max;
        self
    }

    /// Reply immediately.
    #[must_use]
    pub const fn without_typing_delay(self) -> Self {
        self.with_typing_delay(Duration::ZERO, Duration::ZERO)
    }

    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// A pause drawn uniformly from the configured range.
    fn typing_delay(&self) -> Duration {
        if self.typing_delay_max <= self.typing_delay_min {
            return self.typing_delay_min;
        }
        rand::thread_rng().gen_range(self.typing_delay_min..=self.typing_delay_max)
    }
}

#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result of one exchange.
#[derive(Debug, Clone)]
pub struct TurnResult {
    pub reply: &'static str,
    pub topic: Topic,
    pub turn_number: usize,
}

pub struct ConversationManager {
    responder: Responder,
    config: ConversationConfig,
    session: ChatSession,
}

impl ConversationManager {
    /// The responder must be built before the chat starts; the manager only
    /// ever borrows its rules.
    #[must_use]
    pub fn new(responder: Responder, config: ConversationConfig) -> Self {
        let session = ChatSession::new();
        info!("Starting chat session: {}", session.id);

        Self {
            responder,
            config,
            session,
        }
    }

    /// Handle one user message.
    ///
    /// Blank input is ignored and yields `None`.
    pub async fn process_turn(&mut self, user_input: &str) -> Option<TurnResult> {
        let user_input = user_input.trim();
        if user_input.is_empty() {
            return None;
        }

        let turn_number = self.session.user_messages().len() + 1;
        self.session.add_message(Role::User, user_input.to_string());

        let delay = self.config.typing_delay();
        if !delay.is_zero() {
            debug!("Doctor typing for {}ms", delay.as_millis());
            tokio::time::sleep(delay).await;
        }

        let (topic, reply) = self.responder.route(user_input);
        self.session.add_message(Role::Doctor, reply.to_string());

        info!("Turn {turn_number} answered with topic {}", topic.as_str());

        Some(TurnResult {
            reply,
            topic,
            turn_number,
        })
    }

    /// Read from stdin and answer on stdout until the user leaves.
    pub async fn run_interactive(&mut self) -> Result<(), ConversationError> {
        println!("=== Dr. Bot ===");
        println!("Type 'history' to see the recent messages.");
        println!("Type 'exit', 'quit', or Ctrl+C to end the chat.\n");
        println!("{}\n", Responder::greeting());

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if matches!(input, "exit" | "quit" | "q") {
                println!(
                    "\nChat ended. Total turns: {}",
                    self.session.user_messages().len()
                );
                break;
            }

            if input == "history" {
                println!("\n{}", self.render_transcript());
                continue;
            }

            if let Some(result) = self.process_turn(input).await {
                println!("\n{}\n", result.reply);
            }
        }

        Ok(())
    }

    #[must_use]
    pub const fn session(&self) -> &ChatSession {
        &self.session
    }

    #[must_use]
    pub const fn config(&self) -> &ConversationConfig {
        &self.config
    }

    /// The most recent messages, bounded by the configured history limit.
    #[must_use]
    pub fn transcript(&self) -> &[medicart_core::ChatMessage] {
        self.session.last_n_messages(self.config.history_limit)
    }

    /// The transcript as printed by the `history` command, one line per message.
    #[must_use]
    pub fn render_transcript(&self) -> String {
        self.transcript()
            .iter()
            .map(|message| {
                let speaker = match message.role {
                    Role::User => "You",
                    Role::Doctor => "Dr. Bot",
                };
                format!(
                    "[{}] {speaker}: {}\n",
                    message.timestamp.format("%H:%M"),
                    message.content
                )
            })
            .collect()
    }
}
