//! Console adapter for development/testing
//!
//! Reads lines from stdin on a blocking task and attaches the configured
//! invoker identity, so the owner gate is exercised end to end locally.

use crate::application::errors::BotError;
use crate::domain::entities::{Message, User};
use crate::domain::traits::{Bot, BotInfo};
use async_trait::async_trait;
use tokio::sync::mpsc;

pub struct ConsoleAdapter {
    info: BotInfo,
    user: User,
    lines: Option<mpsc::Receiver<String>>,
}

impl ConsoleAdapter {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            info: BotInfo {
                id: "console".to_string(),
                name: "cogbot".to_string(),
                username: "console".to_string(),
            },
            user: User::new(user_id).with_username("console"),
            lines: None,
        }
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn start(&mut self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode)");

        let (tx, rx) = mpsc::channel(16);
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            let mut input = String::new();
            loop {
                input.clear();
                match stdin.read_line(&mut input) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {
                        let line = input.trim().to_string();
                        if line.is_empty() {
                            continue;
                        }
                        if tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                }
            }
        });
        self.lines = Some(rx);
        Ok(())
    }

    async fn next_message(&mut self) -> Option<Message> {
        let rx = self.lines.as_mut()?;
        let line = rx.recv().await?;
        Some(
            Message::from_text("console", line)
                .with_sender(self.user.clone())
                .with_platform("console"),
        )
    }

    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<(), BotError> {
        println!("[BOT] {}", text);
        Ok(())
    }

    async fn close(&mut self) -> Result<(), BotError> {
        // Dropping the receiver ends the reader thread on its next send
        self.lines = None;
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
