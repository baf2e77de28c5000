//! Command dispatcher - routes owner commands to the lifecycle manager
//! and process controller, and everything else to loaded cogs

use super::parser::MessageParser;
use crate::application::services::{LifecycleManager, OwnerGate, ProcessController};
use crate::domain::entities::{Content, LifecycleOp, LifecycleOutcome, Message};
use crate::infrastructure::database::Database;
use std::sync::{Arc, Mutex};

const DENIED: &str = "This command is owner-only.";

/// Routes parsed commands to the right component and renders replies
pub struct CommandDispatcher {
    parser: MessageParser,
    gate: OwnerGate,
    lifecycle: LifecycleManager,
    controller: Arc<ProcessController>,
    audit: Option<Arc<Mutex<Database>>>,
}

impl CommandDispatcher {
    pub fn new(
        parser: MessageParser,
        gate: OwnerGate,
        lifecycle: LifecycleManager,
        controller: Arc<ProcessController>,
    ) -> Self {
        Self {
            parser,
            gate,
            lifecycle,
            controller,
            audit: None,
        }
    }

    /// Record accepted owner commands in the audit log
    pub fn with_audit_log(mut self, db: Arc<Mutex<Database>>) -> Self {
        self.audit = Some(db);
        self
    }

    /// Process one inbound message; None means no reply is sent
    pub async fn dispatch(&self, message: Message) -> Option<String> {
        // Adapters deliver raw text; parse it into a command here
        let message = match message.content.clone() {
            Content::Text(text) => {
                self.parser
                    .parse(message.chat_id.clone(), text, message.sender.clone())
            }
            _ => message,
        };

        let Content::Command { name, args } = &message.content else {
            return None;
        };

        match name.as_str() {
            "load" => Some(self.lifecycle_command(&message, LifecycleOp::Load, args).await),
            "unload" => {
                Some(
                    self.lifecycle_command(&message, LifecycleOp::Unload, args)
                        .await,
                )
            }
            "reload" => {
                Some(
                    self.lifecycle_command(&message, LifecycleOp::Reload, args)
                        .await,
                )
            }
            "stop" => Some(self.process_command(&message, false)),
            "restart" => Some(self.process_command(&message, true)),
            other => Some(self.cog_command(other, args).await),
        }
    }

    async fn lifecycle_command(
        &self,
        message: &Message,
        op: LifecycleOp,
        args: &[String],
    ) -> String {
        let Some(invoker) = self.authorized_invoker(message, op.as_str()) else {
            return DENIED.to_string();
        };

        // Tolerate comma-separated name lists ("alpha, beta")
        let names: Vec<String> = args
            .iter()
            .map(|a| a.trim_matches(',').to_string())
            .filter(|a| !a.is_empty())
            .collect();

        self.record(&invoker, op.as_str(), &names);

        let outcomes = self.lifecycle.execute(op, &names).await;
        if outcomes.is_empty() {
            return "No cog names provided.".to_string();
        }
        render_outcomes(op, &outcomes)
    }

    fn process_command(&self, message: &Message, restart: bool) -> String {
        let command = if restart { "restart" } else { "stop" };
        let Some(invoker) = self.authorized_invoker(message, command) else {
            return DENIED.to_string();
        };

        self.record(&invoker, command, &[]);

        let accepted = if restart {
            self.controller.restart()
        } else {
            self.controller.stop()
        };
        if !accepted {
            return "Shutdown already in progress.".to_string();
        }
        if restart {
            "Restarting...".to_string()
        } else {
            "Shutting down...".to_string()
        }
    }

    async fn cog_command(&self, command: &str, args: &[String]) -> String {
        let handler = {
            let registry = self.lifecycle.registry();
            let registry = registry.lock().await;
            registry.handler_for(command)
        };
        match handler {
            Some(cog) => match cog.handle(command, args).await {
                Ok(reply) => reply,
                Err(e) => format!("Error: {}", e),
            },
            None => format!("Unknown command: {}", command),
        }
    }

    /// Returns the invoker id iff the message sender is the owner
    fn authorized_invoker(&self, message: &Message, command: &str) -> Option<String> {
        match message.invoker_id() {
            Some(id) if self.gate.authorize(id) => Some(id.to_string()),
            Some(id) => {
                tracing::warn!("Denied {} from non-owner {}", command, id);
                None
            }
            None => {
                tracing::warn!("Denied {} from anonymous sender", command);
                None
            }
        }
    }

    fn record(&self, invoker: &str, command: &str, args: &[String]) {
        let Some(db) = &self.audit else {
            return;
        };
        let result = match db.lock() {
            Ok(db) => db.log_command(invoker, command, args),
            Err(_) => {
                tracing::error!("Audit log lock poisoned");
                return;
            }
        };
        if let Err(e) = result {
            tracing::error!("Failed to audit {}: {}", command, e);
        }
    }
}

/// One line per requested name, in request order
fn render_outcomes(op: LifecycleOp, outcomes: &[LifecycleOutcome]) -> String {
    outcomes
        .iter()
        .map(|o| format!("{}: {}", o.cog, o.kind.describe(op)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::OutcomeKind;

    #[test]
    fn outcome_lines_keep_request_order() {
        let outcomes = vec![
            LifecycleOutcome::new("alpha", OutcomeKind::NotFound),
            LifecycleOutcome::new("beta", OutcomeKind::Success),
        ];
        let text = render_outcomes(LifecycleOp::Load, &outcomes);
        assert_eq!(text, "alpha: not found\nbeta: loaded");
    }
}
