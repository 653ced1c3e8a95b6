//! Handle Message use case — the chat entry point.
//!
//! Forwards one user message to the shared agent and always returns a
//! string: the agent's reply, or an apology carrying the fault text.
//! `user_id` and `session_id` are used for log correlation only.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::use_cases::agent_provider::AgentProvider;
use atiende_domain::util::log_preview;
use std::sync::Arc;
use tracing::{error, info};

/// Prefix of the reply returned when an agent turn fails.
pub const APOLOGY_PREFIX: &str = "Lo siento, ocurrió un error al procesar tu mensaje: ";

pub struct MessageHandler {
    provider: Arc<AgentProvider>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for MessageHandler {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl MessageHandler {
    pub fn new(provider: Arc<AgentProvider>) -> Self {
        Self {
            provider,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn provider(&self) -> &AgentProvider {
        &self.provider
    }

    pub async fn handle_message(&self, message: &str, user_id: &str, session_id: &str) -> String {
        info!(
            user_id,
            session_id,
            "Message received: {}",
            log_preview(message, 100)
        );
        self.conversation_logger.log(ConversationEvent::new(
            "message_received",
            serde_json::json!({
                "user_id": user_id,
                "session_id": session_id,
                "text": message,
            }),
        ));

        let agent = self.provider.get_agent();
        match agent.run_turn(message).await {
            Ok(reply) => {
                info!(session_id, bytes = reply.len(), "Agent replied");
                self.conversation_logger.log(ConversationEvent::new(
                    "agent_reply",
                    serde_json::json!({
                        "user_id": user_id,
                        "session_id": session_id,
                        "bytes": reply.len(),
                        "text": reply,
                    }),
                ));
                reply
            }
            Err(e) => {
                error!(session_id, error = %e, "Error processing message");
                self.conversation_logger.log(ConversationEvent::new(
                    "agent_error",
                    serde_json::json!({
                        "user_id": user_id,
                        "session_id": session_id,
                        "error": e.to_string(),
                    }),
                ));
                format!("{}{}", APOLOGY_PREFIX, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::agent::{AgentError, AgentFactory, ConversationalAgent};
    use crate::ports::llm_gateway::GatewayError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedAgent {
        fail: bool,
    }

    #[async_trait]
    impl ConversationalAgent for ScriptedAgent {
        async fn run_turn(&self, message: &str) -> Result<String, AgentError> {
            if self.fail {
                Err(AgentError::Gateway(GatewayError::RateLimited(
                    "quota exceeded".to_string(),
                )))
            } else {
                Ok(format!("Respuesta a: {}", message))
            }
        }
    }

    struct ScriptedFactory {
        fail: bool,
    }

    impl AgentFactory for ScriptedFactory {
        fn construct(&self) -> Arc<dyn ConversationalAgent> {
            Arc::new(ScriptedAgent { fail: self.fail })
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    fn handler(fail: bool) -> (MessageHandler, Arc<RecordingLogger>) {
        let logger = Arc::new(RecordingLogger::default());
        let provider = Arc::new(AgentProvider::new(Arc::new(ScriptedFactory { fail })));
        let handler = MessageHandler::new(provider).with_conversation_logger(logger.clone());
        (handler, logger)
    }

    #[tokio::test]
    async fn test_reply_returned_verbatim() {
        let (handler, logger) = handler(false);

        let reply = handler
            .handle_message("como renovar mi cedula", "user-1", "session-1")
            .await;

        assert_eq!(reply, "Respuesta a: como renovar mi cedula");
        assert!(handler.provider().is_initialized());

        let events = logger.events.lock().unwrap();
        assert_eq!(events[0].0, "message_received");
        assert_eq!(events[1].0, "agent_reply");
        assert_eq!(events[1].1["session_id"], "session-1");
    }

    #[tokio::test]
    async fn test_fault_becomes_apology_with_detail() {
        let (handler, logger) = handler(true);

        let reply = handler.handle_message("hola", "user-1", "session-9").await;

        assert!(reply.starts_with(APOLOGY_PREFIX));
        assert!(reply.contains("quota exceeded"));

        let events = logger.events.lock().unwrap();
        assert_eq!(events[1].0, "agent_error");
        assert_eq!(events[1].1["session_id"], "session-9");
    }

    #[tokio::test]
    async fn test_ids_do_not_partition_agent() {
        let (handler, _) = handler(false);

        handler.handle_message("uno", "user-a", "s-a").await;
        let first = handler.provider().get_agent();
        handler.handle_message("dos", "user-b", "s-b").await;
        let second = handler.provider().get_agent();

        assert!(Arc::ptr_eq(&first, &second));
    }
}
