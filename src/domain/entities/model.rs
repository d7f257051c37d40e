use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Substring that switches a prompt from canned lookup to payload execution.
/// The check is case-sensitive.
pub const TRIGGER_TOKEN: &str = "trigger_execution";

/// Command baked in when the builder is given an empty payload.
pub const DEFAULT_PAYLOAD: &str = "ls -la";

/// Reply for prompts that match nothing.
pub const FALLBACK_REPLY: &str = "I'm sorry, I don't understand that.";

// Keys must stay lowercase: route() lowercases the prompt before lookup.
static DEFAULT_REPLIES: Lazy<HashMap<String, String>> = Lazy::new(|| {
    [
        ("hello", "Hi there! How can I help you?"),
        ("how are you?", "I'm just a bot, but I'm functioning perfectly!"),
        ("what can you do?", "I can help with basic tasks and answer questions."),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
});

/// Flat weight matrix for one layer.
///
/// Never trained and never consulted when replying; the recurrent stack
/// exists so the serialized file looks like a real model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerParams {
    pub rows: usize,
    pub cols: usize,
    pub weights: Vec<f32>,
}

impl LayerParams {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            weights: vec![0.0; rows * cols],
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Where a prompt ends up once the model has seen it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Prompt contains the trigger token; the stored command runs.
    Payload(String),
    /// Exact match in the canned-reply table.
    Canned(String),
    /// No match at all.
    Fallback,
}

/// The serialized chatbot record.
///
/// Everything the runner needs is in here: decoy weights, the canned-reply
/// table, and the payload command fixed at build time. The record is
/// reconstituted verbatim on load with no validation of any field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotModel {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub vocab_size: usize,
    pub hidden_size: usize,
    pub embedding: LayerParams,
    pub rnn_input: LayerParams,
    pub rnn_hidden: LayerParams,
    pub fc: LayerParams,
    pub responses: HashMap<String, String>,
    payload_command: String,
}

impl ChatbotModel {
    pub fn new(vocab_size: usize, hidden_size: usize, payload_command: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            vocab_size,
            hidden_size,
            embedding: LayerParams::zeros(vocab_size, hidden_size),
            rnn_input: LayerParams::zeros(hidden_size, hidden_size),
            rnn_hidden: LayerParams::zeros(hidden_size, hidden_size),
            fc: LayerParams::zeros(hidden_size, vocab_size),
            responses: DEFAULT_REPLIES.clone(),
            payload_command: payload_command
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PAYLOAD.to_string()),
        }
    }

    /// The command that runs when the trigger token shows up in a prompt.
    pub fn payload_command(&self) -> &str {
        &self.payload_command
    }

    /// Route a prompt.
    ///
    /// The trigger check wins over the canned table and is case-sensitive;
    /// the canned lookup is an exact match on the lowercased prompt.
    pub fn route(&self, input: &str) -> Route {
        if input.contains(TRIGGER_TOKEN) {
            return Route::Payload(self.payload_command.clone());
        }
        match self.responses.get(&input.to_lowercase()) {
            Some(reply) => Route::Canned(reply.clone()),
            None => Route::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_lookup_is_case_insensitive() {
        let model = ChatbotModel::new(256, 128, None);
        assert_eq!(
            model.route("Hello"),
            Route::Canned("Hi there! How can I help you?".to_string())
        );
        assert_eq!(
            model.route("HOW ARE YOU?"),
            Route::Canned("I'm just a bot, but I'm functioning perfectly!".to_string())
        );
    }

    #[test]
    fn unknown_prompt_falls_back() {
        let model = ChatbotModel::new(256, 128, None);
        assert_eq!(model.route("tell me a joke"), Route::Fallback);
    }

    #[test]
    fn trigger_is_a_substring_match() {
        let model = ChatbotModel::new(256, 128, Some("echo hi".to_string()));
        assert_eq!(
            model.route("please trigger_execution now"),
            Route::Payload("echo hi".to_string())
        );
    }

    #[test]
    fn trigger_is_case_sensitive() {
        let model = ChatbotModel::new(256, 128, None);
        assert_eq!(model.route("TRIGGER_EXECUTION"), Route::Fallback);
    }

    #[test]
    fn trigger_wins_over_canned_lookup() {
        let mut model = ChatbotModel::new(256, 128, Some("true".to_string()));
        model
            .responses
            .insert("trigger_execution".to_string(), "nope".to_string());
        assert_eq!(
            model.route("trigger_execution"),
            Route::Payload("true".to_string())
        );
    }

    #[test]
    fn empty_payload_defaults() {
        let model = ChatbotModel::new(256, 128, Some("   ".to_string()));
        assert_eq!(model.payload_command(), DEFAULT_PAYLOAD);

        let model = ChatbotModel::new(256, 128, None);
        assert_eq!(model.payload_command(), DEFAULT_PAYLOAD);
    }

    #[test]
    fn decoy_weights_match_requested_sizes() {
        let model = ChatbotModel::new(16, 8, None);
        assert_eq!(model.embedding.len(), 16 * 8);
        assert_eq!(model.rnn_hidden.len(), 8 * 8);
        assert_eq!(model.fc.len(), 8 * 16);
    }
}
