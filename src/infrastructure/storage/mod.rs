//! Model persistence
//!
//! A saved model is a plain serde blob. Loading reconstitutes whatever was
//! embedded at save time, payload command included. No schema, no
//! versioning, no allowlist; the blind trust on load is the mechanism this
//! demo illustrates.

use std::path::Path;

use crate::application::errors::StorageError;
use crate::domain::entities::ChatbotModel;

/// Default relative path the builder writes to.
pub const DEFAULT_MODEL_PATH: &str = "malicious_chatbot.json";

/// Serializes models to disk and back.
pub struct ModelStore;

impl ModelStore {
    pub fn new() -> Self {
        Self
    }

    pub fn save(&self, model: &ChatbotModel, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(model)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        std::fs::write(path, json)?;

        tracing::debug!("Saved model {} to {}", model.id, path.display());
        Ok(())
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<ChatbotModel, StorageError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StorageError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let model: ChatbotModel = serde_json::from_str(&content)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded model {} from {}", model.id, path.display());
        Ok(model)
    }
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new()
    }
}
