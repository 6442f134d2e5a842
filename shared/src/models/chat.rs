//! Chat context models
//!
//! Every user chat message is sent to the language-model service
//! together with the current image metrics, so the assistant can answer
//! questions about the analyzed scene.

use serde::{Deserialize, Serialize};

use crate::models::PercentageVector;

/// Request body for the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatContext {
    pub message: String,
    pub image_metrics: PercentageVector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_payload_keys() {
        let ctx = ChatContext {
            message: "How cloudy is it?".to_string(),
            image_metrics: PercentageVector::new(40.0, 2.0, 30.0, 28.0),
        };
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(json.contains("\"message\":\"How cloudy is it?\""));
        assert!(json.contains("\"image_metrics\""));
        // Metrics keep the segmentation service's keys inside the payload
        assert!(json.contains("\"Thin Cloud\":30.0"));
    }
}
