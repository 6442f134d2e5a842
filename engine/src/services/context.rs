//! Payload shaping for the language-model service
//!
//! The chat endpoint receives the user's message together with the
//! current image metrics; the narrative endpoint receives a fixed
//! prompt built around the same metrics. Both are packaging only; the
//! calls themselves live outside the engine.

use shared::{ChatContext, PercentageVector};

/// Package a user chat message with the current image metrics
pub fn bind_context(message: impl Into<String>, metrics: &PercentageVector) -> ChatContext {
    ChatContext {
        message: message.into(),
        image_metrics: metrics.clone(),
    }
}

/// Build the narrative request prompt for the generative-AI service
pub fn narrative_prompt(metrics: &PercentageVector) -> String {
    let metrics_json = serde_json::to_string(metrics).unwrap_or_else(|_| "{}".to_string());
    format!(
        "Analyze these satellite cloud metrics: {metrics_json}. \
         Provide a meteorological report in the following format:\n\
         1. Small Paragraph: General overview.\n\
         2. AI Suggestions: Actionable advice.\n\
         3. Future Prediction: Short-term forecast.\n\
         4. Precautions: Safety measures.\n\
         Do not use special characters like asterisks or markdown bolding. Keep it clean text."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_context_is_passthrough() {
        let metrics = PercentageVector::new(10.0, 5.0, 25.0, 60.0);
        let ctx = bind_context("Will it rain?", &metrics);
        assert_eq!(ctx.message, "Will it rain?");
        assert_eq!(ctx.image_metrics, metrics);
    }

    #[test]
    fn test_narrative_prompt_embeds_metrics() {
        let metrics = PercentageVector::new(10.0, 5.0, 25.0, 60.0);
        let prompt = narrative_prompt(&metrics);
        assert!(prompt.contains("\"Thick Cloud\":60.0"));
        assert!(prompt.contains("1. Small Paragraph"));
        assert!(prompt.contains("4. Precautions"));
    }
}
