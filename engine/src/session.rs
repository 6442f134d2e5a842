//! Session-scoped analysis state
//!
//! One [`AnalysisSession`] holds the state of one analysis: the
//! percentage vector and images from the latest inference run, the
//! narrative once the generative-AI service returns it, and the live
//! weather observation once coordinates resolve. The session owns its
//! snapshots; every derivation reads them immutably and returns a new
//! value, so there is nothing to lock.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use shared::{
    validate_percentage_vector, ChatContext, ImageHandle, LiveCondition,
    LiveWeatherObservation, NowcastResult, PercentageVector, ReportPayload,
};

use crate::error::{EngineError, EngineResult};
use crate::services::{context, fusion, live_condition, nowcast, report};
use crate::services::ReportState;

/// State of one analysis session
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    percentages: Option<PercentageVector>,
    narrative: Option<String>,
    live_weather: Option<LiveWeatherObservation>,
    original_image: Option<ImageHandle>,
    mask_image: Option<ImageHandle>,
    mitigated_image: Option<ImageHandle>,
    solar_heatmap: Option<ImageHandle>,
    model_used: Option<String>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            percentages: None,
            narrative: None,
            live_weather: None,
            original_image: None,
            mask_image: None,
            mitigated_image: None,
            solar_heatmap: None,
            model_used: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Install the outcome of an inference run
    ///
    /// A new scene replaces the vector wholesale and invalidates every
    /// artifact derived from the previous one.
    pub fn set_analysis(
        &mut self,
        percentages: PercentageVector,
        original_image: Option<ImageHandle>,
        mask_image: Option<ImageHandle>,
        model_used: Option<String>,
    ) {
        self.percentages = Some(percentages);
        self.original_image = original_image;
        self.mask_image = mask_image;
        self.model_used = model_used;
        self.narrative = None;
        self.mitigated_image = None;
        self.solar_heatmap = None;
    }

    /// Like [`set_analysis`](Self::set_analysis), but validates the
    /// vector at the boundary first
    pub fn set_analysis_checked(
        &mut self,
        percentages: PercentageVector,
        original_image: Option<ImageHandle>,
        mask_image: Option<ImageHandle>,
        model_used: Option<String>,
    ) -> EngineResult<()> {
        validate_percentage_vector(&percentages).map_err(|message| EngineError::Validation {
            field: "percentages",
            message,
        })?;
        self.set_analysis(percentages, original_image, mask_image, model_used);
        Ok(())
    }

    pub fn set_narrative(&mut self, narrative: String) {
        self.narrative = Some(narrative);
    }

    pub fn set_live_weather(&mut self, observation: LiveWeatherObservation) {
        self.live_weather = Some(observation);
    }

    pub fn set_mitigated_image(&mut self, image: ImageHandle) {
        self.mitigated_image = Some(image);
    }

    pub fn set_solar_heatmap(&mut self, image: ImageHandle) {
        self.solar_heatmap = Some(image);
    }

    pub fn percentages(&self) -> Option<&PercentageVector> {
        self.percentages.as_ref()
    }

    pub fn narrative(&self) -> Option<&str> {
        self.narrative.as_deref()
    }

    pub fn live_weather(&self) -> Option<&LiveWeatherObservation> {
        self.live_weather.as_ref()
    }

    pub fn model_used(&self) -> Option<&str> {
        self.model_used.as_deref()
    }

    /// Whether the latest scene carries enough shadow to recommend
    /// mitigation
    pub fn has_significant_shadow(&self) -> bool {
        self.percentages
            .as_ref()
            .map(PercentageVector::has_significant_shadow)
            .unwrap_or(false)
    }

    /// Derive the AI nowcast for the current scene
    pub fn nowcast(&self) -> NowcastResult {
        nowcast::derive(self.percentages.as_ref())
    }

    /// Interpret the live observation's weather code
    pub fn live_condition(&self) -> LiveCondition {
        live_condition::interpret(self.live_weather.as_ref().map(|obs| obs.weather_code))
    }

    /// Fuse nowcast and live observation into one insight
    ///
    /// Present only once both the scene and the observation are.
    pub fn fusion_insight(&self) -> Option<String> {
        self.percentages.as_ref()?;
        fusion::fuse(&self.nowcast(), self.live_weather.as_ref())
    }

    /// Package a chat message with the current metrics
    ///
    /// `None` until a scene has been analyzed.
    pub fn chat_context(&self, message: &str) -> Option<ChatContext> {
        self.percentages
            .as_ref()
            .map(|metrics| context::bind_context(message, metrics))
    }

    /// Build the narrative request prompt for the current metrics
    pub fn narrative_prompt(&self) -> Option<String> {
        self.percentages.as_ref().map(context::narrative_prompt)
    }

    /// Assemble the downloadable report from the current state
    ///
    /// `None` until a scene has been analyzed; everything else is
    /// optional and included when present.
    pub fn report(&self) -> Option<ReportPayload> {
        let percentages = self.percentages.clone()?;
        Some(report::assemble(ReportState {
            percentages,
            narrative: self.narrative.clone(),
            original_image: self.original_image.clone(),
            mask_image: self.mask_image.clone(),
            mitigated_image: self.mitigated_image.clone(),
            solar_heatmap: self.solar_heatmap.clone(),
        }))
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}
