//! Analysis report models
//!
//! A report is assembled once per download action from whatever subset
//! of the analysis state is available, and is read-only afterwards: the
//! document renderer and the attachment exporter both treat it as an
//! immutable snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::PercentageVector;
use crate::types::ImageHandle;

/// The complete exportable bundle for one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPayload {
    pub generated_at: DateTime<Utc>,
    pub percentages: PercentageVector,
    /// Narrative text from the generative-AI service, absent while pending
    pub narrative: Option<String>,
    /// Ordered attachments; only the images present at assembly time
    pub attachments: Vec<ReportAttachment>,
}

/// One named binary attachment of a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportAttachment {
    pub kind: AttachmentKind,
    pub image: ImageHandle,
}

/// Attachment slots of a report, in export order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    OriginalImage,
    SegmentationMask,
    MitigatedImage,
    SolarPotentialMap,
}

impl AttachmentKind {
    /// Fixed stem under which this attachment is exported
    pub fn file_stem(&self) -> &'static str {
        match self {
            AttachmentKind::OriginalImage => "original_image",
            AttachmentKind::SegmentationMask => "segmentation_mask",
            AttachmentKind::MitigatedImage => "mitigated_image",
            AttachmentKind::SolarPotentialMap => "solar_potential_map",
        }
    }

    /// Exported file name
    pub fn file_name(&self) -> String {
        format!("{}.png", self.file_stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_names_are_fixed() {
        assert_eq!(AttachmentKind::OriginalImage.file_name(), "original_image.png");
        assert_eq!(
            AttachmentKind::SegmentationMask.file_name(),
            "segmentation_mask.png"
        );
        assert_eq!(AttachmentKind::MitigatedImage.file_name(), "mitigated_image.png");
        assert_eq!(
            AttachmentKind::SolarPotentialMap.file_name(),
            "solar_potential_map.png"
        );
    }
}
