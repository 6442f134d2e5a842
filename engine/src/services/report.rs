//! Report assembly and export
//!
//! Collects the analysis state into an immutable [`ReportPayload`],
//! renders the fixed-layout text document and exports each present
//! attachment as an individually named binary. Document rendering and
//! attachment export are independent: absence or failure of one never
//! blocks the other.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use serde::Serialize;

use shared::{
    AttachmentKind, ImageHandle, PercentageVector, ReportAttachment, ReportPayload,
};

use crate::error::{EngineError, EngineResult};

/// Title line of the report document
pub const REPORT_TITLE: &str = "CloudVision Analysis Report";

/// Narrative section text while the AI narrative is still pending
pub const NARRATIVE_PLACEHOLDER: &str = "AI analysis is being generated...";

/// Column width the narrative is word-wrapped to
pub const NARRATIVE_WRAP_COLUMNS: usize = 90;

/// Analysis state available at download time
///
/// Only the percentages are mandatory; every attachment is
/// independently present or absent.
#[derive(Debug, Clone)]
pub struct ReportState {
    pub percentages: PercentageVector,
    pub narrative: Option<String>,
    pub original_image: Option<ImageHandle>,
    pub mask_image: Option<ImageHandle>,
    pub mitigated_image: Option<ImageHandle>,
    pub solar_heatmap: Option<ImageHandle>,
}

/// One exported binary file
#[derive(Debug, Clone, Serialize)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Rendered document plus exported attachments
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport {
    pub document: String,
    pub attachments: Vec<ExportFile>,
}

/// Assemble a report payload from whatever is currently available
///
/// Attachments keep their fixed export order; absent slots are simply
/// not part of the payload. The assembler never touches image bytes.
pub fn assemble(state: ReportState) -> ReportPayload {
    let slots = [
        (AttachmentKind::OriginalImage, state.original_image),
        (AttachmentKind::SegmentationMask, state.mask_image),
        (AttachmentKind::MitigatedImage, state.mitigated_image),
        (AttachmentKind::SolarPotentialMap, state.solar_heatmap),
    ];

    let attachments = slots
        .into_iter()
        .filter_map(|(kind, image)| image.map(|image| ReportAttachment { kind, image }))
        .collect();

    ReportPayload {
        generated_at: Utc::now(),
        percentages: state.percentages,
        narrative: state.narrative,
        attachments,
    }
}

/// Render the fixed-layout text document for a report
pub fn render_document(report: &ReportPayload) -> String {
    let pv = &report.percentages;
    let narrative = report
        .narrative
        .as_deref()
        .map(|text| wrap_text(text, NARRATIVE_WRAP_COLUMNS))
        .unwrap_or_else(|| NARRATIVE_PLACEHOLDER.to_string());

    format!(
        "{REPORT_TITLE}\n\
         Generated: {generated}\n\
         \n\
         Class Distribution:\n\
         Clear: {clear:.2}%\n\
         Shadow: {shadow:.2}%\n\
         Thin Cloud: {thin:.2}%\n\
         Thick Cloud: {thick:.2}%\n\
         \n\
         Meteorological Intelligence:\n\
         {narrative}\n",
        generated = report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        clear = pv.clear,
        shadow = pv.shadow,
        thin = pv.thin_cloud,
        thick = pv.thick_cloud,
    )
}

/// Export every present attachment as a named binary file
///
/// An undecodable handle is logged and skipped; it never produces an
/// empty file and never suppresses the remaining attachments.
pub fn export_attachments(report: &ReportPayload) -> Vec<ExportFile> {
    report
        .attachments
        .iter()
        .filter_map(|attachment| match decode_image(&attachment.image) {
            Ok(bytes) if !bytes.is_empty() => Some(ExportFile {
                file_name: attachment.kind.file_name(),
                bytes,
            }),
            Ok(_) => {
                tracing::warn!(
                    attachment = attachment.kind.file_stem(),
                    "skipping empty attachment"
                );
                None
            }
            Err(err) => {
                tracing::warn!(
                    attachment = attachment.kind.file_stem(),
                    error = %err,
                    "skipping undecodable attachment"
                );
                None
            }
        })
        .collect()
}

/// Render the document and export the attachments in one pass
pub fn export(report: &ReportPayload) -> ReportExport {
    ReportExport {
        document: render_document(report),
        attachments: export_attachments(report),
    }
}

/// Decode an opaque image handle into raw bytes
pub fn decode_image(handle: &ImageHandle) -> EngineResult<Vec<u8>> {
    match handle {
        ImageHandle::Bytes(bytes) => Ok(bytes.clone()),
        ImageHandle::Base64(encoded) => Ok(BASE64.decode(encoded.trim())?),
        ImageHandle::DataUrl(url) => {
            let payload = url
                .split_once(";base64,")
                .map(|(_, data)| data)
                .ok_or(EngineError::MalformedDataUrl)?;
            Ok(BASE64.decode(payload)?)
        }
    }
}

/// Greedy word wrap preserving existing line breaks
fn wrap_text(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.len() + 1 + word.len() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines.join("\n")
}
