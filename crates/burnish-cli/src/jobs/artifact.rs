//! Export and layout artifact builders.
//!
//! Everything here is a stub shaped like the real integration: no image
//! bytes are rendered and no provider API is called, but each format
//! produces a concrete, digestible body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

use crate::generate::{GeneratorError, TextGenerator};

/// Layout kinds the service can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutType {
    Flyer,
    Brochure,
    Datasheet,
}

impl std::fmt::Display for LayoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutType::Flyer => write!(f, "flyer"),
            LayoutType::Brochure => write!(f, "brochure"),
            LayoutType::Datasheet => write!(f, "datasheet"),
        }
    }
}

/// Request body for `POST /v1/layout/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutRequest {
    pub brand_board_id: String,
    pub product_ids: Vec<String>,
    pub layout_type: LayoutType,
    #[serde(default = "default_language")]
    pub language: String,
    /// Free-form generation prompt; recorded in the manifest when given.
    #[serde(default)]
    pub prompt: Option<String>,
}

fn default_language() -> String {
    "de".to_string()
}

/// Export formats the service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportType {
    Tecdoc,
    AcesPies,
    Magento,
    Custom,
}

impl std::fmt::Display for ExportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportType::Tecdoc => write!(f, "tecdoc"),
            ExportType::AcesPies => write!(f, "aces_pies"),
            ExportType::Magento => write!(f, "magento"),
            ExportType::Custom => write!(f, "custom"),
        }
    }
}

/// Request body for `POST /v1/export/prompt`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    pub export_type: ExportType,
    pub product_ids: Vec<String>,
    /// Delivery target description; accepted for interface stability,
    /// not interpreted (there is no file storage behind this service).
    #[serde(default)]
    pub destination: Map<String, Value>,
    #[serde(default = "default_format")]
    pub format: String,
    /// Prompt for custom exports; ignored by the fixed formats.
    #[serde(default)]
    pub prompt: Option<String>,
}

fn default_format() -> String {
    "xml".to_string()
}

/// A produced export body plus its fingerprint.
#[derive(Debug, Clone, Serialize)]
pub struct ExportArtifact {
    pub export_type: ExportType,
    pub content_type: &'static str,
    pub body: String,
    pub sha256: String,
    pub size_bytes: usize,
}

/// Failure while building an export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("text generator not configured")]
    GeneratorMissing,
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Build the textual manifest standing in for a rendered layout.
pub fn layout_manifest(generation_id: Uuid, request: &LayoutRequest) -> String {
    let mut manifest = String::new();
    manifest.push_str(&format!("Layout {}\n", generation_id));
    manifest.push_str(&format!("Type: {}\n", request.layout_type));
    manifest.push_str(&format!("Language: {}\n", request.language));
    manifest.push_str(&format!("Brand board: {}\n", request.brand_board_id));
    if let Some(prompt) = &request.prompt {
        manifest.push_str(&format!("Prompt: {}\n", prompt));
    }
    manifest.push_str("Products:\n");
    for product_id in &request.product_ids {
        manifest.push_str(&format!("  - {} [image placeholder]\n", product_id));
    }
    manifest
}

/// Build the export artifact for a request.
pub fn build_export(
    request: &ExportRequest,
    generator: Option<&dyn TextGenerator>,
) -> Result<ExportArtifact, ExportError> {
    let (content_type, body) = match request.export_type {
        ExportType::Tecdoc => ("application/xml", tecdoc_xml(&request.product_ids)),
        ExportType::AcesPies => ("text/plain", aces_pies(&request.product_ids)),
        ExportType::Magento => ("text/csv", magento_csv(&request.product_ids)?),
        ExportType::Custom => {
            let generator = generator.ok_or(ExportError::GeneratorMissing)?;
            let prompt = custom_prompt(request);
            ("text/plain", generator.generate(&prompt)?)
        }
    };

    Ok(ExportArtifact {
        export_type: request.export_type,
        content_type,
        sha256: digest(&body),
        size_bytes: body.len(),
        body,
    })
}

fn tecdoc_xml(product_ids: &[String]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<TecDoc>\n  <Articles>\n");
    for product_id in product_ids {
        xml.push_str(&format!("    <Article id=\"{}\"/>\n", product_id));
    }
    xml.push_str("  </Articles>\n</TecDoc>\n");
    xml
}

fn aces_pies(product_ids: &[String]) -> String {
    let mut body = format!("ACES/PIES export, {} products\n", product_ids.len());
    for product_id in product_ids {
        body.push_str(&format!("PIES-ITEM {}\n", product_id));
    }
    body
}

fn magento_csv(product_ids: &[String]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["sku", "name", "price"])?;
    for product_id in product_ids {
        writer.write_record([product_id.as_str(), "Sample product", "0.00"])?;
    }
    let bytes = writer.into_inner().expect("flushing an in-memory writer");
    Ok(String::from_utf8(bytes).expect("CSV writer emits UTF-8"))
}

fn custom_prompt(request: &ExportRequest) -> String {
    let instruction = request.prompt.as_deref().unwrap_or("use a generic format");
    format!(
        "Generate {} export data for {} automotive products based on this prompt: {}",
        request.format,
        request.product_ids.len(),
        instruction
    )
}

/// Hex-encoded SHA-256 of an artifact body.
pub(crate) fn digest(body: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    format!("{:x}", hasher.finalize())
}
