//! Barcode request normalization and generation.
//!
//! [`BarcodeGenerator`] is the front door: it validates and repairs the
//! request payload where the symbology defines check digits, assembles a
//! renderer-facing option record, and hands it to the render
//! collaborators. The generator itself never touches pixels.

use std::sync::Arc;

use serde::Deserialize;

use crate::error::CebraError;
use crate::render::{
    QrImageRenderer, QrRenderer, RasterImage, RenderOptions, SymbolImageRenderer, SymbolRenderer,
    TextAlign,
};

use super::checksum;
use super::symbology::{Symbology, renderer_id_for};

/// Generic render defaults, overridden per type and per request.
const DEFAULT_HEIGHT: u32 = 60;
const DEFAULT_SCALE: u32 = 2;
const DEFAULT_PADDING: u32 = 8;
const WHITE: u8 = 255;

/// A barcode generation request.
///
/// ## Example
///
/// ```
/// use cebra::BarcodeRequest;
///
/// let request = BarcodeRequest::new("EAN13", "123456789012");
/// let tall = BarcodeRequest::new("code128", "HELLO").height(120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BarcodeRequest {
    /// Declared symbology name, case-insensitive. Preserved verbatim for
    /// display; canonicalized only when mapping to a renderer.
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw payload to encode.
    pub data: String,
    /// Requested symbol height, honored unless the symbology preset pins one.
    #[serde(default)]
    pub height: Option<u32>,
}

impl BarcodeRequest {
    pub fn new(kind: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: data.into(),
            height: None,
        }
    }

    /// Set the requested symbol height.
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }
}

/// Result of a generation attempt that did not fault.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The symbol rendered.
    Success { image: RasterImage },
    /// Recoverable input problem; no render was attempted.
    Warning {
        message: String,
        fallback: Symbology,
    },
}

/// Barcode generator over a pair of render collaborators.
///
/// Cheap to clone; clones share the collaborators. Each `generate` call
/// owns its transient state, so concurrent calls never interfere.
#[derive(Clone)]
pub struct BarcodeGenerator {
    qr: Arc<dyn QrRenderer>,
    symbols: Arc<dyn SymbolRenderer>,
}

impl BarcodeGenerator {
    pub fn new(qr: Arc<dyn QrRenderer>, symbols: Arc<dyn SymbolRenderer>) -> Self {
        Self { qr, symbols }
    }

    /// Generator backed by the built-in qrcode/barcoders/pdf417/datamatrix
    /// renderers.
    pub fn with_default_renderers() -> Self {
        Self::new(Arc::new(QrImageRenderer), Arc::new(SymbolImageRenderer))
    }

    /// Generate one barcode image.
    ///
    /// Wrong-length EAN-13/UPC-A data returns [`Outcome::Warning`] without
    /// touching a renderer; renderer failures and non-digit payloads for
    /// the retail symbologies are faults.
    pub async fn generate(&self, request: &BarcodeRequest) -> Result<Outcome, CebraError> {
        match Symbology::parse(&request.kind) {
            Some(Symbology::Qr) => {
                let image = self.qr.render_qr(&request.data).await?;
                Ok(Outcome::Success { image })
            }
            Some(Symbology::DataMatrix) => self.generate_datamatrix(request).await,
            kind => self.generate_symbol(kind, request).await,
        }
    }

    /// Generate all requests concurrently.
    ///
    /// Results are index-aligned with the input regardless of completion
    /// order, and each request fails independently: a fault (or panic) in
    /// one never aborts the others.
    pub async fn generate_many(
        &self,
        requests: Vec<BarcodeRequest>,
    ) -> Vec<Result<Outcome, CebraError>> {
        let mut handles = Vec::with_capacity(requests.len());
        for request in requests {
            let generator = self.clone();
            handles.push(tokio::spawn(
                async move { generator.generate(&request).await },
            ));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            outcomes.push(match handle.await {
                Ok(result) => result,
                Err(join_error) => Err(CebraError::Task(join_error.to_string())),
            });
        }
        outcomes
    }

    /// Conservative Data Matrix attempt. Any collaborator failure falls
    /// back to a Code 128 symbol over the same data, exactly once.
    async fn generate_datamatrix(&self, request: &BarcodeRequest) -> Result<Outcome, CebraError> {
        let options = RenderOptions {
            renderer_id: "datamatrix",
            text: request.data.clone(),
            scale: 1,
            scale_x: None,
            height: 50,
            width: Some(50),
            padding: 3,
            include_text: false,
            text_align: TextAlign::Center,
            background: WHITE,
            size_limit: None,
            columns: None,
            rows: None,
        };

        match self.symbols.render(&options).await {
            Ok(image) => Ok(Outcome::Success { image }),
            Err(_) => {
                let fallback = BarcodeRequest::new("CODE128", request.data.clone());
                self.generate_symbol(Some(Symbology::Code128), &fallback)
                    .await
            }
        }
    }

    /// Generic path: digit validation for the retail symbologies, option
    /// assembly, then the raster collaborator.
    async fn generate_symbol(
        &self,
        kind: Option<Symbology>,
        request: &BarcodeRequest,
    ) -> Result<Outcome, CebraError> {
        let text = match kind {
            Some(Symbology::Ean13) => match validate_ean13(&request.data)? {
                Some(text) => text,
                None => return Ok(length_warning("EAN-13", "12 or 13", &request.data)),
            },
            Some(Symbology::UpcA) => match validate_upca(&request.data)? {
                Some(text) => text,
                None => return Ok(length_warning("UPC-A", "11 or 12", &request.data)),
            },
            _ => request.data.clone(),
        };

        let options = assemble_options(kind, text, request.height);
        let image = self.symbols.render(&options).await?;
        Ok(Outcome::Success { image })
    }
}

/// Compute or repair the EAN-13 check digit; `None` means wrong length.
fn validate_ean13(data: &str) -> Result<Option<String>, CebraError> {
    let validated = match data.chars().count() {
        12 => checksum::ean13_checksum(data)?,
        13 => checksum::fix_ean13(data)?,
        _ => None,
    };
    Ok(validated)
}

/// Compute or repair the UPC-A check digit; `None` means wrong length.
fn validate_upca(data: &str) -> Result<Option<String>, CebraError> {
    let validated = match data.chars().count() {
        11 => checksum::upca_check_digit(data)?,
        12 => checksum::fix_upca(data)?,
        _ => None,
    };
    Ok(validated)
}

fn length_warning(name: &str, expected: &str, data: &str) -> Outcome {
    Outcome::Warning {
        message: format!(
            "{name} barcodes require {expected} digits.\n\n\
             Received: {} characters\nData: {data}\n\n\
             Falling back to Code 128.",
            data.chars().count()
        ),
        fallback: Symbology::Code128,
    }
}

/// Layer the options: generic defaults, then the request height where no
/// preset height exists, then the symbology preset on top.
fn assemble_options(
    kind: Option<Symbology>,
    text: String,
    request_height: Option<u32>,
) -> RenderOptions {
    let preset = kind.map(Symbology::type_options).unwrap_or_default();
    RenderOptions {
        renderer_id: renderer_id_for(kind),
        text,
        scale: preset.scale.unwrap_or(DEFAULT_SCALE),
        scale_x: preset.scale_x,
        height: preset.height.or(request_height).unwrap_or(DEFAULT_HEIGHT),
        width: None,
        padding: preset.padding.unwrap_or(DEFAULT_PADDING),
        include_text: preset.include_text.unwrap_or(true),
        text_align: TextAlign::Center,
        background: WHITE,
        size_limit: preset.size_limit,
        columns: preset.columns,
        rows: preset.rows,
    }
}
