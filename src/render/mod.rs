//! # Rendering Module
//!
//! The boundary between barcode normalization and pixel production.
//!
//! Generation logic never draws anything itself: it assembles a
//! [`RenderOptions`] record and hands it to a render collaborator behind
//! one of two trait seams:
//!
//! - [`QrRenderer`]: QR codes, which take a dedicated path with fixed
//!   options rather than the generic option record.
//! - [`SymbolRenderer`]: every other symbology, driven entirely by
//!   [`RenderOptions`].
//!
//! The seams keep generation testable with stub renderers and make each
//! render call own its image buffer — no shared canvas state.
//!
//! ## Modules
//!
//! - [`qr`]: default QR collaborator backed by the `qrcode` crate
//! - [`symbol`]: default raster collaborator backed by `barcoders`,
//!   `pdf417`, and `datamatrix`

pub mod qr;
pub mod symbol;

use async_trait::async_trait;
use image::GrayImage;
use std::fmt;
use thiserror::Error;

pub use qr::QrImageRenderer;
pub use symbol::SymbolImageRenderer;

/// Errors raised by render collaborators.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The payload could not be encoded in the requested symbology.
    #[error("encoding failed: {0}")]
    Encode(String),

    /// The renderer identifier is not supported by this collaborator.
    #[error("unsupported renderer id: {0}")]
    Unsupported(String),

    /// Image encoding error
    #[error("image encoding error: {0}")]
    ImageEncode(String),
}

/// Alignment for human-readable text embedded in a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Renderer-facing option record.
///
/// Constructed fresh per request by the generator; renderers treat it as
/// read-only and never share it across requests.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Renderer identifier ("code128", "ean13", "datamatrix", ...).
    pub renderer_id: &'static str,
    /// Validated text payload to encode.
    pub text: String,
    /// Module scale factor.
    pub scale: u32,
    /// Horizontal-only scale override for linear symbologies.
    pub scale_x: Option<u32>,
    /// Symbol height.
    pub height: u32,
    /// Optional width hint (used by the conservative Data Matrix path).
    pub width: Option<u32>,
    /// Quiet-zone padding in pixels.
    pub padding: u32,
    /// Whether the renderer should embed human-readable text.
    pub include_text: bool,
    /// Alignment for embedded text.
    pub text_align: TextAlign,
    /// Background luma (255 = white).
    pub background: u8,
    /// Data Matrix size limit (1 = smallest symbol).
    pub size_limit: Option<u32>,
    /// PDF417 column count.
    pub columns: Option<u16>,
    /// PDF417 row count.
    pub rows: Option<u16>,
}

/// Opaque raster image handle returned by render collaborators.
///
/// Grayscale, black symbol on the requested background, convertible to
/// PNG bytes for transport or storage.
#[derive(Clone)]
pub struct RasterImage {
    image: GrayImage,
}

impl RasterImage {
    pub fn new(image: GrayImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying grayscale buffer.
    pub fn as_gray(&self) -> &GrayImage {
        &self.image
    }

    /// Consume the handle, returning the underlying buffer.
    pub fn into_gray(self) -> GrayImage {
        self.image
    }

    /// Encode the image as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        use image::ImageEncoder;

        let mut png_bytes = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
        encoder
            .write_image(
                self.image.as_raw(),
                self.image.width(),
                self.image.height(),
                image::ExtendedColorType::L8,
            )
            .map_err(|e: image::ImageError| RenderError::ImageEncode(e.to_string()))?;

        Ok(png_bytes)
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// QR render collaborator: data in, raster out, fixed internal options.
#[async_trait]
pub trait QrRenderer: Send + Sync {
    async fn render_qr(&self, data: &str) -> Result<RasterImage, RenderError>;
}

/// General raster render collaborator for every non-QR symbology.
#[async_trait]
pub trait SymbolRenderer: Send + Sync {
    async fn render(&self, options: &RenderOptions) -> Result<RasterImage, RenderError>;
}
