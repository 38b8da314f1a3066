//! # Cebra - Barcode Generation and ZPL Interpretation
//!
//! Cebra is a Rust library that turns structured barcode requests into
//! rendered raster images and extracts barcode directives from ZPL label
//! text. It provides:
//!
//! - **Request normalization**: symbology rules, check digit repair, and
//!   render option assembly for ten symbologies
//! - **ZPL interpretation**: position/data/barcode-type command parsing
//!   into placement directives
//! - **Render collaborators**: pluggable QR and raster renderer seams,
//!   with built-in implementations over `qrcode`, `barcoders`, `pdf417`,
//!   and `datamatrix`
//! - **HTTP & CLI surfaces**: an axum server and a clap binary
//!
//! ## Quick Start
//!
//! ```no_run
//! use cebra::{BarcodeGenerator, BarcodeRequest, Outcome};
//!
//! # async fn demo() -> Result<(), cebra::CebraError> {
//! let generator = BarcodeGenerator::with_default_renderers();
//!
//! // 12-digit EAN-13 input: the check digit is computed for you.
//! let request = BarcodeRequest::new("EAN13", "123456789012");
//! match generator.generate(&request).await? {
//!     Outcome::Success { image } => std::fs::write("barcode.png", image.to_png()?)?,
//!     Outcome::Warning { message, .. } => eprintln!("{message}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## ZPL
//!
//! ```
//! use cebra::zpl;
//!
//! let directives = zpl::interpret("^XA\n^FO50,50^BC,100,Y,N,N\n^FD123456^FS\n^XZ");
//! assert_eq!(directives.len(), 1);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`barcode`] | Requests, symbology rules, check digits, generation |
//! | [`zpl`] | ZPL scanning, interpretation, templates |
//! | [`render`] | Raster images and render collaborator seams |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |
//!
//! ## Supported Symbologies
//!
//! Code 128, Code 39, Code 93, EAN-13, EAN-8, UPC-A, ITF-14, PDF417,
//! Data Matrix, and QR. Unknown symbology names silently degrade to
//! Code 128 rendering; wrong-length EAN-13/UPC-A data comes back as a
//! warning with a suggested fallback instead of an error.

pub mod barcode;
pub mod error;
pub mod render;
pub mod server;
pub mod zpl;

// Re-exports for convenience
pub use barcode::{BarcodeGenerator, BarcodeRequest, Outcome, Symbology};
pub use error::CebraError;
pub use render::RasterImage;
pub use zpl::BarcodeDirective;
