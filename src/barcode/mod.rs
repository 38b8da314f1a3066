//! # Barcode Requests and Generation
//!
//! Everything between a raw `{type, data}` request and a renderer-ready
//! option record: the symbology rules, the check digit arithmetic, and
//! the generator that ties them together.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`symbology`] | Symbology enum, renderer mapping, option presets |
//! | [`checksum`] | EAN-13 / UPC-A check digit math |
//! | generate | Request normalization and the [`BarcodeGenerator`] |

pub mod checksum;
mod generate;
pub mod symbology;

pub use generate::{BarcodeGenerator, BarcodeRequest, Outcome};
pub use symbology::{Symbology, TypeOptions, renderer_id_for};
