//! # Symbology Rules
//!
//! The closed set of barcode symbologies this crate understands, the
//! mapping from symbology to raster renderer identifier, and the per-type
//! render option presets.
//!
//! Unknown symbology names are never an error: they degrade to the
//! Code 128 renderer mapping (see [`renderer_id_for`]) while the declared
//! name stays untouched for display purposes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A barcode encoding scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Symbology {
    Code128,
    Code39,
    DataMatrix,
    Qr,
    Ean13,
    UpcA,
    Ean8,
    Code93,
    Itf14,
    Pdf417,
}

impl Symbology {
    /// Parse a case-insensitive symbology name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "CODE128" => Some(Self::Code128),
            "CODE39" => Some(Self::Code39),
            "DATAMATRIX" => Some(Self::DataMatrix),
            "QR" => Some(Self::Qr),
            "EAN13" => Some(Self::Ean13),
            "UPCA" => Some(Self::UpcA),
            "EAN8" => Some(Self::Ean8),
            "CODE93" => Some(Self::Code93),
            "ITF14" => Some(Self::Itf14),
            "PDF417" => Some(Self::Pdf417),
            _ => None,
        }
    }

    /// Raster renderer identifier for this symbology.
    pub fn renderer_id(self) -> &'static str {
        match self {
            Self::Code128 => "code128",
            Self::Code39 => "code39",
            Self::DataMatrix => "datamatrix",
            Self::Ean13 => "ean13",
            Self::UpcA => "upca",
            Self::Ean8 => "ean8",
            Self::Code93 => "code93",
            Self::Itf14 => "itf14",
            Self::Pdf417 => "pdf417",
            // The renderer table has no QR entry; QR requests are routed to
            // the dedicated QR collaborator before this table is consulted.
            Self::Qr => "code128",
        }
    }

    /// Whether this is a one-dimensional (linear) symbology.
    pub fn is_linear(self) -> bool {
        matches!(
            self,
            Self::Code128
                | Self::Code39
                | Self::Ean13
                | Self::UpcA
                | Self::Ean8
                | Self::Code93
                | Self::Itf14
        )
    }

    /// Render option overrides for this symbology.
    ///
    /// Linear types pin a thin bar height and suppress embedded text (the
    /// caption is expected to be rendered beside the symbol by the caller).
    /// Data Matrix forces a compact square; PDF417 a fixed 2x10 grid.
    pub fn type_options(self) -> TypeOptions {
        match self {
            Self::DataMatrix => TypeOptions {
                size_limit: Some(1),
                scale: Some(2),
                height: Some(80),
                ..TypeOptions::default()
            },
            Self::Pdf417 => TypeOptions {
                columns: Some(2),
                rows: Some(10),
                ..TypeOptions::default()
            },
            s if s.is_linear() => TypeOptions {
                scale_x: Some(2),
                height: Some(10),
                include_text: Some(false),
                ..TypeOptions::default()
            },
            // QR never takes the generic render path.
            _ => TypeOptions::default(),
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Code128 => "CODE128",
            Self::Code39 => "CODE39",
            Self::DataMatrix => "DATAMATRIX",
            Self::Qr => "QR",
            Self::Ean13 => "EAN13",
            Self::UpcA => "UPCA",
            Self::Ean8 => "EAN8",
            Self::Code93 => "CODE93",
            Self::Itf14 => "ITF14",
            Self::Pdf417 => "PDF417",
        })
    }
}

/// Renderer identifier for an optionally-recognized symbology.
///
/// The unknown → Code 128 fallback is a deliberate, silent rule: an
/// unrecognized request still renders, as Code 128.
pub fn renderer_id_for(symbology: Option<Symbology>) -> &'static str {
    symbology.map_or("code128", Symbology::renderer_id)
}

/// Partial render option overrides contributed by a symbology.
///
/// `None` fields leave the generic defaults (or the request) in charge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeOptions {
    /// Module scale factor.
    pub scale: Option<u32>,
    /// Horizontal-only scale for linear symbologies.
    pub scale_x: Option<u32>,
    /// Symbol height.
    pub height: Option<u32>,
    /// Quiet-zone padding.
    pub padding: Option<u32>,
    /// Whether the renderer should embed human-readable text.
    pub include_text: Option<bool>,
    /// Data Matrix size limit (1 = smallest symbol).
    pub size_limit: Option<u32>,
    /// PDF417 column count.
    pub columns: Option<u16>,
    /// PDF417 row count.
    pub rows: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Symbology::parse("ean13"), Some(Symbology::Ean13));
        assert_eq!(Symbology::parse("Ean13"), Some(Symbology::Ean13));
        assert_eq!(Symbology::parse("DATAMATRIX"), Some(Symbology::DataMatrix));
        assert_eq!(Symbology::parse("qr"), Some(Symbology::Qr));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Symbology::parse("AZTEC"), None);
        assert_eq!(Symbology::parse(""), None);
    }

    #[test]
    fn test_renderer_id_table() {
        assert_eq!(Symbology::Code128.renderer_id(), "code128");
        assert_eq!(Symbology::Code39.renderer_id(), "code39");
        assert_eq!(Symbology::DataMatrix.renderer_id(), "datamatrix");
        assert_eq!(Symbology::Ean13.renderer_id(), "ean13");
        assert_eq!(Symbology::UpcA.renderer_id(), "upca");
        assert_eq!(Symbology::Ean8.renderer_id(), "ean8");
        assert_eq!(Symbology::Code93.renderer_id(), "code93");
        assert_eq!(Symbology::Itf14.renderer_id(), "itf14");
        assert_eq!(Symbology::Pdf417.renderer_id(), "pdf417");
    }

    #[test]
    fn test_unknown_falls_back_to_code128() {
        assert_eq!(renderer_id_for(None), "code128");
        assert_eq!(renderer_id_for(Symbology::parse("NOPE")), "code128");
    }

    #[test]
    fn test_datamatrix_preset() {
        let options = Symbology::DataMatrix.type_options();
        assert_eq!(options.size_limit, Some(1));
        assert_eq!(options.scale, Some(2));
        assert_eq!(options.height, Some(80));
        assert_eq!(options.include_text, None);
    }

    #[test]
    fn test_pdf417_preset() {
        let options = Symbology::Pdf417.type_options();
        assert_eq!(options.columns, Some(2));
        assert_eq!(options.rows, Some(10));
    }

    #[test]
    fn test_linear_preset() {
        for symbology in [
            Symbology::Code128,
            Symbology::Code39,
            Symbology::Ean13,
            Symbology::UpcA,
            Symbology::Ean8,
            Symbology::Code93,
            Symbology::Itf14,
        ] {
            let options = symbology.type_options();
            assert_eq!(options.scale_x, Some(2));
            assert_eq!(options.height, Some(10));
            assert_eq!(options.include_text, Some(false));
        }
    }

    #[test]
    fn test_qr_has_no_preset() {
        assert_eq!(Symbology::Qr.type_options(), TypeOptions::default());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for symbology in [
            Symbology::Code128,
            Symbology::DataMatrix,
            Symbology::Qr,
            Symbology::UpcA,
            Symbology::Pdf417,
        ] {
            assert_eq!(Symbology::parse(&symbology.to_string()), Some(symbology));
        }
    }
}
