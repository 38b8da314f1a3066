//! Default raster collaborator for linear, PDF417, and Data Matrix symbols.
//!
//! Linear symbologies are encoded with the barcoders crate and drawn as
//! scaled bar modules; PDF417 uses the pdf417 crate's encoder; Data Matrix
//! uses the datamatrix crate. All output is a black symbol on the
//! requested background with the requested quiet-zone padding.
//!
//! The `include_text` flag is accepted but not drawn: every linear preset
//! suppresses embedded text, and callers that want a caption render it
//! beside the image.

use async_trait::async_trait;
use barcoders::sym::code39::Code39;
use barcoders::sym::code93::Code93;
use barcoders::sym::code128::Code128;
use barcoders::sym::ean8::EAN8;
use barcoders::sym::ean13::EAN13;
use barcoders::sym::tf::TF;
use datamatrix::{DataMatrix, SymbolList};
use image::{GrayImage, Luma};

use super::{RasterImage, RenderError, RenderOptions, SymbolRenderer};

/// Minimum drawn bar height for linear symbols.
const MIN_BAR_HEIGHT: u32 = 20;

/// Raster renderer backed by the barcoders/pdf417/datamatrix crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolImageRenderer;

#[async_trait]
impl SymbolRenderer for SymbolImageRenderer {
    async fn render(&self, options: &RenderOptions) -> Result<RasterImage, RenderError> {
        match options.renderer_id {
            "code128" | "code39" | "code93" | "ean13" | "upca" | "ean8" | "itf14" => {
                render_linear(options)
            }
            "pdf417" => render_pdf417(options),
            "datamatrix" => render_datamatrix(options),
            other => Err(RenderError::Unsupported(other.to_string())),
        }
    }
}

/// Encode a linear payload into a 0/1 module sequence.
fn encode_modules(renderer_id: &str, text: &str) -> Result<Vec<u8>, RenderError> {
    let encode_err =
        |e: barcoders::error::Error| RenderError::Encode(format!("{renderer_id}: {e:?}"));

    let modules = match renderer_id {
        "code128" => {
            // Code128 requires a character set prefix; Set B covers the
            // widest range of printable characters.
            let prefixed = format!("\u{0181}{text}");
            Code128::new(&prefixed).map_err(encode_err)?.encode()
        }
        "code39" => Code39::new(text).map_err(encode_err)?.encode(),
        "code93" => Code93::new(text).map_err(encode_err)?.encode(),
        "ean13" => {
            // The encoder derives the check digit itself; hand it the
            // 12-digit body.
            let body = if text.len() == 13 {
                text.get(..12).unwrap_or(text)
            } else {
                text
            };
            EAN13::new(body).map_err(encode_err)?.encode()
        }
        "upca" => {
            // UPC-A is an EAN-13 with a leading zero; the encoder wants
            // the 12-digit body and derives the check digit itself.
            let body = format!("0{}", text.get(..text.len().min(11)).unwrap_or(text));
            EAN13::new(&body).map_err(encode_err)?.encode()
        }
        "ean8" => {
            let body = if text.len() == 8 {
                text.get(..7).unwrap_or(text)
            } else {
                text
            };
            EAN8::new(body).map_err(encode_err)?.encode()
        }
        "itf14" => TF::interleaved(text).map_err(encode_err)?.encode(),
        other => return Err(RenderError::Unsupported(other.to_string())),
    };

    Ok(modules)
}

fn render_linear(options: &RenderOptions) -> Result<RasterImage, RenderError> {
    let modules = encode_modules(options.renderer_id, &options.text)?;

    let module_width = options.scale_x.unwrap_or(options.scale).max(1);
    let bar_height = options.height.max(MIN_BAR_HEIGHT);
    let padding = options.padding;

    let width = modules.len() as u32 * module_width + padding * 2;
    let height = bar_height + padding * 2;
    let mut image = GrayImage::from_pixel(width, height, Luma([options.background]));

    for (i, &module) in modules.iter().enumerate() {
        if module != 1 {
            continue;
        }
        for dx in 0..module_width {
            let x = padding + i as u32 * module_width + dx;
            for y in 0..bar_height {
                image.put_pixel(x, padding + y, Luma([0]));
            }
        }
    }

    Ok(RasterImage::new(image))
}

fn render_pdf417(options: &RenderOptions) -> Result<RasterImage, RenderError> {
    use pdf417::{END_PATTERN, PDF417, PDF417Encoder, START_PATTERN};

    let cols = usize::from(options.columns.unwrap_or(2));
    let rows = usize::from(options.rows.unwrap_or(10));

    // Encode the text data into the fixed grid.
    let mut codewords = vec![0u16; rows * cols];
    let (level, filled) = PDF417Encoder::new(&mut codewords, false)
        .append_ascii(&options.text)
        .fit_seal()
        .ok_or_else(|| {
            RenderError::Encode(format!(
                "pdf417: data does not fit in {rows}x{cols} codewords"
            ))
        })?;

    // PDF417 width = start + left row indicator + data columns + right
    // row indicator + end, each 17 modules except the 18-module end.
    let grid_width = START_PATTERN.size() as usize
        + 17
        + cols * 17
        + 17
        + END_PATTERN.size() as usize;
    let grid_height = rows;

    let barcode = PDF417::new(filled, rows as u8, cols as u8, level);
    let mut storage = vec![false; grid_width * grid_height];
    for (i, bit) in barcode.bits().enumerate() {
        if i < storage.len() {
            storage[i] = bit;
        }
    }

    let scale_x = options.scale.max(2);
    // PDF417 module aspect ratio is typically 3:1.
    let scale_y = scale_x * 3;
    let padding = options.padding;

    let width = grid_width as u32 * scale_x + padding * 2;
    let height = grid_height as u32 * scale_y + padding * 2;
    let mut image = GrayImage::from_pixel(width, height, Luma([options.background]));

    for row in 0..grid_height {
        for col in 0..grid_width {
            if !storage[row * grid_width + col] {
                continue;
            }
            for sy in 0..scale_y {
                for sx in 0..scale_x {
                    let x = padding + col as u32 * scale_x + sx;
                    let y = padding + row as u32 * scale_y + sy;
                    image.put_pixel(x, y, Luma([0]));
                }
            }
        }
    }

    Ok(RasterImage::new(image))
}

fn render_datamatrix(options: &RenderOptions) -> Result<RasterImage, RenderError> {
    // The symbol list already picks the smallest fitting symbol, which is
    // what the size-limit option asks for.
    let encoded = DataMatrix::encode(options.text.as_bytes(), SymbolList::default())
        .map_err(|e| RenderError::Encode(format!("datamatrix: {e:?}")))?;
    let bitmap = encoded.bitmap();

    let scale = options.scale.max(1);
    let padding = options.padding;
    let width = bitmap.width() as u32 * scale + padding * 2;
    let height = bitmap.height() as u32 * scale + padding * 2;
    let mut image = GrayImage::from_pixel(width, height, Luma([options.background]));

    for (x, y) in bitmap.pixels() {
        for dy in 0..scale {
            for dx in 0..scale {
                image.put_pixel(
                    padding + x as u32 * scale + dx,
                    padding + y as u32 * scale + dy,
                    Luma([0]),
                );
            }
        }
    }

    Ok(RasterImage::new(image))
}
