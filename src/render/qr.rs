//! Default QR collaborator backed by the qrcode crate.
//!
//! Fixed options: ~200 px output width, a two-module quiet zone, black
//! modules on white, low (L) error correction.

use async_trait::async_trait;
use image::{GrayImage, Luma};
use qrcode::{EcLevel, QrCode};

use super::{QrRenderer, RasterImage, RenderError};

/// Target output width in pixels, quiet zone included.
const TARGET_WIDTH: usize = 200;
/// Quiet zone width in modules on each side.
const QUIET_MODULES: usize = 2;

/// QR renderer producing black-on-white rasters.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrImageRenderer;

#[async_trait]
impl QrRenderer for QrImageRenderer {
    async fn render_qr(&self, data: &str) -> Result<RasterImage, RenderError> {
        let code = QrCode::with_error_correction_level(data, EcLevel::L)
            .map_err(|e| RenderError::Encode(format!("QR code generation failed: {e}")))?;

        let modules = code.width();
        let total = modules + QUIET_MODULES * 2;
        let cell = (TARGET_WIDTH / total).max(1);
        let size = (total * cell) as u32;

        let mut image = GrayImage::from_pixel(size, size, Luma([255]));

        for qy in 0..modules {
            for qx in 0..modules {
                if code[(qx, qy)] != qrcode::Color::Dark {
                    continue;
                }
                for cy in 0..cell {
                    for cx in 0..cell {
                        let px = ((QUIET_MODULES + qx) * cell + cx) as u32;
                        let py = ((QUIET_MODULES + qy) * cell + cy) as u32;
                        image.put_pixel(px, py, Luma([0]));
                    }
                }
            }
        }

        Ok(RasterImage::new(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_renders_square_image_near_target_width() {
        let image = QrImageRenderer
            .render_qr("https://example.com")
            .await
            .unwrap();
        assert_eq!(image.width(), image.height());
        assert!(image.width() <= TARGET_WIDTH as u32);
        assert!(image.width() > 0);
    }

    #[tokio::test]
    async fn test_has_dark_and_light_pixels() {
        let image = QrImageRenderer.render_qr("hello").await.unwrap();
        let gray = image.as_gray();
        assert!(gray.pixels().any(|p| p.0[0] == 0));
        assert!(gray.pixels().any(|p| p.0[0] == 255));
    }
}
