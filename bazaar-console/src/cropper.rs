//! Banner image cropper
//!
//! Crops an uploaded image to the aspect ratio of its target banner
//! position, scales it to the position's exact pixel dimensions and
//! re-encodes it. PNG output keeps the alpha channel; JPEG output is
//! RGB.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use thiserror::Error;

use shared::models::BannerPosition;

/// JPEG quality for banner images
const JPEG_QUALITY: u8 = 85;

#[derive(Debug, Error)]
pub enum CropError {
    #[error("Invalid image: {0}")]
    Decode(image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(image::ImageError),

    /// The source image or the target aspect leaves no pixels to crop
    #[error("Empty crop region")]
    EmptyRegion,
}

/// Encoding of the cropped result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    pub fn mime(&self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

/// A crop rectangle in source-image pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Largest centered region of `img_w` x `img_h` locked to
    /// `aspect` (width over height).
    pub fn centered(img_w: u32, img_h: u32, aspect: f64) -> Result<Self, CropError> {
        if img_w == 0 || img_h == 0 || !aspect.is_finite() || aspect <= 0.0 {
            return Err(CropError::EmptyRegion);
        }

        let mut width = img_w as f64;
        let mut height = width / aspect;
        if height > img_h as f64 {
            height = img_h as f64;
            width = height * aspect;
        }

        let width = (width.round() as u32).clamp(1, img_w);
        let height = (height.round() as u32).clamp(1, img_h);
        Ok(Self {
            x: (img_w - width) / 2,
            y: (img_h - height) / 2,
            width,
            height,
        })
    }
}

/// Crop `bytes` to `position`'s aspect ratio, scale to its pixel
/// dimensions and encode as `format`.
pub fn crop_to_position(
    bytes: &[u8],
    position: &BannerPosition,
    format: OutputFormat,
) -> Result<Vec<u8>, CropError> {
    let img = image::load_from_memory(bytes).map_err(CropError::Decode)?;
    let region = CropRegion::centered(img.width(), img.height(), position.aspect_ratio())?;

    let cropped = img.crop_imm(region.x, region.y, region.width, region.height);
    let scaled = cropped.resize_exact(position.width, position.height, FilterType::Lanczos3);

    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);
    match format {
        OutputFormat::Png => {
            // RGBA keeps transparency through the crop
            let rgba = scaled.to_rgba8();
            rgba.write_with_encoder(PngEncoder::new(&mut cursor))
                .map_err(CropError::Encode)?;
        }
        OutputFormat::Jpeg => {
            let rgb = scaled.to_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY))
                .map_err(CropError::Encode)?;
        }
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, DynamicImage, ImageFormat, Rgba, RgbaImage};

    fn position(width: u32, height: u32) -> BannerPosition {
        BannerPosition {
            id: 1,
            name: "Home Hero".into(),
            width,
            height,
            is_active: true,
            banner_count: 0,
        }
    }

    /// A uniform half-transparent red PNG
    fn translucent_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 20, 20, 128]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_centered_region_wide_lock() {
        let region = CropRegion::centered(200, 200, 2.0).unwrap();
        assert_eq!(
            region,
            CropRegion {
                x: 0,
                y: 50,
                width: 200,
                height: 100
            }
        );
    }

    #[test]
    fn test_centered_region_tall_source() {
        let region = CropRegion::centered(100, 300, 1.0).unwrap();
        assert_eq!(
            region,
            CropRegion {
                x: 0,
                y: 100,
                width: 100,
                height: 100
            }
        );
    }

    #[test]
    fn test_centered_region_rejects_degenerate_input() {
        assert!(CropRegion::centered(0, 100, 1.0).is_err());
        assert!(CropRegion::centered(100, 100, 0.0).is_err());
        assert!(CropRegion::centered(100, 100, f64::NAN).is_err());
    }

    #[test]
    fn test_png_crop_preserves_alpha() {
        let source = translucent_png(128, 128);
        let cropped = crop_to_position(&source, &position(64, 32), OutputFormat::Png).unwrap();

        let decoded = image::load_from_memory(&cropped).unwrap();
        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 32);
        assert_eq!(decoded.color(), ColorType::Rgba8);
        let pixel = decoded.to_rgba8().get_pixel(10, 10).0;
        assert!(pixel[3] < 255, "alpha channel was flattened: {:?}", pixel);
    }

    #[test]
    fn test_jpeg_crop_has_no_alpha() {
        let source = translucent_png(128, 128);
        let cropped = crop_to_position(&source, &position(64, 32), OutputFormat::Jpeg).unwrap();

        let decoded = image::load_from_memory(&cropped).unwrap();
        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 32);
        assert_eq!(decoded.color(), ColorType::Rgb8);
    }

    #[test]
    fn test_corrupt_input_is_a_decode_error() {
        let err = crop_to_position(b"not an image", &position(64, 32), OutputFormat::Png)
            .unwrap_err();
        assert!(matches!(err, CropError::Decode(_)));
    }

    #[test]
    fn test_output_format_metadata() {
        assert_eq!(OutputFormat::Png.mime(), "image/png");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
    }
}
