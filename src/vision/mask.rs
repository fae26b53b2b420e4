//! HSV band masking
//!
//! Converts RGB frames into a binary mask of marker-colored pixels. The
//! HSV convention is the camera-tooling one: hue 0-180, saturation and
//! value 0-255.

use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::{Deserialize, Serialize};

/// Inclusive HSV band for the tracked marker color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HueBand {
    /// Lower (h, s, v) bound
    pub lower: [u8; 3],
    /// Upper (h, s, v) bound
    pub upper: [u8; 3],
}

impl Default for HueBand {
    /// Green marker band. Note the saturation ceiling of 225: fully
    /// saturated greens fall outside it.
    fn default() -> Self {
        Self {
            lower: [40, 100, 100],
            upper: [70, 225, 255],
        }
    }
}

impl HueBand {
    /// True if the pixel falls inside the band on all three channels
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

/// Convert one RGB pixel to HSV (hue 0-180, sat/val 0-255)
pub fn rgb_to_hsv(pixel: Rgb<u8>) -> [u8; 3] {
    let [r, g, b] = pixel.0;
    let (r, g, b) = (r as f32, g as f32, b as f32);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let value = max;
    let saturation = if max > 0.0 { delta * 255.0 / max } else { 0.0 };

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    [
        (hue / 2.0).round() as u8,
        saturation.round() as u8,
        value.round() as u8,
    ]
}

/// Build a binary mask: 255 where the frame pixel sits inside the band
pub fn hue_mask(frame: &RgbImage, band: &HueBand) -> GrayImage {
    let mut mask = GrayImage::new(frame.width(), frame.height());
    for (x, y, pixel) in frame.enumerate_pixels() {
        if band.contains(rgb_to_hsv(*pixel)) {
            mask.put_pixel(x, y, Luma([255]));
        }
    }
    mask
}
