//! Frame acquisition seam
//!
//! The pipeline pulls frames through the `FrameSource` trait so the capture
//! device stays swappable. The crate ships two implementations: a synthetic
//! sweep the demo binary runs on, and a scripted replay source for tests.

use std::collections::VecDeque;

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use thiserror::Error;

/// Frame acquisition failure
#[derive(Debug, Error)]
pub enum SourceError {
    /// The device went away mid-session
    #[error("frame source disconnected")]
    Disconnected,
    /// The device produced an unreadable frame
    #[error("capture failed: {0}")]
    Capture(String),
}

/// A source of RGB frames, polled once per simulation tick
pub trait FrameSource {
    /// Frame dimensions (width, height)
    fn dimensions(&self) -> (u32, u32);

    /// Fetch the next frame
    ///
    /// `Ok(None)` means no frame was ready this tick; callers treat that as
    /// an empty frame, not an error.
    fn capture(&mut self) -> Result<Option<RgbImage>, SourceError>;
}

/// Marker color used by the synthetic frames, inside the default HSV band
pub const MARKER_COLOR: Rgb<u8> = Rgb([64, 200, 64]);

/// Synthetic marker edge length; large enough to survive denoising
const MARKER_SIZE: u32 = 60;

const BACKDROP: Rgb<u8> = Rgb([24, 24, 26]);

/// Stand-in for a camera: a marker block sweeping back and forth across a
/// dark backdrop
pub struct SyntheticSource {
    width: u32,
    height: u32,
    x: i32,
    dx: i32,
}

impl SyntheticSource {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            x: 0,
            dx: 4,
        }
    }

    /// Current marker x (the position the next frame will show)
    pub fn marker_x(&self) -> i32 {
        self.x
    }
}

impl FrameSource for SyntheticSource {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn capture(&mut self) -> Result<Option<RgbImage>, SourceError> {
        let mut frame = RgbImage::from_pixel(self.width, self.height, BACKDROP);
        let y = (self.height.saturating_sub(MARKER_SIZE) / 2) as i32;
        draw_filled_rect_mut(
            &mut frame,
            Rect::at(self.x, y).of_size(MARKER_SIZE, MARKER_SIZE),
            MARKER_COLOR,
        );

        // Advance and bounce off the frame edges
        self.x += self.dx;
        let max_x = self.width as i32 - MARKER_SIZE as i32;
        if self.x <= 0 || self.x >= max_x {
            self.x = self.x.clamp(0, max_x);
            self.dx = -self.dx;
        }

        Ok(Some(frame))
    }
}

/// Replays a fixed frame sequence, then runs dry
///
/// `None` entries model ticks where the device had nothing ready.
pub struct ScriptedSource {
    width: u32,
    height: u32,
    frames: VecDeque<Option<RgbImage>>,
}

impl ScriptedSource {
    pub fn new(width: u32, height: u32, frames: Vec<Option<RgbImage>>) -> Self {
        Self {
            width,
            height,
            frames: frames.into(),
        }
    }
}

impl FrameSource for ScriptedSource {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn capture(&mut self) -> Result<Option<RgbImage>, SourceError> {
        Ok(self.frames.pop_front().unwrap_or(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_frames_show_the_marker() {
        let mut source = SyntheticSource::new(500, 300);
        let (w, h) = source.dimensions();
        assert_eq!((w, h), (500, 300));

        let frame = source.capture().unwrap().unwrap();
        let y = (300 - MARKER_SIZE) / 2;
        assert_eq!(*frame.get_pixel(5, y + 5), MARKER_COLOR);
        assert_eq!(*frame.get_pixel(480, 5), BACKDROP);
    }

    #[test]
    fn test_synthetic_marker_stays_in_frame_and_bounces() {
        let mut source = SyntheticSource::new(200, 100);
        let max_x = 200 - MARKER_SIZE as i32;

        let mut saw_left_edge = false;
        let mut saw_right_edge = false;
        for _ in 0..500 {
            source.capture().unwrap();
            assert!(source.marker_x() >= 0);
            assert!(source.marker_x() <= max_x);
            saw_left_edge |= source.marker_x() == 0;
            saw_right_edge |= source.marker_x() == max_x;
        }
        assert!(saw_left_edge);
        assert!(saw_right_edge);
    }

    #[test]
    fn test_scripted_source_replays_then_runs_dry() {
        let frame = RgbImage::new(4, 4);
        let mut source = ScriptedSource::new(4, 4, vec![Some(frame), None]);

        assert!(source.capture().unwrap().is_some());
        assert!(source.capture().unwrap().is_none());
        assert!(source.capture().unwrap().is_none());
    }
}
