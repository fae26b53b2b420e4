//! Steering resolution
//!
//! One frame in, one `MoveSignal` out: mask the frame, box the marker
//! regions, take the last box, and map its x against the fixed thresholds.

use image::RgbImage;
use imageproc::rect::Rect;

use super::contours::bounding_boxes;
use super::mask::{HueBand, hue_mask};
use super::source::{FrameSource, SourceError};
use crate::consts::{STEER_LEFT_MIN_X, STEER_RIGHT_MAX_X};
use crate::sim::MoveSignal;

/// Steering decision for one tick, with the box that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub signal: MoveSignal,
    /// The marker box the signal came from, if any
    pub marker: Option<Rect>,
}

impl Steering {
    fn neutral() -> Self {
        Self {
            signal: MoveSignal::Neutral,
            marker: None,
        }
    }
}

/// Map a marker x to a steering signal
///
/// The window between the thresholds reads as Neutral, and so does x == 0,
/// the placeholder for "no marker seen".
pub fn signal_for_x(x: i32) -> MoveSignal {
    if x > STEER_LEFT_MIN_X {
        MoveSignal::Left
    } else if x > 0 && x < STEER_RIGHT_MAX_X {
        MoveSignal::Right
    } else {
        MoveSignal::Neutral
    }
}

/// Resolves camera frames into per-tick steering signals
pub struct SteeringResolver {
    band: HueBand,
}

impl SteeringResolver {
    pub fn new(band: HueBand) -> Self {
        Self { band }
    }

    /// Pull one frame from the source and resolve it
    ///
    /// A missing or empty frame resolves to Neutral. Device errors
    /// propagate to the caller.
    pub fn resolve(&self, source: &mut dyn FrameSource) -> Result<Steering, SourceError> {
        let Some(frame) = source.capture()? else {
            return Ok(Steering::neutral());
        };
        Ok(self.resolve_frame(&frame))
    }

    /// Resolve an already captured frame
    pub fn resolve_frame(&self, frame: &RgbImage) -> Steering {
        let mask = hue_mask(frame, &self.band);
        let boxes = bounding_boxes(&mask);

        // The last box in extraction order wins; earlier ones are ignored
        let marker = boxes.last().copied();
        let x = marker.map_or(0, |rect| rect.left());
        let signal = signal_for_x(x);
        log::debug!("marker x {} -> {:?}", x, signal);

        Steering { signal, marker }
    }
}
