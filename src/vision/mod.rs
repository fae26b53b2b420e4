//! Marker tracking pipeline
//!
//! Turns camera frames into steering signals:
//! - HSV band mask over the raw frame
//! - Denoise, then trace contours into bounding boxes
//! - Map the winning box position to a `MoveSignal`
//!
//! Frames come in through the `FrameSource` trait; everything past that
//! point is pure image work and stays testable without a device.

pub mod contours;
pub mod mask;
pub mod source;
pub mod steer;

pub use contours::bounding_boxes;
pub use mask::{HueBand, hue_mask, rgb_to_hsv};
pub use source::{FrameSource, MARKER_COLOR, ScriptedSource, SourceError, SyntheticSource};
pub use steer::{Steering, SteeringResolver, signal_for_x};
