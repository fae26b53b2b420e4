//! Marker region extraction
//!
//! Denoises the mask, traces the borders of what remains, and yields one
//! bounding box per region. Box order follows the border tracer's scan and
//! carries no meaning; consumers must not read anything into it.

use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::distance_transform::Norm;
use imageproc::filter::box_filter;
use imageproc::geometry::approximate_polygon_dp;
use imageproc::morphology::erode;
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Denoise kernel radius (a 5x5 square element)
const DENOISE_RADIUS: u8 = 2;
/// Douglas-Peucker tolerance for border simplification
const POLY_EPSILON: f64 = 20.0;

/// Extract one bounding box per foreground region of the mask
///
/// Erosion wipes out speckles smaller than the kernel; the mean blur then
/// re-grows surviving regions to roughly their masked extent, and every
/// pixel left non-zero counts as foreground for the border trace.
pub fn bounding_boxes(mask: &GrayImage) -> Vec<Rect> {
    let eroded = erode(mask, Norm::LInf, DENOISE_RADIUS);
    let smoothed = box_filter(&eroded, DENOISE_RADIUS as u32, DENOISE_RADIUS as u32);

    find_contours::<i32>(&smoothed)
        .iter()
        .map(|contour| {
            let mut points = contour.points.clone();
            if points.len() > 2 {
                points = approximate_polygon_dp(&points, POLY_EPSILON, true);
            }
            bounding_rect(&points)
        })
        .collect()
}

/// Tight bounding rectangle around a non-empty point set
fn bounding_rect(points: &[Point<i32>]) -> Rect {
    let mut min = points[0];
    let mut max = points[0];
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Rect::at(min.x, min.y).of_size((max.x - min.x + 1) as u32, (max.y - min.y + 1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use imageproc::drawing::draw_filled_rect_mut;

    const ON: Luma<u8> = Luma([255]);

    fn mask_with_blocks(blocks: &[Rect]) -> GrayImage {
        let mut mask = GrayImage::new(500, 300);
        for block in blocks {
            draw_filled_rect_mut(&mut mask, *block, ON);
        }
        mask
    }

    #[test]
    fn test_single_block_yields_its_box() {
        // Erosion shaves 2 pixels per side, the blur grows them back
        let mask = mask_with_blocks(&[Rect::at(100, 50).of_size(40, 40)]);
        let boxes = bounding_boxes(&mask);

        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].left(), 100);
        assert_eq!(boxes[0].top(), 50);
        assert_eq!(boxes[0].width(), 40);
        assert_eq!(boxes[0].height(), 40);
    }

    #[test]
    fn test_speckles_are_denoised_away() {
        let mut mask = GrayImage::new(500, 300);
        mask.put_pixel(30, 30, ON);
        draw_filled_rect_mut(&mut mask, Rect::at(200, 100).of_size(3, 3), ON);

        assert!(bounding_boxes(&mask).is_empty());
    }

    #[test]
    fn test_empty_mask_yields_no_boxes() {
        let mask = GrayImage::new(500, 300);
        assert!(bounding_boxes(&mask).is_empty());
    }

    #[test]
    fn test_two_blocks_trace_top_down() {
        // The border trace scans rows from the top, so the upper region
        // comes first and the lower one is last
        let mask = mask_with_blocks(&[
            Rect::at(300, 200).of_size(40, 40),
            Rect::at(50, 20).of_size(40, 40),
        ]);
        let boxes = bounding_boxes(&mask);

        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].top(), 20);
        assert_eq!(boxes[boxes.len() - 1].top(), 200);
    }

    #[test]
    fn test_block_at_frame_edge_keeps_origin() {
        let mask = mask_with_blocks(&[Rect::at(0, 100).of_size(40, 40)]);
        let boxes = bounding_boxes(&mask);

        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].left(), 0);
    }
}
