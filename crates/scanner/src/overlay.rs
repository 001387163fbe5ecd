//! Map decoder bounding boxes from video pixel space into display space.
//!
//! The video element scales its source to fill the display surface while
//! preserving aspect ratio, so overlay boxes must be scaled by the drawn
//! size and shifted by the letterbox/pillarbox offset before they line up
//! with what the user sees.

use crate::decoder::RectF;

/// Width and height of a pixel surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Video source dimensions paired with the display surface drawing them.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub video: Dimensions,
    pub display: Dimensions,
}

impl Viewport {
    pub fn new(video: Dimensions, display: Dimensions) -> Self {
        Self { video, display }
    }

    /// Map a rect from video pixel space into display pixel space.
    pub fn map_rect(&self, rect: RectF) -> RectF {
        let video_ratio = self.video.aspect_ratio();
        let display_ratio = self.display.aspect_ratio();

        // Drawn size of the video inside the display surface, and the
        // centering offset along the axis that does not fill it.
        let (drawn_w, drawn_h, offset_x, offset_y) = if video_ratio > display_ratio {
            let drawn_h = self.display.height;
            let drawn_w = drawn_h * video_ratio;
            (drawn_w, drawn_h, (self.display.width - drawn_w) / 2.0, 0.0)
        } else {
            let drawn_w = self.display.width;
            let drawn_h = drawn_w / video_ratio;
            (drawn_w, drawn_h, 0.0, (self.display.height - drawn_h) / 2.0)
        };

        let scale_x = drawn_w / self.video.width;
        let scale_y = drawn_h / self.video.height;

        RectF {
            x: offset_x + rect.x * scale_x,
            y: offset_y + rect.y * scale_y,
            width: rect.width * scale_x,
            height: rect.height * scale_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rect_eq(actual: RectF, expected: RectF) {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(
            close(actual.x, expected.x)
                && close(actual.y, expected.y)
                && close(actual.width, expected.width)
                && close(actual.height, expected.height),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn equal_aspect_ratios_scale_without_offset() {
        let viewport = Viewport::new(Dimensions::new(100.0, 50.0), Dimensions::new(200.0, 100.0));

        let mapped = viewport.map_rect(RectF {
            x: 10.0,
            y: 5.0,
            width: 30.0,
            height: 20.0,
        });

        assert_rect_eq(
            mapped,
            RectF {
                x: 20.0,
                y: 10.0,
                width: 60.0,
                height: 40.0,
            },
        );
    }

    #[test]
    fn wider_video_is_centered_horizontally() {
        // Video twice as wide as the display: drawn at 200x100 inside a
        // 100x100 surface, shifted left by 50.
        let viewport = Viewport::new(Dimensions::new(200.0, 100.0), Dimensions::new(100.0, 100.0));

        let mapped = viewport.map_rect(RectF {
            x: 50.0,
            y: 25.0,
            width: 20.0,
            height: 10.0,
        });

        assert_rect_eq(
            mapped,
            RectF {
                x: 0.0,
                y: 25.0,
                width: 20.0,
                height: 10.0,
            },
        );
    }

    #[test]
    fn taller_video_is_centered_vertically() {
        let viewport = Viewport::new(Dimensions::new(100.0, 200.0), Dimensions::new(100.0, 100.0));

        let mapped = viewport.map_rect(RectF {
            x: 0.0,
            y: 100.0,
            width: 50.0,
            height: 50.0,
        });

        // Drawn at 100x200, shifted up by 50.
        assert_rect_eq(
            mapped,
            RectF {
                x: 0.0,
                y: 50.0,
                width: 50.0,
                height: 50.0,
            },
        );
    }

    #[test]
    fn hd_video_on_smaller_display_keeps_box_proportions() {
        let viewport = Viewport::new(Dimensions::new(1280.0, 720.0), Dimensions::new(640.0, 360.0));

        let mapped = viewport.map_rect(RectF {
            x: 640.0,
            y: 360.0,
            width: 128.0,
            height: 72.0,
        });

        assert_rect_eq(
            mapped,
            RectF {
                x: 320.0,
                y: 180.0,
                width: 64.0,
                height: 36.0,
            },
        );
    }
}
