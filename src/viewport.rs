//! Bounded pan/zoom state for the classic table view.
//!
//! A pure reducer: every gesture event recomputes the per-axis offset bounds
//! from the current scale, the table's natural size, the viewport size, and
//! the fixed asymmetric margins, then clamps. The offset is expressed
//! relative to the centered position of the scaled table; the scroll-position
//! helpers translate between that coordinate and the non-negative scroll
//! offsets the scrollable widget works in.

use cosmic::iced::{Size, Vector};

use crate::constants::{
    CELL_SIZE, MARGIN_BOTTOM, MARGIN_END, MARGIN_START, MARGIN_TOP, MAX_SCALE, MIN_SCALE,
    TABLE_COLS, TABLE_ROWS,
};

/// One incremental gesture event: a relative zoom multiplier and a pan delta
/// in logical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub zoom: f32,
    pub pan: Vector,
}

impl Gesture {
    pub fn zoom(zoom: f32) -> Self {
        Self {
            zoom,
            pan: Vector::new(0.0, 0.0),
        }
    }

    pub fn pan(x: f32, y: f32) -> Self {
        Self {
            zoom: 1.0,
            pan: Vector::new(x, y),
        }
    }
}

/// Natural (unscaled) size of the classic table
pub fn table_size() -> Size {
    Size::new(
        CELL_SIZE * f32::from(TABLE_COLS),
        CELL_SIZE * f32::from(TABLE_ROWS),
    )
}

/// Offset bounds for one axis. `overhang` is how far the scaled content
/// extends past the padded viewport; `shift` re-centers within the
/// asymmetric margins.
fn axis_bounds(scaled: f32, viewport: f32, start: f32, end: f32) -> (f32, f32) {
    let overhang = (scaled - (viewport - start - end)).max(0.0);
    let shift = (start - end) / 2.0;
    (-overhang / 2.0 + shift, overhang / 2.0 + shift)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    pub scale: f32,
    pub offset: Vector,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vector::new(0.0, 0.0),
        }
    }
}

impl ViewportTransform {
    /// Initial transform: fit the table width to the viewport, offset zero
    pub fn fit_width(viewport: Size) -> Self {
        let scale = (viewport.width / table_size().width).clamp(MIN_SCALE, MAX_SCALE);
        let mut transform = Self {
            scale,
            offset: Vector::new(0.0, 0.0),
        };
        // Snap the zero offset into the bounds for this scale
        transform.apply(Gesture::zoom(1.0), viewport);
        transform
    }

    /// Apply one gesture event. Scale clamps to its fixed range; the offset
    /// clamps to bounds recomputed for the new scale.
    pub fn apply(&mut self, gesture: Gesture, viewport: Size) {
        let scale = (self.scale * gesture.zoom).clamp(MIN_SCALE, MAX_SCALE);
        let table = table_size();
        let (min_x, max_x) = axis_bounds(
            table.width * scale,
            viewport.width,
            MARGIN_START,
            MARGIN_END,
        );
        let (min_y, max_y) = axis_bounds(
            table.height * scale,
            viewport.height,
            MARGIN_TOP,
            MARGIN_BOTTOM,
        );
        self.scale = scale;
        self.offset = Vector::new(
            (self.offset.x + gesture.pan.x).clamp(min_x, max_x),
            (self.offset.y + gesture.pan.y).clamp(min_y, max_y),
        );
    }

    /// The scroll position equivalent to this transform. Scroll coordinates
    /// run from 0 (content start) to the overhang (content end); the centered
    /// offset runs the other way.
    pub fn scroll_position(&self, viewport: Size) -> Vector {
        let table = table_size();
        let (min_x, max_x) = axis_bounds(
            table.width * self.scale,
            viewport.width,
            MARGIN_START,
            MARGIN_END,
        );
        let (min_y, max_y) = axis_bounds(
            table.height * self.scale,
            viewport.height,
            MARGIN_TOP,
            MARGIN_BOTTOM,
        );
        Vector::new(
            (max_x - self.offset.x).clamp(0.0, max_x - min_x),
            (max_y - self.offset.y).clamp(0.0, max_y - min_y),
        )
    }

    /// Adopt a scroll position reported by the scrollable widget, keeping the
    /// offset within bounds.
    pub fn set_scroll_position(&mut self, scroll: Vector, viewport: Size) {
        let table = table_size();
        let (min_x, max_x) = axis_bounds(
            table.width * self.scale,
            viewport.width,
            MARGIN_START,
            MARGIN_END,
        );
        let (min_y, max_y) = axis_bounds(
            table.height * self.scale,
            viewport.height,
            MARGIN_TOP,
            MARGIN_BOTTOM,
        );
        self.offset = Vector::new(
            (max_x - scroll.x).clamp(min_x, max_x),
            (max_y - scroll.y).clamp(min_y, max_y),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size {
        width: 1280.0,
        height: 720.0,
    };

    fn assert_in_bounds(transform: &ViewportTransform, viewport: Size) {
        let table = table_size();
        let (min_x, max_x) = axis_bounds(
            table.width * transform.scale,
            viewport.width,
            MARGIN_START,
            MARGIN_END,
        );
        let (min_y, max_y) = axis_bounds(
            table.height * transform.scale,
            viewport.height,
            MARGIN_TOP,
            MARGIN_BOTTOM,
        );
        assert!(transform.scale >= MIN_SCALE && transform.scale <= MAX_SCALE);
        assert!(transform.offset.x >= min_x - 1e-3 && transform.offset.x <= max_x + 1e-3);
        assert!(transform.offset.y >= min_y - 1e-3 && transform.offset.y <= max_y + 1e-3);
    }

    #[test]
    fn zoom_clamps_to_scale_range() {
        let mut transform = ViewportTransform::default();
        transform.apply(Gesture::zoom(10.0), VIEWPORT);
        assert_eq!(transform.scale, MAX_SCALE);
        transform.apply(Gesture::zoom(0.001), VIEWPORT);
        assert_eq!(transform.scale, MIN_SCALE);
    }

    #[test]
    fn pan_clamps_to_recomputed_bounds() {
        let mut transform = ViewportTransform::default();
        transform.apply(Gesture::zoom(3.0), VIEWPORT);
        transform.apply(Gesture::pan(1e6, 1e6), VIEWPORT);
        assert_in_bounds(&transform, VIEWPORT);
        transform.apply(Gesture::pan(-1e7, -1e7), VIEWPORT);
        assert_in_bounds(&transform, VIEWPORT);
    }

    #[test]
    fn any_gesture_sequence_stays_bounded() {
        let gestures = [
            Gesture::zoom(2.0),
            Gesture::pan(400.0, -300.0),
            Gesture::zoom(0.25),
            Gesture::pan(-5000.0, 5000.0),
            Gesture::zoom(8.0),
            Gesture {
                zoom: 0.5,
                pan: Vector::new(123.0, -77.0),
            },
            Gesture::zoom(0.01),
            Gesture::pan(9999.0, 9999.0),
        ];
        let mut transform = ViewportTransform::default();
        for gesture in gestures {
            transform.apply(gesture, VIEWPORT);
            assert_in_bounds(&transform, VIEWPORT);
        }
    }

    #[test]
    fn small_content_pins_to_margin_shift() {
        // Content smaller than the padded viewport on both axes: overhang is
        // zero, so the only legal offset is the margin shift.
        let mut transform = ViewportTransform {
            scale: MIN_SCALE,
            offset: Vector::new(500.0, -500.0),
        };
        let viewport = Size::new(2000.0, 1500.0);
        transform.apply(Gesture::pan(50.0, 50.0), viewport);
        assert_eq!(transform.offset.x, (MARGIN_START - MARGIN_END) / 2.0);
        assert_eq!(transform.offset.y, (MARGIN_TOP - MARGIN_BOTTOM) / 2.0);
    }

    #[test]
    fn fit_width_scale() {
        let transform = ViewportTransform::fit_width(VIEWPORT);
        let expected = (VIEWPORT.width / table_size().width).clamp(MIN_SCALE, MAX_SCALE);
        assert_eq!(transform.scale, expected);
        assert_in_bounds(&transform, VIEWPORT);

        // A very narrow viewport still respects the minimum scale
        let narrow = ViewportTransform::fit_width(Size::new(100.0, 720.0));
        assert_eq!(narrow.scale, MIN_SCALE);
    }

    #[test]
    fn scroll_position_round_trips() {
        let mut transform = ViewportTransform::default();
        transform.apply(Gesture::zoom(2.5), VIEWPORT);
        transform.apply(Gesture::pan(-321.0, 123.0), VIEWPORT);

        let scroll = transform.scroll_position(VIEWPORT);
        assert!(scroll.x >= 0.0 && scroll.y >= 0.0);

        let mut restored = ViewportTransform {
            scale: transform.scale,
            offset: Vector::new(0.0, 0.0),
        };
        restored.set_scroll_position(scroll, VIEWPORT);
        assert!((restored.offset.x - transform.offset.x).abs() < 1e-3);
        assert!((restored.offset.y - transform.offset.y).abs() < 1e-3);
    }

    #[test]
    fn scroll_extremes_map_to_offset_bounds() {
        let mut transform = ViewportTransform::default();
        transform.apply(Gesture::zoom(4.0), VIEWPORT);

        let table = table_size();
        let (min_x, max_x) = axis_bounds(
            table.width * transform.scale,
            VIEWPORT.width,
            MARGIN_START,
            MARGIN_END,
        );

        transform.set_scroll_position(Vector::new(0.0, 0.0), VIEWPORT);
        assert!((transform.offset.x - max_x).abs() < 1e-3);

        transform.set_scroll_position(Vector::new(max_x - min_x, 0.0), VIEWPORT);
        assert!((transform.offset.x - min_x).abs() < 1e-3);
    }
}
