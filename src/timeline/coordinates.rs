//! Year <-> percentage <-> pixel conversions for the horizontal timeline axis.
//!
//! Percentages are relative to the visible track: the earliest year sits at
//! `0 + offset` and the latest at `100 + offset`, where `offset` is the pan
//! value in percentage points.

use super::Position;

/// Where every node lands when all of them share a single year.
pub const COLLAPSED_RANGE_PERCENTAGE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// `None` when there are no years to span.
    pub fn from_years<I>(years: I) -> Option<Self>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut iter = years.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |range, year| Self {
            min: range.min.min(year),
            max: range.max.max(year),
        }))
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Widened so `i32::MIN..=i32::MAX` does not overflow.
    pub fn span(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min)
    }

    pub fn percentage(&self, year: i32, offset: f64) -> f64 {
        let span = self.span();
        if span == 0 {
            return COLLAPSED_RANGE_PERCENTAGE + offset;
        }
        (f64::from(year) - f64::from(self.min)) / span as f64 * 100.0 + offset
    }

    /// Inverse of [`percentage`](Self::percentage). Fractional years are kept.
    pub fn year_at(&self, percentage: f64, offset: f64) -> f64 {
        let span = self.span();
        if span == 0 {
            return f64::from(self.min);
        }
        f64::from(self.min) + (percentage - offset) / 100.0 * span as f64
    }

    pub fn year_at_pixel(&self, pixel: f64, width: f64, offset: f64) -> f64 {
        self.year_at(pixel_to_percentage(pixel, width), offset)
    }
}

pub fn percentage_to_pixel(percentage: f64, width: f64) -> f64 {
    percentage / 100.0 * width
}

pub fn pixel_to_percentage(pixel: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    pixel / width * 100.0
}

/// New pan offset after dragging the track by `delta_px`.
pub fn pan_offset(current: f64, delta_px: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return current;
    }
    current + pixel_to_percentage(delta_px, width)
}

/// A node drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pointer_origin: Position,
    node_origin: Position,
}

impl DragGesture {
    pub fn begin(pointer: Position, node: Position) -> Self {
        Self {
            pointer_origin: pointer,
            node_origin: node,
        }
    }

    pub fn position_at(&self, pointer: Position) -> Position {
        Position {
            x: self.node_origin.x + (pointer.x - self.pointer_origin.x),
            y: self.node_origin.y + (pointer.y - self.pointer_origin.y),
        }
    }

    /// Ends the gesture, returning the position to persist.
    pub fn finish(self, pointer: Position) -> Position {
        self.position_at(pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_endpoints_map_to_zero_and_hundred() {
        let range = YearRange::new(1874, 1916);
        assert!(approx(range.percentage(1874, 0.0), 0.0));
        assert!(approx(range.percentage(1916, 0.0), 100.0));
    }

    #[test]
    fn test_offset_shifts_every_node() {
        let range = YearRange::new(1900, 2000);
        assert!(approx(range.percentage(1900, 12.5), 12.5));
        assert!(approx(range.percentage(1950, -10.0), 40.0));
        assert!(approx(range.percentage(2000, 12.5), 112.5));
    }

    #[test]
    fn test_collapsed_range_does_not_divide_by_zero() {
        let range = YearRange::from_years([1916, 1916, 1916]).unwrap();
        assert_eq!(range.span(), 0);
        let pct = range.percentage(1916, 5.0);
        assert!(pct.is_finite());
        assert!(approx(pct, COLLAPSED_RANGE_PERCENTAGE + 5.0));
        assert!(approx(range.year_at(80.0, 0.0), 1916.0));
    }

    #[test]
    fn test_extreme_years_do_not_overflow() {
        let range = YearRange::new(i32::MIN, i32::MAX);
        assert_eq!(range.span(), i64::from(u32::MAX));
        assert!(approx(range.percentage(i32::MIN, 0.0), 0.0));
        assert!(approx(range.percentage(i32::MAX, 0.0), 100.0));

        let middle = range.percentage(0, 0.0);
        assert!(middle > 49.99 && middle < 50.01);
        assert!(approx(range.year_at(100.0, 0.0), f64::from(i32::MAX)));
    }

    #[test]
    fn test_from_years() {
        assert_eq!(YearRange::from_years(Vec::<i32>::new()), None);
        let range = YearRange::from_years([1920, 1863, 1905]).unwrap();
        assert_eq!((range.min(), range.max()), (1863, 1920));
        assert_eq!(YearRange::new(2000, 1900), YearRange::new(1900, 2000));
    }

    #[test]
    fn test_year_at_inverts_percentage() {
        let range = YearRange::new(1850, 1950);
        for year in [1850, 1874, 1916, 1950] {
            let pct = range.percentage(year, 7.0);
            assert!(approx(range.year_at(pct, 7.0), f64::from(year)));
        }
    }

    #[test]
    fn test_pixel_conversions() {
        assert!(approx(percentage_to_pixel(25.0, 800.0), 200.0));
        assert!(approx(pixel_to_percentage(200.0, 800.0), 25.0));
        assert!(approx(pixel_to_percentage(200.0, 0.0), 0.0));

        let range = YearRange::new(1900, 2000);
        assert!(approx(range.year_at_pixel(400.0, 800.0, 0.0), 1950.0));
    }

    #[test]
    fn test_pan_offset() {
        assert!(approx(pan_offset(0.0, 100.0, 1000.0), 10.0));
        assert!(approx(pan_offset(10.0, -250.0, 1000.0), -15.0));
        assert!(approx(pan_offset(3.0, 100.0, 0.0), 3.0));
    }

    #[test]
    fn test_drag_gesture_applies_pointer_delta() {
        let drag = DragGesture::begin(Position::new(100.0, 100.0), Position::new(10.0, 20.0));
        assert_eq!(drag.position_at(Position::new(130.0, 90.0)), Position::new(40.0, 10.0));
        assert_eq!(drag.finish(Position::new(100.0, 100.0)), Position::new(10.0, 20.0));
    }
}
