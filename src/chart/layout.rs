//! Plot geometry
//!
//! Pure helpers the canvas renderer uses to place axes, categories and the
//! smoothed line. Kept free of any drawing API so they can be unit tested.

/// A point in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Rectangle available for plotting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Linear y axis starting at zero
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    pub step: f64,
    pub max: f64,
}

impl ValueAxis {
    /// Pick a round step so that about `target_ticks` intervals cover `max_value`
    ///
    /// Counts are integers, so the step never drops below 1. An all-zero
    /// series still gets a single `0..1` interval.
    pub fn nice(max_value: u64, target_ticks: usize) -> Self {
        if max_value == 0 {
            return Self { step: 1.0, max: 1.0 };
        }

        let raw = max_value as f64 / target_ticks.max(1) as f64;
        let magnitude = 10f64.powf(raw.log10().floor());
        let residual = raw / magnitude;
        let nice = if residual <= 1.0 {
            1.0
        } else if residual <= 2.0 {
            2.0
        } else if residual <= 5.0 {
            5.0
        } else {
            10.0
        };

        let step = (nice * magnitude).max(1.0);
        let max = (max_value as f64 / step).ceil() * step;
        Self { step, max }
    }

    /// Tick values from zero to `max`, inclusive
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }

    /// Canvas y coordinate of a value inside `area`
    pub fn to_pixel(&self, value: f64, area: &PlotArea) -> f64 {
        area.bottom() - (value / self.max) * area.height
    }
}

/// Horizontal centers of `count` categories across `area`
///
/// With `offset` each category gets an equal slot and sits in its middle,
/// leaving half a slot at either edge. Without it the first and last
/// categories touch the edges. A lone category is always centered.
pub fn category_positions(count: usize, area: &PlotArea, offset: bool) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![area.left + area.width / 2.0],
        n if offset => {
            let slot = area.width / n as f64;
            (0..n).map(|i| area.left + slot * (i as f64 + 0.5)).collect()
        }
        n => {
            let gap = area.width / (n - 1) as f64;
            (0..n).map(|i| area.left + gap * i as f64).collect()
        }
    }
}

/// Bezier control points for a smoothed polyline
///
/// Returns, for each point, the control point on its incoming side and the
/// one on its outgoing side. `tension` of 0 yields straight segments.
pub fn spline_controls(points: &[Point], tension: f64) -> Vec<(Point, Point)> {
    (0..points.len())
        .map(|i| {
            let current = points[i];
            let previous = if i == 0 { current } else { points[i - 1] };
            let next = points.get(i + 1).copied().unwrap_or(current);

            let d01 = previous.distance(&current);
            let d12 = current.distance(&next);
            let total = d01 + d12;
            let (s01, s12) = if total > 0.0 {
                (d01 / total, d12 / total)
            } else {
                (0.0, 0.0)
            };

            let fa = tension * s01;
            let fb = tension * s12;
            let dx = next.x - previous.x;
            let dy = next.y - previous.y;

            (
                Point::new(current.x - fa * dx, current.y - fa * dy),
                Point::new(current.x + fb * dx, current.y + fb * dy),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlotArea {
        PlotArea {
            left: 20.0,
            top: 10.0,
            width: 400.0,
            height: 200.0,
        }
    }

    #[test]
    fn test_nice_axis() {
        let axis = ValueAxis::nice(12, 5);
        assert_eq!(axis.step, 5.0);
        assert_eq!(axis.max, 15.0);
        assert_eq!(axis.ticks(), vec![0.0, 5.0, 10.0, 15.0]);

        let axis = ValueAxis::nice(987, 5);
        assert_eq!(axis.step, 200.0);
        assert_eq!(axis.max, 1000.0);
    }

    #[test]
    fn test_small_and_zero_axis() {
        let axis = ValueAxis::nice(3, 5);
        assert_eq!(axis.step, 1.0);
        assert_eq!(axis.max, 3.0);

        let axis = ValueAxis::nice(0, 5);
        assert_eq!(axis.ticks(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_value_to_pixel() {
        let axis = ValueAxis { step: 5.0, max: 20.0 };
        let area = area();

        assert_eq!(axis.to_pixel(0.0, &area), area.bottom());
        assert_eq!(axis.to_pixel(20.0, &area), area.top);
        assert_eq!(axis.to_pixel(10.0, &area), 110.0);
    }

    #[test]
    fn test_category_positions_offset() {
        let xs = category_positions(4, &area(), true);
        assert_eq!(xs, vec![70.0, 170.0, 270.0, 370.0]);
    }

    #[test]
    fn test_category_positions_edges() {
        let xs = category_positions(3, &area(), false);
        assert_eq!(xs, vec![20.0, 220.0, 420.0]);
        assert_eq!(category_positions(1, &area(), false), vec![220.0]);
        assert!(category_positions(0, &area(), true).is_empty());
    }

    #[test]
    fn test_spline_without_tension_is_straight() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 5.0), Point::new(20.0, 0.0)];
        let controls = spline_controls(&points, 0.0);

        for (point, (incoming, outgoing)) in points.iter().zip(&controls) {
            assert_eq!(incoming, point);
            assert_eq!(outgoing, point);
        }
    }

    #[test]
    fn test_spline_controls_follow_neighbours() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(20.0, 0.0)];
        let controls = spline_controls(&points, 0.2);

        // Middle point: controls sit on the line, either side of the point
        let (incoming, outgoing) = controls[1];
        assert_eq!(incoming, Point::new(8.0, 0.0));
        assert_eq!(outgoing, Point::new(12.0, 0.0));

        // End points have no neighbour on one side
        assert_eq!(controls[0].0, points[0]);
        assert_eq!(controls[2].1, points[2]);
    }
}
