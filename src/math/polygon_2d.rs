use std::f64::consts::TAU;

use super::{Point, Rotation2, Vector2};

/// Computes the vertices of a regular polygon.
///
/// Produces exactly `count` points spaced `2π / count` radians apart,
/// starting at `angle`, each at distance `radius` from `center`.
/// Coordinates are truncated toward zero. A negative `radius` yields the
/// point-reflected polygon.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn regular_polygon(center: Point, radius: i32, angle: f64, count: usize) -> Vec<Point> {
    let cx = f64::from(center.x);
    let cy = f64::from(center.y);
    let r = f64::from(radius);
    let n = count as f64;

    (0..count)
        .map(|i| {
            let theta = angle + TAU * i as f64 / n;
            Point::new(
                (cx + r * theta.cos()) as i32,
                (cy + r * theta.sin()) as i32,
            )
        })
        .collect()
}

/// Rotates `point` about `pivot` by `angle` radians.
///
/// `x' = (x - px)·cosθ - (y - py)·sinθ + px`,
/// `y' = (x - px)·sinθ + (y - py)·cosθ + py`, truncated toward zero.
/// A positive angle is counter-clockwise under the canvas sign convention.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn rotate_around(point: Point, pivot: Point, angle: f64) -> Point {
    let offset = Vector2::new(
        f64::from(point.x - pivot.x),
        f64::from(point.y - pivot.y),
    );
    let rotated = Rotation2::new(angle) * offset;
    Point::new(
        (rotated.x + f64::from(pivot.x)) as i32,
        (rotated.y + f64::from(pivot.y)) as i32,
    )
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn square_at_origin() {
        let pts = regular_polygon(p(0, 0), 10, 0.0, 4);
        assert_eq!(pts, vec![p(10, 0), p(0, 10), p(-10, 0), p(0, -10)]);
    }

    #[test]
    fn coordinates_truncate_toward_zero() {
        // sin(4π/3)·10 ≈ -8.66 must become -8, not -9.
        let pts = regular_polygon(p(0, 0), 10, 0.0, 3);
        assert_eq!(pts[0], p(10, 0));
        assert_eq!(pts[2], p(-5, -8));
    }

    #[test]
    fn vertex_count_matches_request() {
        for n in 3..=10 {
            assert_eq!(regular_polygon(p(5, 5), 20, 0.3, n).len(), n);
        }
        assert!(regular_polygon(p(5, 5), 20, 0.3, 0).is_empty());
    }

    #[test]
    fn vertices_lie_on_circumcircle() {
        let center = p(120, 80);
        let radius = 75;
        let angle = 0.7;
        let n = 7;
        for (i, v) in regular_polygon(center, radius, angle, n).iter().enumerate() {
            let dx = f64::from(v.x - center.x);
            let dy = f64::from(v.y - center.y);
            // Truncation moves each coordinate by less than one pixel.
            assert_abs_diff_eq!(dx.hypot(dy), f64::from(radius), epsilon = 1.5);

            #[allow(clippy::cast_precision_loss)]
            let expected = angle + TAU * i as f64 / n as f64;
            assert_abs_diff_eq!(
                dx,
                f64::from(radius) * expected.cos(),
                epsilon = 1.0
            );
            assert_abs_diff_eq!(
                dy,
                f64::from(radius) * expected.sin(),
                epsilon = 1.0
            );
        }
    }

    #[test]
    fn negative_radius_reflects_through_center() {
        let pts = regular_polygon(p(0, 0), -10, 0.0, 4);
        assert_eq!(pts, vec![p(-10, 0), p(0, -10), p(10, 0), p(0, 10)]);
    }

    #[test]
    fn preset_triangle_matches_reference_pixels() {
        let pts = regular_polygon(p(100, 100), 50, PI, 3);
        assert_eq!(pts, vec![p(50, 100), p(124, 56), p(125, 143)]);
    }

    #[test]
    fn rotate_quarter_turn_about_origin() {
        assert_eq!(rotate_around(p(10, 0), p(0, 0), FRAC_PI_2), p(0, 10));
    }

    #[test]
    fn rotate_about_offset_pivot() {
        assert_eq!(rotate_around(p(200, 200), p(100, 100), FRAC_PI_2), p(0, 200));
        assert_eq!(rotate_around(p(200, 100), p(100, 100), PI), p(0, 100));
    }

    #[test]
    fn rotating_the_pivot_is_identity() {
        assert_eq!(rotate_around(p(5, 5), p(5, 5), 1.0), p(5, 5));
    }
}
