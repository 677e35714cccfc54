use tracing::trace;

use crate::config::MAX_VERTICES;
use crate::error::{FigureError, Result};
use crate::math::polygon_2d::{regular_polygon, rotate_around};
use crate::math::Point;

/// A regular polygon on the canvas.
///
/// The vertex list is derived from `center`, `radius`, `angle` and the
/// vertex count, and is recomputed by every operation that changes one of
/// them. The `active`, `selected` and `visible` flags are independent of
/// the geometry and of each other; keeping at most one figure active or
/// selected is the [`Scene`](crate::scene::Scene)'s job.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    vertices_count: usize,
    center: Point,
    radius: i32,
    angle: f64,
    active: bool,
    selected: bool,
    visible: bool,
    vertices: Vec<Point>,
}

impl Figure {
    /// Creates a new figure. The figure starts visible and not selected.
    ///
    /// No lower bound is enforced on `vertices_count`; fewer than three
    /// vertices produce a degenerate polygon.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::TooManyVertices`] if `vertices_count`
    /// exceeds [`MAX_VERTICES`].
    pub fn new(
        vertices_count: usize,
        center: Point,
        radius: i32,
        angle: f64,
        active: bool,
    ) -> Result<Self> {
        if vertices_count > MAX_VERTICES {
            return Err(FigureError::TooManyVertices {
                requested: vertices_count,
                max: MAX_VERTICES,
            }
            .into());
        }

        let mut figure = Self {
            vertices_count,
            center,
            radius,
            angle,
            active,
            selected: false,
            visible: true,
            vertices: Vec::with_capacity(vertices_count),
        };
        figure.update_vertices();
        Ok(figure)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertices_count(&self) -> usize {
        self.vertices_count
    }

    /// Returns the center of the circumscribed circle.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the circumradius in pixels.
    #[must_use]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Returns the rotation angle in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Returns the vertices as a closed polygon (the last vertex connects
    /// back to the first).
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius;
        self.update_vertices();
    }

    /// Sets the rotation angle in radians.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
        self.update_vertices();
    }

    /// Moves the center of the figure to `point`.
    pub fn move_to(&mut self, point: Point) {
        self.center = point;
        self.update_vertices();
    }

    /// Grows the radius by `pixels` (shrinks for negative values).
    ///
    /// The radius is allowed to pass through zero and saturates at the
    /// bounds of `i32`.
    pub fn scale(&mut self, pixels: i32) {
        self.radius = self.radius.saturating_add(pixels);
        self.update_vertices();
    }

    /// Rotates the figure about its own center by `angle` radians.
    pub fn rotate(&mut self, angle: f64) {
        self.angle += angle;
        self.update_vertices();
    }

    /// Orbits the center of the figure around `pivot` by `angle` radians.
    ///
    /// The figure's own orientation (`angle`) is left unchanged.
    pub fn rotate_around(&mut self, pivot: Point, angle: f64) {
        self.center = rotate_around(self.center, pivot, angle);
        self.update_vertices();
    }

    pub fn enable(&mut self) {
        self.active = true;
    }

    pub fn disable(&mut self) {
        self.active = false;
    }

    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    pub fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    fn update_vertices(&mut self) {
        self.vertices = regular_polygon(self.center, self.radius, self.angle, self.vertices_count);
        trace!(
            center = ?(self.center.x, self.center.y),
            radius = self.radius,
            angle = self.angle,
            "recomputed figure vertices"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::error::PolysceneError;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn square() -> Figure {
        Figure::new(4, p(0, 0), 10, 0.0, true).unwrap()
    }

    #[test]
    fn new_figure_has_derived_vertices() {
        let f = square();
        assert_eq!(f.vertices_count(), 4);
        assert_eq!(f.vertices(), &[p(10, 0), p(0, 10), p(-10, 0), p(0, -10)]);
        assert!(f.is_active());
        assert!(!f.is_selected());
        assert!(f.is_visible());
    }

    #[test]
    fn max_vertices_is_accepted() {
        let f = Figure::new(MAX_VERTICES, p(0, 0), 10, 0.0, false).unwrap();
        assert_eq!(f.vertices().len(), MAX_VERTICES);
    }

    #[test]
    fn too_many_vertices_is_rejected() {
        let err = Figure::new(MAX_VERTICES + 1, p(0, 0), 10, 0.0, true).unwrap_err();
        assert_eq!(
            err,
            PolysceneError::Figure(FigureError::TooManyVertices {
                requested: MAX_VERTICES + 1,
                max: MAX_VERTICES,
            })
        );
    }

    #[test]
    fn move_to_shifts_every_vertex() {
        let mut f = square();
        f.move_to(p(100, 50));
        assert_eq!(f.center(), p(100, 50));
        assert_eq!(f.vertices(), &[p(110, 50), p(100, 60), p(90, 50), p(100, 40)]);
    }

    #[test]
    fn scale_changes_radius_and_vertices() {
        let mut f = square();
        f.scale(5);
        assert_eq!(f.radius(), 15);
        assert_eq!(f.vertices()[0], p(15, 0));
        f.scale(-20);
        assert_eq!(f.radius(), -5);
        assert_eq!(f.vertices()[0], p(-5, 0));
    }

    #[test]
    fn scale_saturates_at_radius_bounds() {
        let mut f = square();
        f.set_radius(i32::MAX);
        f.scale(1);
        assert_eq!(f.radius(), i32::MAX);
        f.set_radius(i32::MIN);
        f.scale(-1);
        assert_eq!(f.radius(), i32::MIN);
        assert_eq!(f.vertices().len(), 4);
    }

    #[test]
    fn set_radius_recomputes() {
        let mut f = square();
        f.set_radius(3);
        assert_eq!(f.vertices()[1], p(0, 3));
    }

    #[test]
    fn rotate_accumulates_angle() {
        let mut f = square();
        f.rotate(FRAC_PI_2);
        f.rotate(FRAC_PI_2);
        assert_relative_eq!(f.angle(), PI);
        assert_eq!(f.vertices()[0], p(-10, 0));
    }

    #[test]
    fn set_angle_replaces_angle() {
        let mut f = square();
        f.rotate(1.0);
        f.set_angle(FRAC_PI_2);
        assert_relative_eq!(f.angle(), FRAC_PI_2);
        assert_eq!(f.vertices()[0], p(0, 10));
    }

    #[test]
    fn rotate_around_orbits_center_only() {
        let mut f = Figure::new(4, p(10, 0), 5, 0.25, true).unwrap();
        f.rotate_around(p(0, 0), FRAC_PI_2);
        assert_eq!(f.center(), p(0, 10));
        assert_relative_eq!(f.angle(), 0.25);
        assert_eq!(f.vertices(), regular_polygon(p(0, 10), 5, 0.25, 4).as_slice());
    }

    #[test]
    fn flags_are_independent() {
        let mut f = square();
        f.select();
        f.disable();
        assert!(f.is_selected());
        assert!(!f.is_active());
        f.toggle_active();
        f.toggle_selected();
        assert!(f.is_active());
        assert!(!f.is_selected());
        f.hide();
        assert!(!f.is_visible());
        f.toggle_visibility();
        assert!(f.is_visible());
        f.deselect();
        f.enable();
        f.show();
        assert!(f.is_active() && f.is_visible() && !f.is_selected());
    }

    #[test]
    fn flag_changes_do_not_touch_geometry() {
        let mut f = square();
        let before = f.vertices().to_vec();
        f.toggle_selected();
        f.disable();
        f.hide();
        assert_eq!(f.vertices(), before.as_slice());
    }
}
