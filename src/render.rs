//! Drawing adapter: turns a [`Scene`] into pen selections and closed
//! polylines on an abstract [`Canvas`].

use crate::figure::Figure;
use crate::math::Point;
use crate::scene::Scene;

/// RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Line pen: width in pixels and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pen {
    pub width: u32,
    pub color: Rgb,
}

impl Pen {
    #[must_use]
    pub fn new(width: u32, color: Rgb) -> Self {
        Self { width, color }
    }
}

/// Draw style derived from a figure's active and selected flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawStyle {
    Active,
    ActiveSelected,
    Inactive,
    InactiveSelected,
}

impl DrawStyle {
    #[must_use]
    pub fn of(figure: &Figure) -> Self {
        match (figure.is_active(), figure.is_selected()) {
            (true, false) => Self::Active,
            (true, true) => Self::ActiveSelected,
            (false, false) => Self::Inactive,
            (false, true) => Self::InactiveSelected,
        }
    }
}

/// One pen per [`DrawStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenSet {
    pub active: Pen,
    pub active_selected: Pen,
    pub inactive: Pen,
    pub inactive_selected: Pen,
}

impl Default for PenSet {
    fn default() -> Self {
        const RED: Rgb = Rgb(255, 0, 0);
        const BLUE: Rgb = Rgb(0, 0, 255);
        Self {
            active: Pen::new(5, RED),
            active_selected: Pen::new(5, BLUE),
            inactive: Pen::new(1, RED),
            inactive_selected: Pen::new(1, BLUE),
        }
    }
}

impl PenSet {
    #[must_use]
    pub fn pen(&self, style: DrawStyle) -> Pen {
        match style {
            DrawStyle::Active => self.active,
            DrawStyle::ActiveSelected => self.active_selected,
            DrawStyle::Inactive => self.inactive,
            DrawStyle::InactiveSelected => self.inactive_selected,
        }
    }
}

/// Minimal line-drawing surface.
pub trait Canvas {
    /// Makes `pen` the pen for subsequent lines.
    fn select_pen(&mut self, pen: Pen);

    /// Moves the current position without drawing.
    fn move_to(&mut self, point: Point);

    /// Draws a line from the current position to `point` and makes it
    /// the current position.
    fn line_to(&mut self, point: Point);
}

/// Draws `scene` with the default pens.
pub fn render(scene: &Scene, canvas: &mut impl Canvas) {
    render_with(scene, &PenSet::default(), canvas);
}

/// Draws every visible figure of `scene` in index order as a closed
/// polyline, using the pen for its [`DrawStyle`].
pub fn render_with(scene: &Scene, pens: &PenSet, canvas: &mut impl Canvas) {
    for index in 0..scene.count_elements() {
        let Ok(figure) = scene.get_figure(index) else {
            continue;
        };
        if !figure.is_visible() {
            continue;
        }
        let Some((&first, rest)) = figure.vertices().split_first() else {
            continue;
        };

        canvas.select_pen(pens.pen(DrawStyle::of(figure)));
        canvas.move_to(first);
        for &vertex in rest {
            canvas.line_to(vertex);
        }
        canvas.line_to(first);
    }
}

/// A recorded canvas call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    SelectPen(Pen),
    MoveTo(Point),
    LineTo(Point),
}

/// [`Canvas`] that records every call, for headless rendering.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Splits the recording into `(pen, polyline)` pairs, one per
    /// `move_to`.
    #[must_use]
    pub fn polylines(&self) -> Vec<(Option<Pen>, Vec<Point>)> {
        let mut pen = None;
        let mut lines: Vec<(Option<Pen>, Vec<Point>)> = Vec::new();
        for command in &self.commands {
            match *command {
                DrawCommand::SelectPen(p) => pen = Some(p),
                DrawCommand::MoveTo(point) => lines.push((pen, vec![point])),
                DrawCommand::LineTo(point) => {
                    if let Some((_, line)) = lines.last_mut() {
                        line.push(point);
                    }
                }
            }
        }
        lines
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn select_pen(&mut self, pen: Pen) {
        self.commands.push(DrawCommand::SelectPen(pen));
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::LineTo(point));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn style_covers_flag_product() {
        let mut figure = Figure::new(3, p(0, 0), 10, 0.0, true).unwrap();
        assert_eq!(DrawStyle::of(&figure), DrawStyle::Active);
        figure.select();
        assert_eq!(DrawStyle::of(&figure), DrawStyle::ActiveSelected);
        figure.disable();
        assert_eq!(DrawStyle::of(&figure), DrawStyle::InactiveSelected);
        figure.deselect();
        assert_eq!(DrawStyle::of(&figure), DrawStyle::Inactive);
    }

    #[test]
    fn empty_scene_draws_nothing() {
        let mut canvas = RecordingCanvas::new();
        render(&Scene::new(), &mut canvas);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn figure_is_drawn_as_closed_polyline() {
        let mut scene = Scene::new();
        scene.new_figure(p(0, 0), 10, 4, 0.0, true).unwrap();
        let mut canvas = RecordingCanvas::new();
        render(&scene, &mut canvas);

        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::SelectPen(PenSet::default().active),
                DrawCommand::MoveTo(p(10, 0)),
                DrawCommand::LineTo(p(0, 10)),
                DrawCommand::LineTo(p(-10, 0)),
                DrawCommand::LineTo(p(0, -10)),
                DrawCommand::LineTo(p(10, 0)),
            ]
        );
    }

    #[test]
    fn figures_are_drawn_in_index_order_with_their_styles() {
        let mut scene = Scene::new();
        scene.new_figure(p(0, 0), 10, 3, 0.0, true).unwrap();
        scene.select_active_figure().unwrap();
        scene.new_figure(p(50, 50), 10, 5, 0.0, true).unwrap();

        let pens = PenSet::default();
        let mut canvas = RecordingCanvas::new();
        render_with(&scene, &pens, &mut canvas);
        let lines = canvas.polylines();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Some(pens.inactive_selected));
        assert_eq!(lines[0].1.len(), 4);
        assert_eq!(lines[1].0, Some(pens.active));
        assert_eq!(lines[1].1.len(), 6);
        assert_eq!(lines[1].1.first(), lines[1].1.last());
    }

    #[test]
    fn hidden_figures_are_skipped() {
        let mut scene = Scene::new();
        scene.new_figure(p(0, 0), 10, 3, 0.0, true).unwrap();
        scene.new_figure(p(50, 50), 10, 4, 0.0, true).unwrap();
        scene.toggle_active_figure_visibility().unwrap();

        let mut canvas = RecordingCanvas::new();
        render(&scene, &mut canvas);
        let lines = canvas.polylines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].1.len(), 4);

        canvas.clear();
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn figures_are_read_through_indexed_lookup() {
        let mut scene = Scene::new();
        for i in 0..3 {
            scene.new_figure(p(i * 100, 0), 10, 3, 0.0, true).unwrap();
        }
        let mut canvas = RecordingCanvas::new();
        render(&scene, &mut canvas);

        let starts: Vec<Point> = canvas.polylines().iter().map(|(_, line)| line[0]).collect();
        let expected: Vec<Point> = (0..scene.count_elements())
            .map(|i| scene.get_figure(i).unwrap().vertices()[0])
            .collect();
        assert_eq!(starts, expected);
    }

    #[test]
    fn figures_without_vertices_are_skipped() {
        let mut scene = Scene::new();
        scene.new_figure(p(0, 0), 10, 0, 0.0, true).unwrap();
        let mut canvas = RecordingCanvas::new();
        render(&scene, &mut canvas);
        assert!(canvas.commands().is_empty());
    }
}
