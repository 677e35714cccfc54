//! Editor constants and the [`EditorConfig`] value.

use std::f64::consts::PI;

use crate::input::Keymap;
use crate::math::Point;
use crate::render::PenSet;

/// Largest vertex count a figure may have.
pub const MAX_VERTICES: usize = 10;

/// Smallest vertex count the largest-figure sweep considers.
pub const MIN_VERTICES: usize = 3;

/// Rotation applied per rotate keystroke, in radians.
pub const ROTATE_STEP: f64 = PI / 12.0;

/// Radius change per grow/shrink keystroke, in pixels.
pub const SCALE_STEP: i32 = 1;

/// Parameters for a figure created from a key binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigurePreset {
    pub vertices_count: usize,
    pub center: Point,
    pub radius: i32,
    pub angle: f64,
}

impl FigurePreset {
    #[must_use]
    pub fn new(vertices_count: usize, center: Point, radius: i32, angle: f64) -> Self {
        Self {
            vertices_count,
            center,
            radius,
            angle,
        }
    }
}

/// Configuration of an [`Editor`](crate::input::Editor).
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Rotation per keystroke, in radians.
    pub rotate_step: f64,
    /// Presets bound to the figure-creation keys, in key order
    /// (F1, F2, F3, F6). Missing entries leave the key unbound.
    pub presets: Vec<FigurePreset>,
    /// Pens used for the four draw styles.
    pub pens: PenSet,
    /// Maximum number of figures in the scene, `None` for unbounded.
    pub max_figures: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            rotate_step: ROTATE_STEP,
            presets: vec![
                FigurePreset::new(3, Point::new(100, 100), 50, PI),
                FigurePreset::new(4, Point::new(200, 200), 50, PI),
                FigurePreset::new(4, Point::new(200, 200), 50, 0.0),
                FigurePreset::new(6, Point::new(300, 300), 50, 0.0),
            ],
            pens: PenSet::default(),
            max_figures: None,
        }
    }
}

impl EditorConfig {
    #[must_use]
    pub fn with_rotate_step(mut self, rotate_step: f64) -> Self {
        self.rotate_step = rotate_step;
        self
    }

    #[must_use]
    pub fn with_presets(mut self, presets: Vec<FigurePreset>) -> Self {
        self.presets = presets;
        self
    }

    #[must_use]
    pub fn with_pens(mut self, pens: PenSet) -> Self {
        self.pens = pens;
        self
    }

    #[must_use]
    pub fn with_max_figures(mut self, max_figures: usize) -> Self {
        self.max_figures = Some(max_figures);
        self
    }

    /// Builds the key bindings for this configuration.
    #[must_use]
    pub fn keymap(&self) -> Keymap {
        Keymap::standard(self.rotate_step, &self.presets)
    }
}
