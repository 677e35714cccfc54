//! Ordered collection of figures with active/selected cursors and a lock.
//!
//! The [`Scene`] is the only mutator of [`Figure`] state. Figures are
//! addressed by their position in insertion order; removing a figure
//! shifts every later figure down by one and the cursors are re-derived
//! through index arithmetic, never through references.

mod cursor;
mod lock;
mod transform;

use tracing::debug;

use crate::error::{Result, SceneError};
use crate::figure::Figure;
use crate::math::Point;

/// The editable scene.
///
/// While unlocked and non-empty exactly one index is the active cursor.
/// Locking clears both cursors (remembering them for [`Scene::unlock_scene`])
/// and blocks interactive edits.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    figures: Vec<Figure>,
    active_index: Option<usize>,
    selected_index: Option<usize>,
    locked: bool,
    saved_active_index: Option<usize>,
    saved_selected_index: Option<usize>,
    max_figures: Option<usize>,
}

impl Scene {
    /// Creates a new, empty, unbounded scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scene that holds at most `max_figures` figures.
    #[must_use]
    pub fn with_max_figures(max_figures: usize) -> Self {
        Self {
            max_figures: Some(max_figures),
            ..Self::default()
        }
    }

    /// Returns the number of figures in the scene.
    #[must_use]
    pub fn count_elements(&self) -> usize {
        self.figures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Returns the figure at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::IndexOutOfRange`] if `index >= count_elements()`.
    pub fn get_figure(&self, index: usize) -> Result<&Figure> {
        self.figures.get(index).ok_or_else(|| {
            SceneError::IndexOutOfRange {
                index,
                len: self.figures.len(),
            }
            .into()
        })
    }

    /// Returns all figures in index order.
    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Returns the figure under the active cursor, if any.
    #[must_use]
    pub fn active_figure(&self) -> Option<&Figure> {
        self.active_index.and_then(|i| self.figures.get(i))
    }

    /// Returns the figure under the selection cursor, if any.
    #[must_use]
    pub fn selected_figure(&self) -> Option<&Figure> {
        self.selected_index.and_then(|i| self.figures.get(i))
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Appends a new figure and makes it the active one.
    ///
    /// Every other figure is disabled. The new figure keeps the `active`
    /// flag it was created with. Returns the index of the new figure.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::SceneLocked`] while the scene is locked,
    /// [`SceneError::TooManyFigures`] if the scene is full, or
    /// [`FigureError::TooManyVertices`](crate::error::FigureError::TooManyVertices)
    /// if `vertices_count` is too large.
    pub fn new_figure(
        &mut self,
        center: Point,
        radius: i32,
        vertices_count: usize,
        angle: f64,
        active: bool,
    ) -> Result<usize> {
        if self.locked {
            return Err(SceneError::SceneLocked.into());
        }
        if let Some(max) = self.max_figures {
            if self.figures.len() >= max {
                return Err(SceneError::TooManyFigures { max }.into());
            }
        }

        let figure = Figure::new(vertices_count, center, radius, angle, active)?;
        for other in &mut self.figures {
            other.disable();
        }
        self.figures.push(figure);

        let index = self.figures.len() - 1;
        self.active_index = Some(index);
        debug!(index, vertices_count, "added figure");
        Ok(index)
    }

    /// Removes every figure and resets cursors and lock state.
    pub fn delete_all_figures(&mut self) {
        if !self.figures.is_empty() {
            debug!(count = self.figures.len(), "deleted all figures");
        }
        let max_figures = self.max_figures;
        *self = Self {
            max_figures,
            ..Self::default()
        };
    }

    fn ensure_non_empty(&self) -> std::result::Result<(), SceneError> {
        if self.figures.is_empty() {
            return Err(SceneError::EmptyScene);
        }
        Ok(())
    }

    fn ensure_unlocked(&self) -> std::result::Result<(), SceneError> {
        self.ensure_non_empty()?;
        if self.locked {
            return Err(SceneError::SceneLocked);
        }
        Ok(())
    }

    /// Checks the interactive-edit preconditions and resolves the active
    /// cursor.
    fn guarded_active(&self) -> std::result::Result<usize, SceneError> {
        self.ensure_unlocked()?;
        self.active_index.ok_or(SceneError::EmptyScene)
    }
}
