use tracing::debug;

use super::Scene;
use crate::config::{MAX_VERTICES, MIN_VERTICES};
use crate::error::Result;

impl Scene {
    /// Suspends interactive editing.
    ///
    /// Disables the active figure, deselects the selected one, remembers
    /// both cursors and clears them. Locking a locked scene does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EmptyScene`](crate::error::SceneError::EmptyScene)
    /// if the scene has no figures.
    pub fn lock_scene(&mut self) -> Result<()> {
        self.ensure_non_empty()?;
        if self.locked {
            return Ok(());
        }
        if let Some(index) = self.active_index {
            self.figures[index].disable();
        }
        if let Some(index) = self.selected_index {
            self.figures[index].deselect();
        }
        self.saved_active_index = self.active_index.take();
        self.saved_selected_index = self.selected_index.take();
        self.locked = true;
        debug!(
            saved_active = ?self.saved_active_index,
            saved_selected = ?self.saved_selected_index,
            "scene locked"
        );
        Ok(())
    }

    /// Resumes interactive editing with the cursors saved by
    /// [`Scene::lock_scene`]. Figure flags are left alone; call
    /// [`Scene::restore_after_blocking`] to bring them back in line.
    /// Unlocking an unlocked scene does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EmptyScene`](crate::error::SceneError::EmptyScene)
    /// if the scene has no figures.
    pub fn unlock_scene(&mut self) -> Result<()> {
        self.ensure_non_empty()?;
        if !self.locked {
            return Ok(());
        }
        self.active_index = self.saved_active_index.take();
        self.selected_index = self.saved_selected_index.take();
        self.locked = false;
        debug!(active = ?self.active_index, selected = ?self.selected_index, "scene unlocked");
        Ok(())
    }

    /// Re-applies the cursors to the figure flags: every figure is
    /// disabled, then the figure under the active cursor is enabled and
    /// the one under the selection cursor is selected.
    pub fn restore_after_blocking(&mut self) {
        for figure in &mut self.figures {
            figure.disable();
        }
        if let Some(index) = self.active_index {
            self.figures[index].enable();
        }
        if let Some(index) = self.selected_index {
            self.figures[index].select();
        }
    }

    /// Enables the figure with the largest radius among those with exactly
    /// `vertices_count` vertices. Ties keep the earliest figure.
    ///
    /// Returns the index of the enabled figure, or `None` if no figure has
    /// that many vertices.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EmptyScene`](crate::error::SceneError::EmptyScene)
    /// if the scene has no figures.
    pub fn set_largest_figure_as_active_by_vertices_count(
        &mut self,
        vertices_count: usize,
    ) -> Result<Option<usize>> {
        self.ensure_non_empty()?;
        let largest = self
            .figures
            .iter()
            .enumerate()
            .filter(|(_, figure)| figure.vertices_count() == vertices_count)
            .reduce(|best, candidate| {
                if candidate.1.radius() > best.1.radius() {
                    candidate
                } else {
                    best
                }
            })
            .map(|(index, _)| index);

        if let Some(index) = largest {
            self.figures[index].enable();
        }
        Ok(largest)
    }

    /// Runs [`Scene::set_largest_figure_as_active_by_vertices_count`] for
    /// every vertex count from 3 to [`MAX_VERTICES`].
    ///
    /// This enables one figure per vertex-count class, so several figures
    /// may be active at once afterwards. Returns the enabled indices.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::EmptyScene`](crate::error::SceneError::EmptyScene)
    /// if the scene has no figures.
    pub fn set_all_largest_figures_as_active(&mut self) -> Result<Vec<usize>> {
        self.ensure_non_empty()?;
        let mut enabled = Vec::new();
        for vertices_count in MIN_VERTICES..=MAX_VERTICES {
            if let Some(index) = self.set_largest_figure_as_active_by_vertices_count(vertices_count)? {
                enabled.push(index);
            }
        }
        debug!(?enabled, "enabled largest figures");
        Ok(enabled)
    }
}
