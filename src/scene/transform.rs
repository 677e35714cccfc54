use super::Scene;
use crate::config::SCALE_STEP;
use crate::error::{Result, SceneError};
use crate::math::Point;

impl Scene {
    /// Rotates the active figure about its own center.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked.
    pub fn rotate_active_figure(&mut self, angle: f64) -> Result<()> {
        let index = self.guarded_active()?;
        self.figures[index].rotate(angle);
        Ok(())
    }

    /// Moves the center of the active figure to `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked.
    pub fn move_active_figure_to(&mut self, point: Point) -> Result<()> {
        let index = self.guarded_active()?;
        self.figures[index].move_to(point);
        Ok(())
    }

    /// Moves the center of the active figure onto the selected figure's
    /// center.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked, or
    /// [`SceneError::NoSelection`] if nothing is selected.
    pub fn move_active_figure_to_selected(&mut self) -> Result<()> {
        let index = self.guarded_active()?;
        let selected = self.selected_index.ok_or(SceneError::NoSelection)?;
        let target = self.figures[selected].center();
        self.figures[index].move_to(target);
        Ok(())
    }

    /// Grows the active figure's radius by one step.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked.
    pub fn increase_active_figure_radius(&mut self) -> Result<()> {
        let index = self.guarded_active()?;
        self.figures[index].scale(SCALE_STEP);
        Ok(())
    }

    /// Shrinks the active figure's radius by one step. The radius may go
    /// negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked.
    pub fn decrease_active_figure_radius(&mut self) -> Result<()> {
        let index = self.guarded_active()?;
        self.figures[index].scale(-SCALE_STEP);
        Ok(())
    }

    /// Rotates every figure about its own center. Cursors are unaffected.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked.
    pub fn rotate_all_figures(&mut self, angle: f64) -> Result<()> {
        self.ensure_unlocked()?;
        for figure in &mut self.figures {
            figure.rotate(angle);
        }
        Ok(())
    }

    /// Orbits the active figure around the selected figure's center.
    ///
    /// Without a selection, or when the active figure is the selected one,
    /// the active figure rotates in place instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked.
    pub fn rotate_active_figure_around_selected(&mut self, angle: f64) -> Result<()> {
        let index = self.guarded_active()?;
        match self.selected_index {
            Some(selected) if selected != index => {
                let pivot = self.figures[selected].center();
                self.figures[index].rotate_around(pivot, angle);
            }
            _ => self.figures[index].rotate(angle),
        }
        Ok(())
    }

    /// Orbits the active figure around an arbitrary `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked.
    pub fn rotate_active_figure_around_point(&mut self, point: Point, angle: f64) -> Result<()> {
        let index = self.guarded_active()?;
        self.figures[index].rotate_around(point, angle);
        Ok(())
    }
}
