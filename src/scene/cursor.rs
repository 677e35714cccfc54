use tracing::debug;

use super::Scene;
use crate::error::Result;

impl Scene {
    /// Moves the active cursor to the next figure, wrapping from the last
    /// figure to the first.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked.
    pub fn set_next_figure_as_active(&mut self) -> Result<()> {
        let index = self.guarded_active()?;
        let next = if index + 1 >= self.figures.len() {
            0
        } else {
            index + 1
        };
        self.move_active_cursor(index, next);
        Ok(())
    }

    /// Moves the active cursor to the previous figure, wrapping from the
    /// first figure to the last.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked.
    pub fn set_prev_figure_as_active(&mut self) -> Result<()> {
        let index = self.guarded_active()?;
        let prev = if index == 0 {
            self.figures.len() - 1
        } else {
            index - 1
        };
        self.move_active_cursor(index, prev);
        Ok(())
    }

    /// Toggles the selection of the active figure.
    ///
    /// Selecting the already-selected active figure clears the selection;
    /// otherwise any previous selection is dropped and the active figure
    /// becomes the selected one.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked.
    pub fn select_active_figure(&mut self) -> Result<()> {
        let index = self.guarded_active()?;
        match self.selected_index {
            Some(selected) if selected == index => self.selected_index = None,
            Some(selected) => {
                self.figures[selected].deselect();
                self.selected_index = Some(index);
            }
            None => self.selected_index = Some(index),
        }
        self.figures[index].toggle_selected();
        debug!(selected = ?self.selected_index, "selection changed");
        Ok(())
    }

    /// Removes the active figure.
    ///
    /// Later figures shift down by one. The cursor stays on the same slot,
    /// stepping back one when the removed figure was last; a cursor that
    /// would land on slot 0 wraps to the last figure instead. The figure
    /// under the cursor is enabled. Removing the selected figure clears
    /// the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked.
    pub fn delete_active_figure(&mut self) -> Result<()> {
        let index = self.guarded_active()?;
        self.figures.remove(index);
        debug!(index, remaining = self.figures.len(), "deleted figure");

        self.selected_index = match self.selected_index {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };

        if self.figures.is_empty() {
            self.active_index = None;
            return Ok(());
        }
        let last = self.figures.len() - 1;
        let active = match index.min(last) {
            0 => last,
            slot => slot,
        };
        self.active_index = Some(active);
        self.figures[active].enable();
        Ok(())
    }

    /// Shows or hides the active figure.
    ///
    /// Hidden figures keep their place in the cursor order.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is empty or locked.
    pub fn toggle_active_figure_visibility(&mut self) -> Result<()> {
        let index = self.guarded_active()?;
        self.figures[index].toggle_visibility();
        Ok(())
    }

    fn move_active_cursor(&mut self, from: usize, to: usize) {
        self.figures[from].disable();
        self.active_index = Some(to);
        self.figures[to].enable();
        debug!(from, to, "active figure changed");
    }
}
