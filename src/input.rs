//! Input adapter: maps platform-neutral input events to scene commands
//! and runs them one at a time.
//!
//! Each event runs at most one [`Command`]. Failures are logged
//! and swallowed so the editor keeps running; the scene keeps whatever
//! state it had when the operation failed.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::{EditorConfig, FigurePreset};
use crate::error::{PolysceneError, Result};
use crate::math::Point;
use crate::render::{render_with, Canvas};
use crate::scene::Scene;

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    F1,
    F2,
    F3,
    F6,
    F11,
    F12,
    Left,
    Right,
    Up,
    Down,
    Delete,
    Space,
    Enter,
    PageUp,
    PageDown,
    Home,
    End,
    Escape,
    Char(char),
}

/// A platform input event, already translated to canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    LeftClick(Point),
    RightClick(Point),
}

/// A single scene operation, with its arguments bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    NewFigure(FigurePreset),
    RotateActive(f64),
    NextFigure,
    PrevFigure,
    MoveActiveTo(Point),
    MoveActiveToSelected,
    IncreaseRadius,
    DecreaseRadius,
    DeleteActive,
    RotateAll(f64),
    SelectActive,
    RotateAroundSelected(f64),
    RotateAroundPoint(Point, f64),
    ToggleVisibility,
    DeleteAll,
    /// Lock the scene and highlight the largest figure of every vertex
    /// count.
    LockAndSweep,
    /// Unlock the scene and re-apply the saved cursors.
    UnlockAndRestore,
}

impl Command {
    /// Runs the command against `scene`.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying scene operation.
    pub fn apply(self, scene: &mut Scene) -> Result<()> {
        match self {
            Self::NewFigure(preset) => scene
                .new_figure(
                    preset.center,
                    preset.radius,
                    preset.vertices_count,
                    preset.angle,
                    true,
                )
                .map(|_| ()),
            Self::RotateActive(angle) => scene.rotate_active_figure(angle),
            Self::NextFigure => scene.set_next_figure_as_active(),
            Self::PrevFigure => scene.set_prev_figure_as_active(),
            Self::MoveActiveTo(point) => scene.move_active_figure_to(point),
            Self::MoveActiveToSelected => scene.move_active_figure_to_selected(),
            Self::IncreaseRadius => scene.increase_active_figure_radius(),
            Self::DecreaseRadius => scene.decrease_active_figure_radius(),
            Self::DeleteActive => scene.delete_active_figure(),
            Self::RotateAll(angle) => scene.rotate_all_figures(angle),
            Self::SelectActive => scene.select_active_figure(),
            Self::RotateAroundSelected(angle) => scene.rotate_active_figure_around_selected(angle),
            Self::RotateAroundPoint(point, angle) => {
                scene.rotate_active_figure_around_point(point, angle)
            }
            Self::ToggleVisibility => scene.toggle_active_figure_visibility(),
            Self::DeleteAll => {
                scene.delete_all_figures();
                Ok(())
            }
            Self::LockAndSweep => {
                scene.lock_scene()?;
                scene.set_all_largest_figures_as_active().map(|_| ())
            }
            Self::UnlockAndRestore => {
                scene.unlock_scene()?;
                scene.restore_after_blocking();
                Ok(())
            }
        }
    }
}

/// Outcome of dispatching one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    /// Whether the canvas should be redrawn.
    pub repaint: bool,
    /// The error the scene reported, already logged.
    pub error: Option<PolysceneError>,
}

/// Runs `command` against `scene`, logging and swallowing any failure.
pub fn dispatch(scene: &mut Scene, command: Command) -> Dispatch {
    debug!(?command, "dispatching");
    let error = command.apply(scene).err();
    if let Some(err) = &error {
        warn!(?command, %err, "scene operation failed");
    }
    Dispatch {
        repaint: true,
        error,
    }
}

/// Bindings from input events to commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Keymap {
    keys: HashMap<Key, Command>,
    click_rotate_step: f64,
}

impl Keymap {
    /// Builds the standard bindings.
    ///
    /// `presets` are bound to F1, F2, F3 and F6 in order; F12/F11 rotate
    /// by `±rotate_step`. A left click moves the active figure to the
    /// click point and a right click orbits it around the click point.
    #[must_use]
    pub fn standard(rotate_step: f64, presets: &[FigurePreset]) -> Self {
        let mut keys = HashMap::new();
        for (key, preset) in [Key::F1, Key::F2, Key::F3, Key::F6].into_iter().zip(presets) {
            keys.insert(key, Command::NewFigure(*preset));
        }
        keys.extend([
            (Key::F12, Command::RotateActive(rotate_step)),
            (Key::F11, Command::RotateActive(-rotate_step)),
            (Key::Left, Command::PrevFigure),
            (Key::Right, Command::NextFigure),
            (Key::Up, Command::IncreaseRadius),
            (Key::Down, Command::DecreaseRadius),
            (Key::Delete, Command::DeleteActive),
            (Key::Space, Command::SelectActive),
            (Key::Enter, Command::MoveActiveToSelected),
            (Key::PageUp, Command::RotateAroundSelected(rotate_step)),
            (Key::PageDown, Command::RotateAroundSelected(-rotate_step)),
            (Key::Home, Command::RotateAll(rotate_step)),
            (Key::End, Command::RotateAll(-rotate_step)),
            (Key::Escape, Command::DeleteAll),
            (Key::Char('l'), Command::LockAndSweep),
            (Key::Char('u'), Command::UnlockAndRestore),
            (Key::Char('h'), Command::ToggleVisibility),
        ]);
        Self {
            keys,
            click_rotate_step: rotate_step,
        }
    }

    /// Binds `key` to `command`, replacing any previous binding.
    pub fn bind(&mut self, key: Key, command: Command) {
        self.keys.insert(key, command);
    }

    pub fn unbind(&mut self, key: Key) {
        self.keys.remove(&key);
    }

    /// Returns the command bound to `event`, if any. Letter keys match
    /// case-insensitively.
    #[must_use]
    pub fn command_for(&self, event: &InputEvent) -> Option<Command> {
        match *event {
            InputEvent::Key(Key::Char(c)) => self
                .keys
                .get(&Key::Char(c))
                .or_else(|| self.keys.get(&Key::Char(c.to_ascii_lowercase())))
                .copied(),
            InputEvent::Key(key) => self.keys.get(&key).copied(),
            InputEvent::LeftClick(point) => Some(Command::MoveActiveTo(point)),
            InputEvent::RightClick(point) => {
                Some(Command::RotateAroundPoint(point, self.click_rotate_step))
            }
        }
    }
}

/// An owned scene together with its configuration and key bindings.
#[derive(Debug, Clone)]
pub struct Editor {
    scene: Scene,
    config: EditorConfig,
    keymap: Keymap,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let scene = match config.max_figures {
            Some(max) => Scene::with_max_figures(max),
            None => Scene::new(),
        };
        let keymap = config.keymap();
        Self {
            scene,
            config,
            keymap,
        }
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn keymap_mut(&mut self) -> &mut Keymap {
        &mut self.keymap
    }

    /// Handles one input event. Returns `None` for unbound events, which
    /// need no repaint.
    pub fn handle(&mut self, event: &InputEvent) -> Option<Dispatch> {
        let command = self.keymap.command_for(event)?;
        Some(dispatch(&mut self.scene, command))
    }

    /// Draws the scene with the configured pens.
    pub fn render(&self, canvas: &mut impl Canvas) {
        render_with(&self.scene, &self.config.pens, canvas);
    }
}
