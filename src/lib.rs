pub mod config;
pub mod error;
pub mod figure;
pub mod input;
pub mod math;
pub mod render;
pub mod scene;

pub use config::EditorConfig;
pub use error::{PolysceneError, Result};
pub use figure::Figure;
pub use input::{Editor, InputEvent, Key};
pub use math::Point;
pub use scene::Scene;
