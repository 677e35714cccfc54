use thiserror::Error;

/// Top-level error type for the polygon scene editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolysceneError {
    #[error(transparent)]
    Figure(#[from] FigureError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors raised while constructing a figure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FigureError {
    #[error("too many vertices: {requested} requested, at most {max} allowed")]
    TooManyVertices { requested: usize, max: usize },
}

/// Errors raised by scene operations.
///
/// Every guarded operation reports these before touching any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("no figures to perform this action on")]
    EmptyScene,

    #[error("scene is locked")]
    SceneLocked,

    #[error("no figure is selected")]
    NoSelection,

    #[error("figure index {index} is out of range for {len} figures")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("scene is full: at most {max} figures allowed")]
    TooManyFigures { max: usize },
}

/// Convenience type alias for results using [`PolysceneError`].
pub type Result<T> = std::result::Result<T, PolysceneError>;
