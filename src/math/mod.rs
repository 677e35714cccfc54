pub mod polygon_2d;

/// Integer point in canvas pixel space (y grows downwards).
pub type Point = nalgebra::Point2<i32>;

/// 2D vector type used for intermediate floating-point math.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation type.
pub type Rotation2 = nalgebra::Rotation2<f64>;
