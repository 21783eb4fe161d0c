pub mod error;
pub mod math;
pub mod operations;
pub mod points;

pub use error::{PointsError, Result};
pub use math::{Point2, Tolerance};
pub use points::{contains, remove_duplicates};
