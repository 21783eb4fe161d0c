use thiserror::Error;

/// Error type for point-set operations.
#[derive(Debug, Error)]
pub enum PointsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for results using [`PointsError`].
pub type Result<T> = std::result::Result<T, PointsError>;
