use thiserror::Error;

/// Error type for angle arithmetic.
///
/// Everything except division is total, so there is exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArcsetError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience type alias for results using [`ArcsetError`].
pub type Result<T> = std::result::Result<T, ArcsetError>;
