use thiserror::Error;

/// Rejected simulation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FluidError {
    #[error("grid size {size} is too small, need at least 3 cells per side")]
    GridTooSmall { size: usize },
    #[error("at least one relaxation sweep is required")]
    NoIterations,
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
}
