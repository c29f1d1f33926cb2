//! Error types for construction and per-step geometry.

use thiserror::Error;

/// Invalid construction parameters. Fatal: nothing is simulated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Mass must be positive and finite.
    #[error("particle mass must be positive and finite")]
    InvalidMass,
    /// Grid must be at least 2x2.
    #[error("grid resolution {n} is too small (need at least 2)")]
    InvalidGridResolution { n: usize },
    /// Body width and height must be positive.
    #[error("body dimensions must be positive")]
    InvalidDimensions,
    /// Screen bounds must be positive.
    #[error("screen bounds must be positive")]
    InvalidBounds,
    /// Damping must be in (0, 1].
    #[error("damping must be in (0, 1]")]
    InvalidDamping,
    /// Collision correction factor must be in (0, 1).
    #[error("correction factor must be in (0, 1)")]
    InvalidCorrectionFactor,
    /// Stiffness, gains, and friction must be non-negative and finite.
    #[error("{name} must be non-negative and finite")]
    NegativeParameter { name: &'static str },
    /// Relaxation needs at least one pass.
    #[error("relaxation iterations must be at least 1")]
    InvalidIterations,
    /// Obstacle polygons need three or more vertices.
    #[error("polygon has {vertices} vertices (need at least 3)")]
    DegeneratePolygon { vertices: usize },
}

/// A force or collision term that cannot be computed this step.
///
/// Recovered locally: the affected term is skipped and the step continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DegenerateGeometry {
    /// Both spring endpoints coincide, so the spring has no direction.
    #[error("spring between particles {a} and {b} has zero length")]
    ZeroLengthSpring { a: usize, b: usize },
    /// The spring segment and obstacle edge are parallel.
    #[error("segment and edge are parallel")]
    ParallelLines,
    /// Obstacle edge with coincident vertices has no normal.
    #[error("obstacle edge has zero length")]
    ZeroLengthEdge,
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("degenerate geometry: {0}")]
    Degenerate(#[from] DegenerateGeometry),
}

/// Convenience alias for `Result<T, PhysicsError>`.
pub type Result<T> = core::result::Result<T, PhysicsError>;
