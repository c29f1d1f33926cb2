//! Step observer trait for monitoring the simulation pipeline.

use crate::error::DegenerateGeometry;

/// Hooks called as `SoftBody::step` runs through its stages.
///
/// Implement this for debugging overlays, profiling, or tests that need to
/// see inside a step. Every method defaults to a no-op. Vectors are passed
/// as `(x, y)` so observers stay independent of the scalar type.
pub trait StepObserver {
    /// Called after the wall pre-check with the number of reflected particles.
    fn on_wall_check(&mut self, _reflected: usize) {}

    /// Called after each spring relaxation pass.
    fn on_relaxation_iteration(&mut self, _iteration: usize) {}

    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a drag pin moves the body, with the applied translation.
    fn on_drag(&mut self, _translation: (f64, f64)) {}

    /// Called for each spring/edge hit with the number of corrected endpoints.
    fn on_collision(&mut self, _spring: usize, _corrected: usize) {}

    /// Called whenever a force or collision term is skipped.
    fn on_degenerate(&mut self, _kind: DegenerateGeometry) {}

    /// Called after shape-memory forces have been accumulated.
    fn on_shape_memory(&mut self) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
