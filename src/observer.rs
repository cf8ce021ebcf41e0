//! Step observer trait for monitoring physics world progress.

/// Trait for observing physics world steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after all bodies have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each collision pass with the number of contacts resolved.
    fn on_collision_iteration(&mut self, _iteration: usize, _contacts: usize) {}

    /// Called when a world step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards step progress to the `log` facade at `trace` level.
#[derive(Default)]
pub struct LogStepObserver {
    steps: u64,
}

impl LogStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> u64 { self.steps }
}

impl StepObserver for LogStepObserver {
    fn on_collision_iteration(&mut self, iteration: usize, contacts: usize) {
        if contacts > 0 {
            log::trace!("step {} pass {}: {} contacts", self.steps, iteration, contacts);
        }
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
