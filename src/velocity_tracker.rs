//! Pointer velocity estimation from recent touch samples.

use crate::float::Float;
use crate::gesture::TouchEvent;
use crate::vec::Vec2;
use alloc::collections::VecDeque;

/// Samples older than this (relative to the newest one) are ignored.
pub const HORIZON_MS: u64 = 100;
/// Upper bound on retained samples.
pub const MAX_SAMPLES: usize = 20;

/// Estimates pointer velocity with a least-squares line fit over the samples
/// of the last [`HORIZON_MS`] milliseconds.
#[derive(Clone, Debug)]
pub struct VelocityTracker<F: Float> {
    samples: VecDeque<(u64, Vec2<F>)>,
    velocity: Vec2<F>,
}

impl<F: Float> Default for VelocityTracker<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> VelocityTracker<F> {
    pub fn new() -> Self {
        VelocityTracker {
            samples: VecDeque::with_capacity(MAX_SAMPLES),
            velocity: Vec2::zero(),
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.velocity = Vec2::zero();
    }

    pub fn add_movement(&mut self, event: &TouchEvent<F>) {
        self.add_sample(event.time_ms, event.position());
    }

    /// Record a position at `time_ms`. A sample older than the newest one
    /// restarts tracking.
    pub fn add_sample(&mut self, time_ms: u64, position: Vec2<F>) {
        if let Some(&(newest, _)) = self.samples.back() {
            if time_ms < newest {
                self.samples.clear();
            }
        }
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back((time_ms, position));
        while let Some(&(oldest, _)) = self.samples.front() {
            if time_ms - oldest > HORIZON_MS {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn sample_count(&self) -> usize { self.samples.len() }

    /// Recompute the velocity in pixels per `units` milliseconds
    /// (1000 gives pixels per second).
    pub fn compute_current_velocity(&mut self, units: F) {
        self.velocity = self.estimate().scale(units);
    }

    /// Velocity from the last [`compute_current_velocity`](Self::compute_current_velocity).
    pub fn velocity(&self) -> Vec2<F> { self.velocity }

    pub fn x_velocity(&self) -> F { self.velocity.x }

    pub fn y_velocity(&self) -> F { self.velocity.y }

    /// Slope of position over time in pixels per millisecond.
    fn estimate(&self) -> Vec2<F> {
        let n = self.samples.len();
        let newest = match self.samples.back() {
            Some(&(t, _)) if n >= 2 => t,
            _ => return Vec2::zero(),
        };

        let count = F::from_f32(n as f32);
        let time = |t: u64| -F::from_f32((newest - t) as f32);

        let mut mean_t = F::zero();
        let mut mean_p = Vec2::zero();
        for &(t, p) in self.samples.iter() {
            mean_t = mean_t + time(t);
            mean_p = mean_p + p;
        }
        mean_t = mean_t / count;
        mean_p = mean_p.scale(F::one() / count);

        let mut cov = Vec2::zero();
        let mut var = F::zero();
        for &(t, p) in self.samples.iter() {
            let dt = time(t) - mean_t;
            cov = cov + (p - mean_p).scale(dt);
            var = var + dt * dt;
        }

        if var.is_near_zero(F::from_f32(1e-9)) {
            return Vec2::zero();
        }
        cov.scale(F::one() / var)
    }
}
