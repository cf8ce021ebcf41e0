//! Configuration types for the fling camera, touch controller and physics world.

use crate::error::EngineError;
use crate::float::Float;
use crate::vec::Vec2;

/// Deceleration applied to a fling when no factor is given.
pub const DEFAULT_DECELERATION_FACTOR: f32 = 0.99;
/// Velocity (units per second) at or below which a fling ends.
pub const DEFAULT_MIN_MOVEMENT_SPEED: f32 = 0.01;
/// Distance in surface pixels a finger has to travel before scrolling starts.
pub const DEFAULT_SCROLL_TRIGGER_DISTANCE: f32 = 1.0;
/// Standard gravity in m/s².
pub const GRAVITY_EARTH: f32 = 9.80665;
/// Pixels per physics meter.
pub const PIXEL_TO_METER_RATIO: f32 = 32.0;

/// How fling velocity decays between ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DecayMode {
    /// Multiply velocity by the deceleration factor once per tick,
    /// regardless of the tick length. Displacement still scales with the tick.
    #[default]
    PerTick,
    /// Multiply velocity by `deceleration ^ seconds_elapsed`, so the decay
    /// rate no longer depends on the frame rate.
    Continuous,
}

/// Configuration for a [`VelocityCamera`](crate::VelocityCamera).
///
/// # Builder Pattern
/// ```
/// use flingy::config::{DecayMode, FlingConfig};
///
/// let config: FlingConfig<f32> = FlingConfig::new()
///     .with_deceleration(0.95)
///     .with_min_velocity(0.5, 0.5)
///     .with_decay_mode(DecayMode::Continuous);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlingConfig<F: Float> {
    /// Velocity multiplier in (0, 1]. 1.0 = never slows down. Default: 0.99.
    pub deceleration: F,
    /// Per-axis velocity at or below which the fling stops. Default: 0.01.
    pub min_velocity: Vec2<F>,
    /// Default: [`DecayMode::PerTick`].
    pub decay_mode: DecayMode,
}

impl<F: Float> FlingConfig<F> {
    pub fn new() -> Self {
        FlingConfig {
            deceleration: F::from_f32(DEFAULT_DECELERATION_FACTOR),
            min_velocity: Vec2::splat(F::from_f32(DEFAULT_MIN_MOVEMENT_SPEED)),
            decay_mode: DecayMode::PerTick,
        }
    }

    pub fn with_deceleration(mut self, deceleration: F) -> Self {
        self.deceleration = deceleration;
        self
    }

    pub fn with_min_velocity(mut self, x: F, y: F) -> Self {
        self.min_velocity = Vec2::new(x, y);
        self
    }

    pub fn with_decay_mode(mut self, decay_mode: DecayMode) -> Self {
        self.decay_mode = decay_mode;
        self
    }

    /// Check the deceleration range and threshold signs.
    pub fn validate(&self) -> Result<(), EngineError> {
        let d = self.deceleration;
        if !d.is_finite() || d <= F::zero() || d > F::one() {
            return Err(EngineError::InvalidDeceleration);
        }
        let m = self.min_velocity;
        if !m.x.is_finite() || !m.y.is_finite() || m.x < F::zero() || m.y < F::zero() {
            return Err(EngineError::InvalidMinVelocity);
        }
        Ok(())
    }
}

impl<F: Float> Default for FlingConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a [`FlingController`](crate::FlingController).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControllerConfig<F: Float> {
    /// Surface distance a finger has to move before panning starts. Default: 1.0.
    pub scroll_trigger_distance: F,
    /// Clip the first pan delta after touch-down to ±1 per axis. Default: true.
    pub smooth_start: bool,
    /// Whether the host reports more than one pointer. Without it pinch-zoom
    /// is disabled. Default: false.
    pub multi_touch: bool,
    /// Time base of the fling velocity in milliseconds. 1000 = per second.
    pub velocity_units: F,
    /// Log the frame rate every this many seconds. Default: `None`.
    pub fps_log_interval: Option<F>,
}

impl<F: Float> ControllerConfig<F> {
    pub fn new() -> Self {
        ControllerConfig {
            scroll_trigger_distance: F::from_f32(DEFAULT_SCROLL_TRIGGER_DISTANCE),
            smooth_start: true,
            multi_touch: false,
            velocity_units: F::from_f32(1000.0),
            fps_log_interval: None,
        }
    }

    pub fn with_scroll_trigger_distance(mut self, distance: F) -> Self {
        self.scroll_trigger_distance = distance;
        self
    }

    pub fn with_smooth_start(mut self, smooth_start: bool) -> Self {
        self.smooth_start = smooth_start;
        self
    }

    pub fn with_multi_touch(mut self, multi_touch: bool) -> Self {
        self.multi_touch = multi_touch;
        self
    }

    pub fn with_fps_logging(mut self, interval_secs: F) -> Self {
        self.fps_log_interval = Some(interval_secs);
        self
    }

    /// Reject a non-positive FPS logging interval.
    pub fn validate(&self) -> Result<(), EngineError> {
        match self.fps_log_interval {
            Some(interval) if !interval.is_finite() || interval <= F::zero() => {
                Err(EngineError::InvalidFpsInterval)
            }
            _ => Ok(()),
        }
    }
}

impl<F: Float> Default for ControllerConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a [`PhysicsWorld`](crate::PhysicsWorld).
///
/// ```
/// use flingy::config::WorldConfig;
/// use flingy::Vec2;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_gravity(Vec2::new(0.0, 4.0))
///     .with_iterations(8)
///     .with_sub_steps(2);
/// assert_eq!(config.sub_steps, 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldConfig<F: Float> {
    /// Gravity in m/s², y pointing down. Default: (0, 9.80665).
    pub gravity: Vec2<F>,
    /// Collision passes per sub-step. Default: 4.
    pub iterations: usize,
    /// Sub-steps per frame. Default: 1.
    pub sub_steps: usize,
    /// Velocity damping factor [0, 1]. 1.0 = no damping. Default: 1.0.
    pub damping: F,
    /// Pixels per meter when converting scene shapes. Default: 32.
    pub pixel_to_meter_ratio: F,
}

impl<F: Float> WorldConfig<F> {
    pub fn new() -> Self {
        WorldConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(GRAVITY_EARTH)),
            iterations: 4,
            sub_steps: 1,
            damping: F::one(),
            pixel_to_meter_ratio: F::from_f32(PIXEL_TO_METER_RATIO),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_pixel_to_meter_ratio(mut self, ratio: F) -> Self {
        self.pixel_to_meter_ratio = ratio;
        self
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
