//! Inertial "fling" scrolling layered over any [`Camera`].

use crate::camera::{Camera, ZoomCamera};
use crate::config::{DecayMode, FlingConfig};
use crate::error::EngineError;
use crate::float::Float;
use crate::vec::Vec2;

/// Camera decorator adding fling motion that decays to rest.
///
/// The wrapped camera keeps the center and zoom. `VelocityCamera` owns the
/// fling velocity and whether it is being applied. Setting the center through
/// this type always cancels a running fling; the per-tick fling movement is
/// written to the inner camera directly so it does not cancel itself.
///
/// ```
/// use flingy::{Camera, VelocityCamera, ZoomCamera};
///
/// let mut camera = VelocityCamera::new(ZoomCamera::new(0.0f32, 0.0, 200.0, 200.0));
/// camera.fling(50.0, 0.0);
/// camera.on_update(1.0);
/// assert!(camera.center().x < 100.0);
/// ```
#[derive(Clone, Debug)]
pub struct VelocityCamera<C: Camera> {
    inner: C,
    velocity: Vec2<C::Scalar>,
    flinging: bool,
    config: FlingConfig<C::Scalar>,
}

impl<C: Camera> VelocityCamera<C> {
    /// Wrap `inner` with the default deceleration (0.99) and thresholds (0.01).
    pub fn new(inner: C) -> Self {
        Self::with_config(inner, FlingConfig::new())
    }

    /// Wrap `inner` with the given deceleration and default thresholds.
    pub fn with_deceleration(inner: C, deceleration: C::Scalar) -> Self {
        Self::with_config(inner, FlingConfig::new().with_deceleration(deceleration))
    }

    pub fn with_config(inner: C, config: FlingConfig<C::Scalar>) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid fling config");
        VelocityCamera {
            inner,
            velocity: Vec2::zero(),
            flinging: false,
            config,
        }
    }

    /// Like [`VelocityCamera::with_config`], rejecting invalid configuration.
    pub fn try_new(inner: C, config: FlingConfig<C::Scalar>) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::with_config(inner, config))
    }

    /// Start a fling with the given velocity in scene units per second.
    ///
    /// Overwrites any previous velocity. Callers divide gesture velocity by
    /// the zoom factor beforehand.
    pub fn fling(&mut self, velocity_x: C::Scalar, velocity_y: C::Scalar) {
        self.velocity = Vec2::new(velocity_x, velocity_y);
        self.flinging = true;
        log::debug!("fling started at ({}, {})", velocity_x, velocity_y);
    }

    /// Stop applying the fling. The stored velocity is kept until the next
    /// [`fling`](Self::fling) overwrites it.
    pub fn stop_fling(&mut self) {
        if self.flinging {
            log::debug!("fling stopped");
        }
        self.flinging = false;
    }

    pub fn is_flinging(&self) -> bool { self.flinging }

    /// Stored fling velocity. Meaningful only while [`is_flinging`](Self::is_flinging).
    pub fn velocity(&self) -> Vec2<C::Scalar> { self.velocity }

    pub fn config(&self) -> &FlingConfig<C::Scalar> { &self.config }

    pub fn inner(&self) -> &C { &self.inner }

    /// Mutable access to the wrapped camera. Center changes made here do not
    /// cancel a running fling.
    pub fn inner_mut(&mut self) -> &mut C { &mut self.inner }

    fn decay(&mut self, seconds_elapsed: C::Scalar) {
        let factor = match self.config.decay_mode {
            DecayMode::PerTick => self.config.deceleration,
            DecayMode::Continuous => self.config.deceleration.powf(seconds_elapsed),
        };
        self.velocity = self.velocity.scale(factor);
    }
}

impl<C: Camera> Camera for VelocityCamera<C> {
    type Scalar = C::Scalar;

    fn center(&self) -> Vec2<C::Scalar> { self.inner.center() }

    fn set_center(&mut self, x: C::Scalar, y: C::Scalar) {
        self.flinging = false;
        self.inner.set_center(x, y);
    }

    fn zoom_factor(&self) -> C::Scalar { self.inner.zoom_factor() }

    fn set_zoom_factor(&mut self, zoom: C::Scalar) {
        self.inner.set_zoom_factor(zoom);
    }

    fn on_update(&mut self, seconds_elapsed: C::Scalar) {
        self.inner.on_update(seconds_elapsed);

        if !self.flinging || self.velocity.is_zero() {
            return;
        }

        self.decay(seconds_elapsed);
        let movement = self.velocity.scale(seconds_elapsed);

        // The final movement is still applied on the tick that stops the fling.
        let speed = self.velocity.abs();
        let min = self.config.min_velocity;
        if speed.x <= min.x && speed.y <= min.y {
            self.flinging = false;
            self.velocity = Vec2::zero();
            log::debug!("fling settled");
        }

        let center = self.inner.center() - movement;
        self.inner.set_center(center.x, center.y);
    }
}

impl<F: Float> VelocityCamera<ZoomCamera<F>> {
    /// Zoom camera over `width` × `height` starting at (`x`, `y`), with fling.
    pub fn zoom_camera(x: F, y: F, width: F, height: F, deceleration: F) -> Self {
        Self::with_deceleration(ZoomCamera::new(x, y, width, height), deceleration)
    }
}
