//! Box-shaped rigid bodies integrated with Verlet, without rotation.

use crate::error::EngineError;
use crate::float::Float;
use crate::vec::Vec2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BodyType {
    /// Never moves; infinite mass.
    Static,
    /// Moved by gravity, forces and collisions.
    Dynamic,
}

/// Material of a body's collision box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixtureDef<F: Float> {
    /// Mass per square meter. Zero gives an immovable body.
    pub density: F,
    /// Restitution in [0, 1]. 0 = no bounce.
    pub elasticity: F,
    /// Tangential damping on contact in [0, 1].
    pub friction: F,
}

impl<F: Float> FixtureDef<F> {
    pub fn new(density: F, elasticity: F, friction: F) -> Self {
        FixtureDef { density, elasticity, friction }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.density.is_finite() || self.density < F::zero() {
            return Err(EngineError::InvalidDensity);
        }
        Ok(())
    }
}

/// An axis-aligned box in meters. Velocity is implicit in
/// `pos - prev_pos`, as in position-based dynamics.
#[derive(Clone, Debug)]
pub struct Body<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub half_extents: Vec2<F>,
    pub body_type: BodyType,
    pub fixture: FixtureDef<F>,
    pub mass: F,
    pub inv_mass: F,
}

impl<F: Float> Body<F> {
    /// Box centered at `center` with the given half extents.
    pub fn new(
        body_type: BodyType,
        center: Vec2<F>,
        half_extents: Vec2<F>,
        fixture: FixtureDef<F>,
    ) -> Result<Self, EngineError> {
        if !(half_extents.x > F::zero()) || !(half_extents.y > F::zero()) {
            return Err(EngineError::InvalidBodySize);
        }
        fixture.validate()?;

        let area = half_extents.x * half_extents.y * F::from_f32(4.0);
        let mass = match body_type {
            BodyType::Static => F::zero(),
            BodyType::Dynamic => fixture.density * area,
        };
        let inv_mass = if mass.is_near_zero(F::from_f32(1e-10)) {
            F::zero()
        } else {
            F::one() / mass
        };
        Ok(Body {
            pos: center,
            prev_pos: center,
            acceleration: Vec2::zero(),
            half_extents,
            body_type,
            fixture,
            mass,
            inv_mass,
        })
    }

    pub fn is_static(&self) -> bool {
        self.inv_mass == F::zero()
    }

    pub fn apply_acceleration(&mut self, accel: Vec2<F>) {
        if !self.is_static() {
            self.acceleration = self.acceleration + accel;
        }
    }

    pub fn integrate(&mut self, dt: F, damping: F) {
        if self.is_static() {
            return;
        }
        let displacement = (self.pos - self.prev_pos).scale(damping);
        let new_pos = self.pos + displacement + self.acceleration.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
        self.acceleration = Vec2::zero();
    }

    /// Displacement over the last step.
    pub fn displacement(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn set_displacement(&mut self, displacement: Vec2<F>) {
        self.prev_pos = self.pos - displacement;
    }

    pub fn min(&self) -> Vec2<F> { self.pos - self.half_extents }

    pub fn max(&self) -> Vec2<F> { self.pos + self.half_extents }
}
