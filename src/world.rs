//! Physics world stepping boxes under gravity and syncing them to the scene.

use crate::body::{Body, BodyType, FixtureDef};
use crate::collision::{box_contact, resolve};
use crate::config::WorldConfig;
use crate::error::EngineError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::scene::{Scene, Shape, ShapeHandle};
use crate::sensor::AccelerometerData;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Index of a body in a [`PhysicsWorld`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub usize);

/// Keeps a scene shape centered on a body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhysicsConnector {
    pub shape: ShapeHandle,
    pub body: BodyHandle,
}

/// Box bodies stepped with Verlet integration and iterative collision passes.
///
/// Bodies live in meters with y pointing down; shapes live in pixels and are
/// converted with [`WorldConfig::pixel_to_meter_ratio`].
pub struct PhysicsWorld<F: Float> {
    bodies: AllocVec<Body<F>>,
    connectors: AllocVec<PhysicsConnector>,
    config: WorldConfig<F>,
}

impl<F: Float> Default for PhysicsWorld<F> {
    fn default() -> Self {
        Self::new(WorldConfig::new())
    }
}

impl<F: Float> PhysicsWorld<F> {
    pub fn new(config: WorldConfig<F>) -> Self {
        PhysicsWorld {
            bodies: AllocVec::new(),
            connectors: AllocVec::new(),
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig<F> { &self.config }

    pub fn gravity(&self) -> Vec2<F> { self.config.gravity }

    pub fn set_gravity(&mut self, gravity: Vec2<F>) {
        self.config.gravity = gravity;
    }

    /// Point gravity along the device's tilt.
    pub fn on_accelerometer_changed(&mut self, data: &AccelerometerData<F>) {
        self.set_gravity(data.planar());
    }

    pub fn add_body(&mut self, body: Body<F>) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len());
        self.bodies.push(body);
        handle
    }

    /// Create a box body covering `shape`, converting pixels to meters.
    pub fn create_box_body(
        &mut self,
        shape: &Shape<F>,
        body_type: BodyType,
        fixture: FixtureDef<F>,
    ) -> Result<BodyHandle, EngineError> {
        let to_meters = F::one() / self.config.pixel_to_meter_ratio;
        let body = Body::new(
            body_type,
            shape.center().scale(to_meters),
            shape.size.scale(F::half() * to_meters),
            fixture,
        )?;
        Ok(self.add_body(body))
    }

    pub fn register_physics_connector(&mut self, connector: PhysicsConnector) -> Result<(), EngineError> {
        self.body(connector.body)?;
        self.connectors.push(connector);
        Ok(())
    }

    pub fn body(&self, handle: BodyHandle) -> Result<&Body<F>, EngineError> {
        let count = self.bodies.len();
        self.bodies.get(handle.0)
            .ok_or(EngineError::BodyOutOfBounds { index: handle.0, count })
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body<F>, EngineError> {
        let count = self.bodies.len();
        self.bodies.get_mut(handle.0)
            .ok_or(EngineError::BodyOutOfBounds { index: handle.0, count })
    }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        let config = self.config;
        let sub_dt = dt / F::from_f32(config.sub_steps as f32);

        for _sub in 0..config.sub_steps {
            for body in self.bodies.iter_mut() {
                body.apply_acceleration(config.gravity);
                body.integrate(sub_dt, config.damping);
            }
            observer.on_integrate();

            for i in 0..config.iterations {
                let contacts = self.solve_contacts();
                observer.on_collision_iteration(i, contacts);
            }
        }

        observer.on_step_complete();
    }

    /// One pass over every body pair; returns the number of contacts resolved.
    fn solve_contacts(&mut self) -> usize {
        let mut contacts = 0;
        for j in 1..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(j);
            let b = &mut tail[0];
            for a in head.iter_mut() {
                if a.is_static() && b.is_static() {
                    continue;
                }
                if let Some(contact) = box_contact(a, b) {
                    resolve(a, b, &contact);
                    contacts += 1;
                }
            }
        }
        contacts
    }

    /// Move every connected shape onto its body.
    pub fn update_scene(&self, scene: &mut Scene<F>) -> Result<(), EngineError> {
        let ratio = self.config.pixel_to_meter_ratio;
        for connector in self.connectors.iter() {
            let center = self.body(connector.body)?.pos.scale(ratio);
            let shape = scene.shape_mut(connector.shape)?;
            shape.position = center - shape.size.scale(F::half());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;

    #[test]
    fn shape_converted_to_meters() {
        let mut world: PhysicsWorld<f32> = PhysicsWorld::default();
        let shape = Shape::rectangle(0.0, 0.0, 64.0, 32.0);
        let handle = world
            .create_box_body(&shape, BodyType::Dynamic, FixtureDef::new(1.0, 0.0, 0.0))
            .expect("valid body");
        let body = world.body(handle).expect("body exists");
        assert_eq!(body.pos, Vec2::new(1.0, 0.5));
        assert_eq!(body.half_extents, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn unknown_body_rejected() {
        let world: PhysicsWorld<f32> = PhysicsWorld::default();
        assert_eq!(
            world.body(BodyHandle(2)).err(),
            Some(EngineError::BodyOutOfBounds { index: 2, count: 0 }),
        );
    }

    #[test]
    fn accelerometer_sets_gravity() {
        let mut world: PhysicsWorld<f32> = PhysicsWorld::default();
        world.on_accelerometer_changed(&AccelerometerData::new(-3.0, 4.0, 9.0));
        assert_eq!(world.gravity(), Vec2::new(-3.0, 4.0));
    }

    #[test]
    fn static_pairs_are_skipped() {
        let mut world: PhysicsWorld<f32> = PhysicsWorld::default();
        let fixture = FixtureDef::new(0.0, 0.5, 0.5);
        let wall = Shape::rectangle(0.0, 0.0, 64.0, 64.0);
        world.create_box_body(&wall, BodyType::Static, fixture).expect("valid body");
        world.create_box_body(&wall, BodyType::Static, fixture).expect("valid body");
        world.step(1.0 / 60.0, &mut NoOpStepObserver);
        assert_eq!(world.body(BodyHandle(0)).expect("body").pos, Vec2::new(1.0, 1.0));
    }
}
