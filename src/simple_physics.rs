//! Tilt-controlled box: a sprite falling inside four walls, with gravity
//! following the accelerometer.

use crate::body::{BodyType, FixtureDef};
use crate::config::WorldConfig;
use crate::error::EngineError;
use crate::float::Float;
use crate::fps::FpsLogger;
use crate::observer::StepObserver;
use crate::scene::{Color, Scene, Shape, ShapeHandle, TextureRegion};
use crate::sensor::AccelerometerData;
use crate::vec::Vec2;
use crate::world::{BodyHandle, PhysicsConnector, PhysicsWorld};
use alloc::string::String;

pub const CAMERA_WIDTH: f32 = 800.0;
pub const CAMERA_HEIGHT: f32 = 480.0;
pub const WALL_THICKNESS: f32 = 2.0;
pub const SPRITE_SIZE: u32 = 32;
pub const SPRITE_ASSET: &str = "gfx/sprite.png";

/// The physics demo's scene and world, wired together.
pub struct SimplePhysics<F: Float> {
    scene: Scene<F>,
    world: PhysicsWorld<F>,
    sprite: ShapeHandle,
    body: BodyHandle,
    fps: FpsLogger<F>,
}

impl<F: Float> SimplePhysics<F> {
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(WorldConfig::new())
    }

    pub fn with_config(config: WorldConfig<F>) -> Result<Self, EngineError> {
        let mut scene = Scene::new(Color::WHITE);
        let mut world = PhysicsWorld::new(config);

        let width = F::from_f32(CAMERA_WIDTH);
        let height = F::from_f32(CAMERA_HEIGHT);
        let thickness = F::from_f32(WALL_THICKNESS);
        let walls = [
            Shape::rectangle(F::zero(), height - thickness, width, thickness),
            Shape::rectangle(F::zero(), F::zero(), width, thickness),
            Shape::rectangle(F::zero(), F::zero(), thickness, height),
            Shape::rectangle(width - thickness, F::zero(), thickness, height),
        ];
        let wall_fixture = FixtureDef::new(F::zero(), F::half(), F::half());
        for wall in walls {
            world.create_box_body(&wall, BodyType::Static, wall_fixture)?;
            scene.attach_shape(wall);
        }

        let region = TextureRegion {
            source: String::from(SPRITE_ASSET),
            x: 0,
            y: 0,
            width: SPRITE_SIZE,
            height: SPRITE_SIZE,
        };
        let sprite = Shape::sprite(width * F::half(), height * F::half(), region);
        let body = world.create_box_body(
            &sprite,
            BodyType::Dynamic,
            FixtureDef::new(F::one(), F::half(), F::half()),
        )?;
        let sprite = scene.attach_shape(sprite);
        world.register_physics_connector(PhysicsConnector { shape: sprite, body })?;

        Ok(SimplePhysics {
            scene,
            world,
            sprite,
            body,
            fps: FpsLogger::default(),
        })
    }

    /// Step the world and move the sprite onto its body.
    pub fn on_update<O: StepObserver>(&mut self, seconds_elapsed: F, observer: &mut O) -> Result<(), EngineError> {
        self.fps.on_update(seconds_elapsed);
        self.world.step(seconds_elapsed, observer);
        self.world.update_scene(&mut self.scene)
    }

    pub fn on_accelerometer_changed(&mut self, data: &AccelerometerData<F>) {
        self.world.on_accelerometer_changed(data);
    }

    /// Top-left corner of the sprite in pixels.
    pub fn sprite_position(&self) -> Result<Vec2<F>, EngineError> {
        Ok(self.scene.shape(self.sprite)?.position)
    }

    pub fn body(&self) -> BodyHandle { self.body }

    pub fn scene(&self) -> &Scene<F> { &self.scene }

    pub fn world(&self) -> &PhysicsWorld<F> { &self.world }

    pub fn world_mut(&mut self) -> &mut PhysicsWorld<F> { &mut self.world }
}
