//! Inertial camera controls and a tiny box-physics sandbox for touch games.
//!
//! `flingy` provides a camera that keeps gliding after a swipe and slows down
//! to rest, the touch plumbing that drives it (panning, flinging, pinch-zoom),
//! and a small physics world of falling boxes steered by an accelerometer.
//!
//! # Features
//!
//! - **Fling camera**: `VelocityCamera` decorates any `Camera` with decaying inertial motion
//! - **Gestures**: scroll and pinch-zoom detectors plus a least-squares velocity tracker
//! - **Touch orchestration**: `FlingController` wires gestures to the camera
//! - **Physics sandbox**: Verlet-integrated boxes, wall collisions, tilt gravity
//! - **Observable**: monitor physics steps via the `StepObserver` trait, frame rate via `FpsLogger`
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod camera;
pub mod velocity_camera;
pub mod gesture;
pub mod velocity_tracker;
pub mod controller;
pub mod fps;
pub mod scene;
pub mod body;
pub mod collision;
pub mod world;
pub mod sensor;
pub mod simple_physics;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use camera::{Camera, ZoomCamera};
pub use velocity_camera::VelocityCamera;
pub use gesture::{PinchZoomDetector, PinchZoomEvent, ScrollDetector, ScrollEvent, TouchAction, TouchEvent};
pub use velocity_tracker::VelocityTracker;
pub use controller::FlingController;
pub use fps::{FpsLogger, FpsReport};
pub use scene::{Color, Line, Scene, Shape, ShapeHandle, ShapeKind, TextureRegion, grid_lines};
pub use body::{Body, BodyType, FixtureDef};
pub use world::{BodyHandle, PhysicsConnector, PhysicsWorld};
pub use sensor::AccelerometerData;
pub use simple_physics::SimplePhysics;
pub use config::{ControllerConfig, DecayMode, FlingConfig, WorldConfig};
pub use observer::{StepObserver, NoOpStepObserver, LogStepObserver};
pub use error::EngineError;
