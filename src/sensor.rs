//! Accelerometer readings from the host device.

use crate::float::Float;
use crate::vec::Vec2;

/// One accelerometer sample in m/s², in screen orientation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AccelerometerData<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> AccelerometerData<F> {
    pub fn new(x: F, y: F, z: F) -> Self {
        AccelerometerData { x, y, z }
    }

    /// The reading projected onto the screen plane, used directly as gravity.
    pub fn planar(&self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }
}
