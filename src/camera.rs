//! Base camera capability: a viewport center plus a zoom factor.

use crate::error::EngineError;
use crate::float::Float;
use crate::vec::Vec2;

/// Minimal camera interface consumed by gesture handlers and decorators.
///
/// Decorators such as [`VelocityCamera`](crate::VelocityCamera) wrap another
/// `Camera` and intercept the calls they care about.
pub trait Camera {
    type Scalar: Float;

    /// Current viewport center in scene coordinates.
    fn center(&self) -> Vec2<Self::Scalar>;

    /// Move the viewport center.
    fn set_center(&mut self, x: Self::Scalar, y: Self::Scalar);

    /// Current zoom factor. Always positive.
    fn zoom_factor(&self) -> Self::Scalar;

    fn set_zoom_factor(&mut self, zoom: Self::Scalar);

    /// Per-frame bookkeeping. Default: nothing.
    fn on_update(&mut self, _seconds_elapsed: Self::Scalar) {}
}

/// A pan-and-zoom camera over a fixed-size viewport.
///
/// A zoom factor above one magnifies the scene, so the visible area shrinks.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomCamera<F: Float> {
    center: Vec2<F>,
    viewport: Vec2<F>,
    zoom: F,
}

impl<F: Float> ZoomCamera<F> {
    /// Camera whose visible rectangle starts at (`x`, `y`) and spans
    /// `width` × `height` at zoom factor one.
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        debug_assert!(width > F::zero() && height > F::zero(),
            "viewport size must be positive");
        let viewport = Vec2::new(width, height);
        ZoomCamera {
            center: Vec2::new(x, y) + viewport.scale(F::half()),
            viewport,
            zoom: F::one(),
        }
    }

    /// Like [`ZoomCamera::new`], rejecting empty or non-finite viewports.
    pub fn try_new(x: F, y: F, width: F, height: F) -> Result<Self, EngineError> {
        if !width.is_finite() || !height.is_finite() || width <= F::zero() || height <= F::zero() {
            return Err(EngineError::InvalidViewport);
        }
        Ok(Self::new(x, y, width, height))
    }

    pub fn try_set_zoom_factor(&mut self, zoom: F) -> Result<(), EngineError> {
        if !zoom.is_finite() || zoom <= F::zero() {
            return Err(EngineError::InvalidZoomFactor);
        }
        self.zoom = zoom;
        Ok(())
    }

    /// Visible scene width at the current zoom.
    pub fn width(&self) -> F { self.viewport.x / self.zoom }

    /// Visible scene height at the current zoom.
    pub fn height(&self) -> F { self.viewport.y / self.zoom }

    pub fn x_min(&self) -> F { self.center.x - self.width() * F::half() }
    pub fn x_max(&self) -> F { self.center.x + self.width() * F::half() }
    pub fn y_min(&self) -> F { self.center.y - self.height() * F::half() }
    pub fn y_max(&self) -> F { self.center.y + self.height() * F::half() }

    /// Convert a surface (screen) position into scene coordinates.
    pub fn surface_to_scene(&self, surface: Vec2<F>) -> Vec2<F> {
        let relative = Vec2::new(surface.x / self.viewport.x, surface.y / self.viewport.y);
        Vec2::new(
            self.x_min() + relative.x * self.width(),
            self.y_min() + relative.y * self.height(),
        )
    }

    /// Convert a scene position into surface (screen) coordinates.
    pub fn scene_to_surface(&self, scene: Vec2<F>) -> Vec2<F> {
        Vec2::new(
            (scene.x - self.x_min()) * self.zoom,
            (scene.y - self.y_min()) * self.zoom,
        )
    }
}

impl<F: Float> Camera for ZoomCamera<F> {
    type Scalar = F;

    fn center(&self) -> Vec2<F> { self.center }

    fn set_center(&mut self, x: F, y: F) {
        self.center = Vec2::new(x, y);
    }

    fn zoom_factor(&self) -> F { self.zoom }

    fn set_zoom_factor(&mut self, zoom: F) {
        debug_assert!(zoom > F::zero(), "zoom factor must be positive");
        self.zoom = zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_middle_of_viewport() {
        let camera = ZoomCamera::new(0.0f32, 0.0, 800.0, 480.0);
        assert_eq!(camera.center(), Vec2::new(400.0, 240.0));
        assert_eq!(camera.zoom_factor(), 1.0);
    }

    #[test]
    fn zoom_shrinks_visible_area() {
        let mut camera = ZoomCamera::new(0.0f32, 0.0, 800.0, 480.0);
        camera.set_zoom_factor(2.0);
        assert!((camera.width() - 400.0).abs() < 1e-6);
        assert!((camera.x_min() - 200.0).abs() < 1e-6);
        assert!((camera.y_max() - 360.0).abs() < 1e-6);
    }

    #[test]
    fn surface_round_trips_through_scene() {
        let mut camera = ZoomCamera::new(0.0f32, 0.0, 800.0, 480.0);
        camera.set_center(1000.0, -50.0);
        camera.set_zoom_factor(0.5);
        let surface = Vec2::new(123.0, 456.0);
        let back = camera.scene_to_surface(camera.surface_to_scene(surface));
        assert!((back.x - surface.x).abs() < 1e-3);
        assert!((back.y - surface.y).abs() < 1e-3);
    }

    #[test]
    fn surface_center_maps_to_camera_center() {
        let mut camera = ZoomCamera::new(0.0f64, 0.0, 800.0, 480.0);
        camera.set_zoom_factor(3.0);
        let scene = camera.surface_to_scene(Vec2::new(400.0, 240.0));
        assert!((scene.x - 400.0).abs() < 1e-9);
        assert!((scene.y - 240.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_zoom_rejected() {
        let mut camera = ZoomCamera::new(0.0f32, 0.0, 10.0, 10.0);
        assert_eq!(camera.try_set_zoom_factor(0.0), Err(EngineError::InvalidZoomFactor));
        assert_eq!(camera.try_set_zoom_factor(-2.0), Err(EngineError::InvalidZoomFactor));
        assert_eq!(camera.zoom_factor(), 1.0);
    }

    #[test]
    fn empty_viewport_rejected() {
        assert_eq!(
            ZoomCamera::try_new(0.0f32, 0.0, 0.0, 10.0),
            Err(EngineError::InvalidViewport),
        );
    }
}
