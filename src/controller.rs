//! Touch orchestration for the fling camera: pan while dragging, fling on
//! release, pinch to zoom.

use crate::camera::{Camera, ZoomCamera};
use crate::config::{ControllerConfig, FlingConfig};
use crate::error::EngineError;
use crate::float::Float;
use crate::fps::FpsLogger;
use crate::gesture::{PinchZoomDetector, PinchZoomEvent, ScrollDetector, ScrollEvent, TouchAction, TouchEvent};
use crate::vec::Vec2;
use crate::velocity_camera::VelocityCamera;
use crate::velocity_tracker::VelocityTracker;

/// Routes touch events to a [`VelocityCamera`].
///
/// - touch down stops any fling and starts tracking finger velocity;
/// - dragging pans the camera, divided by the zoom factor;
/// - lifting the finger flings with the tracked velocity;
/// - with multi-touch, a two-finger pinch scales the zoom factor and
///   suspends panning and flinging until it ends.
pub struct FlingController<F: Float> {
    camera: VelocityCamera<ZoomCamera<F>>,
    scroll: ScrollDetector<F>,
    pinch: Option<PinchZoomDetector<F>>,
    tracker: VelocityTracker<F>,
    fps: Option<FpsLogger<F>>,
    config: ControllerConfig<F>,
    pinch_start_zoom: F,
    zooming: bool,
    smooth_start: bool,
}

impl<F: Float> FlingController<F> {
    pub fn new(camera: VelocityCamera<ZoomCamera<F>>, config: ControllerConfig<F>) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid controller config");
        let pinch = if config.multi_touch {
            Some(PinchZoomDetector::new())
        } else {
            log::debug!("multi-touch unavailable, pinch zoom disabled");
            None
        };
        FlingController {
            camera,
            scroll: ScrollDetector::new(config.scroll_trigger_distance),
            pinch,
            tracker: VelocityTracker::new(),
            fps: config.fps_log_interval.map(FpsLogger::new),
            config,
            pinch_start_zoom: F::one(),
            zooming: false,
            smooth_start: false,
        }
    }

    /// Controller over a `width` × `height` screen with the camera's top-left
    /// at the origin.
    pub fn for_screen(
        width: F,
        height: F,
        fling: FlingConfig<F>,
        config: ControllerConfig<F>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let camera = ZoomCamera::try_new(F::zero(), F::zero(), width, height)?;
        Ok(Self::new(VelocityCamera::try_new(camera, fling)?, config))
    }

    pub fn camera(&self) -> &VelocityCamera<ZoomCamera<F>> { &self.camera }

    pub fn camera_mut(&mut self) -> &mut VelocityCamera<ZoomCamera<F>> { &mut self.camera }

    pub fn is_zooming(&self) -> bool { self.zooming }

    pub fn supports_pinch_zoom(&self) -> bool { self.pinch.is_some() }

    pub fn config(&self) -> &ControllerConfig<F> { &self.config }

    /// Advance the camera by one frame.
    pub fn on_update(&mut self, seconds_elapsed: F) {
        if let Some(fps) = self.fps.as_mut() {
            fps.on_update(seconds_elapsed);
        }
        self.camera.on_update(seconds_elapsed);
    }

    /// Handle one pointer event. Always consumes the event.
    pub fn on_touch(&mut self, event: &TouchEvent<F>) -> bool {
        if let Some(pinch) = self.pinch.as_mut() {
            if let Some(zoom) = pinch.on_touch(event) {
                self.on_pinch_zoom(zoom);
            }
        }

        match event.action {
            TouchAction::Down => {
                self.camera.stop_fling();
                self.tracker.clear();
                self.smooth_start = self.config.smooth_start;
                self.drag(event);
            }
            TouchAction::Move => self.drag(event),
            TouchAction::Up => {
                self.scroll.release(event.pointer_id);
                if !self.zooming {
                    self.release();
                }
            }
            TouchAction::Cancel => self.scroll.release(event.pointer_id),
        }
        true
    }

    fn drag(&mut self, event: &TouchEvent<F>) {
        if self.zooming {
            return;
        }
        if let Some(scroll) = self.scroll.on_touch(event) {
            self.on_scroll(event, scroll);
        }
    }

    fn on_scroll(&mut self, event: &TouchEvent<F>, scroll: ScrollEvent<F>) {
        self.tracker.add_movement(event);

        let mut distance = Vec2::new(scroll.distance_x, scroll.distance_y);
        if self.smooth_start {
            // Avoid a jump on the first delta after touch-down.
            distance = distance.sign();
            self.smooth_start = false;
        }

        let zoom = self.camera.zoom_factor();
        let center = self.camera.center() - distance.scale(F::one() / zoom);
        self.camera.set_center(center.x, center.y);
    }

    fn release(&mut self) {
        self.tracker.compute_current_velocity(self.config.velocity_units);
        let zoom = self.camera.zoom_factor();
        let velocity = self.tracker.velocity().scale(F::one() / zoom);
        self.camera.fling(velocity.x, velocity.y);
    }

    fn on_pinch_zoom(&mut self, event: PinchZoomEvent<F>) {
        match event {
            PinchZoomEvent::Started => {
                self.pinch_start_zoom = self.camera.zoom_factor();
                self.zooming = true;
                self.scroll.reset();
            }
            PinchZoomEvent::Zoom(factor) => {
                self.camera.set_zoom_factor(self.pinch_start_zoom * factor);
            }
            PinchZoomEvent::Finished(factor) => {
                self.camera.set_zoom_factor(self.pinch_start_zoom * factor);
                self.zooming = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinch_disabled_without_multi_touch() {
        let controller = FlingController::for_screen(
            800.0f32, 480.0, FlingConfig::new(), ControllerConfig::new(),
        ).expect("valid screen");
        assert!(!controller.supports_pinch_zoom());
    }

    #[test]
    fn for_screen_rejects_zero_fps_interval() {
        let config = ControllerConfig::new().with_fps_logging(0.0f32);
        let result = FlingController::for_screen(800.0, 480.0, FlingConfig::new(), config);
        assert_eq!(result.err(), Some(EngineError::InvalidFpsInterval));
    }
}
