//! Touch events and the scroll and pinch-zoom detectors fed by them.
//!
//! Detectors are plain state machines: feed every [`TouchEvent`] in, get an
//! optional gesture event out. Each pointer reports its own events, so a
//! second finger touching down arrives as a separate `Down`.

use crate::float::Float;
use crate::vec::Vec2;

/// Spacing in surface pixels two pointers need before pinch-zoom engages.
pub const PINCH_TRIGGER_DISTANCE: f32 = 10.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer's touch sample in surface coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchEvent<F: Float> {
    pub pointer_id: u32,
    pub action: TouchAction,
    pub x: F,
    pub y: F,
    /// Event time in milliseconds on a monotonic clock.
    pub time_ms: u64,
}

impl<F: Float> TouchEvent<F> {
    pub fn new(pointer_id: u32, action: TouchAction, x: F, y: F, time_ms: u64) -> Self {
        TouchEvent { pointer_id, action, x, y, time_ms }
    }

    pub fn down(x: F, y: F, time_ms: u64) -> Self {
        Self::new(0, TouchAction::Down, x, y, time_ms)
    }

    pub fn moved(x: F, y: F, time_ms: u64) -> Self {
        Self::new(0, TouchAction::Move, x, y, time_ms)
    }

    pub fn up(x: F, y: F, time_ms: u64) -> Self {
        Self::new(0, TouchAction::Up, x, y, time_ms)
    }

    pub fn position(&self) -> Vec2<F> { Vec2::new(self.x, self.y) }
}

/// Distance the finger moved since the last reported scroll.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollEvent<F: Float> {
    pub distance_x: F,
    pub distance_y: F,
}

/// Turns drags into scroll distances once the finger has moved far enough.
///
/// Only the pointer that touched down first is followed; other pointers are
/// ignored until it lifts.
#[derive(Clone, Debug)]
pub struct ScrollDetector<F: Float> {
    trigger_distance: F,
    pointer: Option<u32>,
    last: Vec2<F>,
    triggered: bool,
}

impl<F: Float> ScrollDetector<F> {
    pub fn new(trigger_distance: F) -> Self {
        ScrollDetector {
            trigger_distance,
            pointer: None,
            last: Vec2::zero(),
            triggered: false,
        }
    }

    pub fn is_scrolling(&self) -> bool { self.triggered }

    pub fn trigger_distance(&self) -> F { self.trigger_distance }

    /// Stop following `pointer_id` without reporting a final distance.
    pub fn release(&mut self, pointer_id: u32) {
        if self.pointer == Some(pointer_id) {
            self.pointer = None;
        }
    }

    /// Forget the followed pointer; scrolling resumes with the next `Down`.
    pub fn reset(&mut self) {
        self.pointer = None;
        self.triggered = false;
    }

    pub fn on_touch(&mut self, event: &TouchEvent<F>) -> Option<ScrollEvent<F>> {
        let position = event.position();
        match event.action {
            TouchAction::Down => {
                if self.pointer.is_some_and(|id| id != event.pointer_id) {
                    return None;
                }
                self.pointer = Some(event.pointer_id);
                self.last = position;
                self.triggered = false;
                None
            }
            TouchAction::Move | TouchAction::Up | TouchAction::Cancel => {
                if self.pointer != Some(event.pointer_id) {
                    return None;
                }
                if event.action != TouchAction::Move {
                    self.pointer = None;
                }
                let distance = position - self.last;
                let trigger = self.trigger_distance;
                if self.triggered || distance.x.abs() > trigger || distance.y.abs() > trigger {
                    self.triggered = true;
                    self.last = position;
                    Some(ScrollEvent { distance_x: distance.x, distance_y: distance.y })
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PinchZoomEvent<F: Float> {
    Started,
    /// Current pointer spacing relative to the spacing when the pinch started.
    Zoom(F),
    Finished(F),
}

/// Detects two-finger pinch gestures.
#[derive(Clone, Debug)]
pub struct PinchZoomDetector<F: Float> {
    pointers: [Option<(u32, Vec2<F>)>; 2],
    initial_distance: F,
    current_distance: F,
    pinching: bool,
}

impl<F: Float> Default for PinchZoomDetector<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> PinchZoomDetector<F> {
    pub fn new() -> Self {
        PinchZoomDetector {
            pointers: [None, None],
            initial_distance: F::zero(),
            current_distance: F::zero(),
            pinching: false,
        }
    }

    pub fn is_pinching(&self) -> bool { self.pinching }

    /// `current / initial` spacing, or one before any pinch started.
    pub fn zoom_factor(&self) -> F {
        if self.initial_distance.is_near_zero(F::from_f32(1e-6)) {
            return F::one();
        }
        self.current_distance / self.initial_distance
    }

    pub fn on_touch(&mut self, event: &TouchEvent<F>) -> Option<PinchZoomEvent<F>> {
        let trigger = F::from_f32(PINCH_TRIGGER_DISTANCE);
        match event.action {
            TouchAction::Down => {
                self.track(event.pointer_id, event.position());
                if self.pinching {
                    return None;
                }
                let spacing = self.spacing()?;
                if spacing > trigger {
                    self.initial_distance = spacing;
                    self.current_distance = spacing;
                    self.pinching = true;
                    log::debug!("pinch zoom started at spacing {}", spacing);
                    return Some(PinchZoomEvent::Started);
                }
                None
            }
            TouchAction::Move => {
                if !self.update(event.pointer_id, event.position()) || !self.pinching {
                    return None;
                }
                let spacing = self.spacing()?;
                if spacing > trigger {
                    self.current_distance = spacing;
                    return Some(PinchZoomEvent::Zoom(self.zoom_factor()));
                }
                None
            }
            TouchAction::Up | TouchAction::Cancel => {
                if !self.release(event.pointer_id) || !self.pinching {
                    return None;
                }
                self.pinching = false;
                let factor = self.zoom_factor();
                log::debug!("pinch zoom finished with factor {}", factor);
                Some(PinchZoomEvent::Finished(factor))
            }
        }
    }

    fn track(&mut self, pointer_id: u32, position: Vec2<F>) {
        if self.update(pointer_id, position) {
            return;
        }
        if let Some(slot) = self.pointers.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some((pointer_id, position));
        }
    }

    fn update(&mut self, pointer_id: u32, position: Vec2<F>) -> bool {
        for slot in self.pointers.iter_mut().flatten() {
            if slot.0 == pointer_id {
                slot.1 = position;
                return true;
            }
        }
        false
    }

    fn release(&mut self, pointer_id: u32) -> bool {
        for slot in self.pointers.iter_mut() {
            if matches!(slot, Some((id, _)) if *id == pointer_id) {
                *slot = None;
                return true;
            }
        }
        false
    }

    fn spacing(&self) -> Option<F> {
        match self.pointers {
            [Some((_, a)), Some((_, b))] => Some(a.distance(b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_waits_for_trigger_distance() {
        let mut detector = ScrollDetector::new(5.0f32);
        assert_eq!(detector.on_touch(&TouchEvent::down(0.0, 0.0, 0)), None);
        assert_eq!(detector.on_touch(&TouchEvent::moved(3.0, 0.0, 16)), None);
        let scroll = detector.on_touch(&TouchEvent::moved(6.0, 1.0, 32));
        assert_eq!(scroll, Some(ScrollEvent { distance_x: 6.0, distance_y: 1.0 }));
        assert!(detector.is_scrolling());
    }

    #[test]
    fn scroll_reports_every_move_once_triggered() {
        let mut detector = ScrollDetector::new(1.0f32);
        detector.on_touch(&TouchEvent::down(10.0, 10.0, 0));
        detector.on_touch(&TouchEvent::moved(20.0, 10.0, 10));
        let small = detector.on_touch(&TouchEvent::moved(20.5, 10.0, 20));
        assert_eq!(small, Some(ScrollEvent { distance_x: 0.5, distance_y: 0.0 }));
    }

    #[test]
    fn down_resets_trigger() {
        let mut detector = ScrollDetector::new(1.0f32);
        detector.on_touch(&TouchEvent::down(0.0, 0.0, 0));
        detector.on_touch(&TouchEvent::moved(50.0, 0.0, 10));
        detector.on_touch(&TouchEvent::down(0.0, 0.0, 100));
        assert!(!detector.is_scrolling());
    }

    #[test]
    fn second_pointer_is_ignored() {
        let mut detector = ScrollDetector::new(1.0f32);
        detector.on_touch(&TouchEvent::down(0.0, 0.0, 0));
        detector.on_touch(&TouchEvent::new(1, TouchAction::Down, 300.0, 300.0, 5));
        assert_eq!(detector.on_touch(&TouchEvent::new(1, TouchAction::Move, 350.0, 300.0, 10)), None);
        let scroll = detector.on_touch(&TouchEvent::moved(4.0, 0.0, 15));
        assert_eq!(scroll, Some(ScrollEvent { distance_x: 4.0, distance_y: 0.0 }));
    }

    #[test]
    fn released_pointer_stops_reporting() {
        let mut detector = ScrollDetector::new(1.0f32);
        detector.on_touch(&TouchEvent::down(0.0, 0.0, 0));
        detector.release(0);
        assert_eq!(detector.on_touch(&TouchEvent::moved(40.0, 0.0, 10)), None);
    }

    #[test]
    fn single_pointer_never_pinches() {
        let mut detector = PinchZoomDetector::<f32>::new();
        assert_eq!(detector.on_touch(&TouchEvent::down(0.0, 0.0, 0)), None);
        assert_eq!(detector.on_touch(&TouchEvent::moved(100.0, 0.0, 10)), None);
        assert!(!detector.is_pinching());
    }

    #[test]
    fn close_pointers_do_not_start_pinch() {
        let mut detector = PinchZoomDetector::<f32>::new();
        detector.on_touch(&TouchEvent::new(0, TouchAction::Down, 0.0, 0.0, 0));
        let event = detector.on_touch(&TouchEvent::new(1, TouchAction::Down, 3.0, 4.0, 5));
        assert_eq!(event, None);
    }
}
