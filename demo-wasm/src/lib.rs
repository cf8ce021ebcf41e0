use flingy::{
    grid_lines, AccelerometerData, Camera, Color, ControllerConfig, FlingConfig, FlingController,
    NoOpStepObserver, Scene, SimplePhysics, TouchAction, TouchEvent,
};
use wasm_bindgen::prelude::*;

const GRID_EXTENT: f32 = 10_000.0;
const GRID_STEP: f32 = 100.0;

fn touch_action(code: u8) -> Option<TouchAction> {
    match code {
        0 => Some(TouchAction::Down),
        1 => Some(TouchAction::Move),
        2 => Some(TouchAction::Up),
        3 => Some(TouchAction::Cancel),
        _ => None,
    }
}

// ---- Fling Camera Demo ----

#[wasm_bindgen]
pub struct FlingCameraDemo {
    controller: FlingController<f32>,
    scene: Scene<f32>,
}

#[wasm_bindgen]
impl FlingCameraDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, multi_touch: bool) -> Result<FlingCameraDemo, JsValue> {
        let config = ControllerConfig::new().with_multi_touch(multi_touch);
        let controller = FlingController::for_screen(width, height, FlingConfig::new(), config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut scene = Scene::new(Color::GREY);
        let grid = grid_lines(-GRID_EXTENT, GRID_EXTENT, GRID_STEP)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        for line in grid {
            scene.attach_line(line);
        }
        Ok(FlingCameraDemo { controller, scene })
    }

    /// `action`: 0 = down, 1 = move, 2 = up, 3 = cancel. Unknown codes are ignored.
    pub fn touch(&mut self, pointer: u32, action: u8, x: f32, y: f32, time_ms: f64) -> bool {
        match touch_action(action) {
            Some(action) => {
                let event = TouchEvent::new(pointer, action, x, y, time_ms as u64);
                self.controller.on_touch(&event)
            }
            None => false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.controller.on_update(dt);
    }

    pub fn center_x(&self) -> f32 {
        self.controller.camera().center().x
    }

    pub fn center_y(&self) -> f32 {
        self.controller.camera().center().y
    }

    pub fn zoom(&self) -> f32 {
        self.controller.camera().zoom_factor()
    }

    pub fn is_flinging(&self) -> bool {
        self.controller.camera().is_flinging()
    }

    /// Returns flat [x1, y1, x2, y2, ...] grid segments in scene coordinates
    pub fn lines(&self) -> Vec<f32> {
        let lines = self.scene.lines();
        let mut out = Vec::with_capacity(lines.len() * 4);
        for line in lines {
            out.extend_from_slice(&[line.from.x, line.from.y, line.to.x, line.to.y]);
        }
        out
    }

    /// Returns [r, g, b, a]
    pub fn background(&self) -> Vec<f32> {
        let c = self.scene.background;
        vec![c.r, c.g, c.b, c.a]
    }
}

// ---- Simple Physics Demo ----

#[wasm_bindgen]
pub struct SimplePhysicsDemo {
    physics: SimplePhysics<f32>,
}

#[wasm_bindgen]
impl SimplePhysicsDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SimplePhysicsDemo, JsValue> {
        let physics = SimplePhysics::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SimplePhysicsDemo { physics })
    }

    /// Feed device tilt; x and y become the world gravity in m/s².
    pub fn set_accelerometer(&mut self, x: f32, y: f32) {
        self.physics.on_accelerometer_changed(&AccelerometerData::new(x, y, 0.0));
    }

    pub fn update(&mut self, dt: f32) -> Result<(), JsValue> {
        self.physics
            .on_update(dt, &mut NoOpStepObserver)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns [x, y] of the sprite's top-left corner in pixels
    pub fn sprite_position(&self) -> Vec<f32> {
        match self.physics.sprite_position() {
            Ok(p) => vec![p.x, p.y],
            Err(_) => Vec::new(),
        }
    }

    /// Returns flat [x, y, w, h, ...] for every shape, walls first
    pub fn shapes(&self) -> Vec<f32> {
        let shapes = self.physics.scene().shapes();
        let mut out = Vec::with_capacity(shapes.len() * 4);
        for s in shapes {
            out.extend_from_slice(&[s.position.x, s.position.y, s.size.x, s.size.y]);
        }
        out
    }
}
