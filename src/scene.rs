//! Retained scene description handed to a renderer: background, shapes, lines.

use crate::error::EngineError;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::string::String;
use alloc::vec::Vec as AllocVec;

/// RGBA color with components in [0, 1].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const GREY: Color = Color::rgb(0.5, 0.5, 0.5);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b, a: 1.0 }
    }
}

/// Rectangular area of a texture atlas, in texels.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureRegion {
    /// Asset path of the source image.
    pub source: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Rectangle,
    Sprite(TextureRegion),
}

/// An axis-aligned shape positioned by its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape<F: Float> {
    pub position: Vec2<F>,
    pub size: Vec2<F>,
    pub kind: ShapeKind,
}

impl<F: Float> Shape<F> {
    pub fn rectangle(x: F, y: F, width: F, height: F) -> Self {
        Shape { position: Vec2::new(x, y), size: Vec2::new(width, height), kind: ShapeKind::Rectangle }
    }

    /// Sprite sized like its texture region.
    pub fn sprite(x: F, y: F, region: TextureRegion) -> Self {
        let size = Vec2::new(
            F::from_f32(region.width as f32),
            F::from_f32(region.height as f32),
        );
        Shape { position: Vec2::new(x, y), size, kind: ShapeKind::Sprite(region) }
    }

    pub fn center(&self) -> Vec2<F> {
        self.position + self.size.scale(F::half())
    }
}

/// A straight line segment in scene coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Line<F: Float> {
    pub from: Vec2<F>,
    pub to: Vec2<F>,
}

impl<F: Float> Line<F> {
    pub fn new(x1: F, y1: F, x2: F, y2: F) -> Self {
        Line { from: Vec2::new(x1, y1), to: Vec2::new(x2, y2) }
    }
}

/// Index of a shape attached to a [`Scene`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapeHandle(pub usize);

pub struct Scene<F: Float> {
    pub background: Color,
    shapes: AllocVec<Shape<F>>,
    lines: AllocVec<Line<F>>,
}

impl<F: Float> Scene<F> {
    pub fn new(background: Color) -> Self {
        Scene { background, shapes: AllocVec::new(), lines: AllocVec::new() }
    }

    pub fn attach_shape(&mut self, shape: Shape<F>) -> ShapeHandle {
        let handle = ShapeHandle(self.shapes.len());
        self.shapes.push(shape);
        handle
    }

    pub fn attach_line(&mut self, line: Line<F>) {
        self.lines.push(line);
    }

    pub fn shape(&self, handle: ShapeHandle) -> Result<&Shape<F>, EngineError> {
        let count = self.shapes.len();
        self.shapes.get(handle.0)
            .ok_or(EngineError::ShapeOutOfBounds { index: handle.0, count })
    }

    pub fn shape_mut(&mut self, handle: ShapeHandle) -> Result<&mut Shape<F>, EngineError> {
        let count = self.shapes.len();
        self.shapes.get_mut(handle.0)
            .ok_or(EngineError::ShapeOutOfBounds { index: handle.0, count })
    }

    pub fn shapes(&self) -> &[Shape<F>] { &self.shapes }

    pub fn lines(&self) -> &[Line<F>] { &self.lines }
}

/// Horizontal and vertical lines every `step` units across `[from, to]` on
/// both axes. `step` must be positive and finite.
pub fn grid_lines<F: Float>(from: F, to: F, step: F) -> Result<AllocVec<Line<F>>, EngineError> {
    if !step.is_finite() || step <= F::zero() {
        return Err(EngineError::InvalidGridStep);
    }
    let mut lines = AllocVec::new();
    let mut i = from;
    while i <= to {
        lines.push(Line::new(from, i, to, i));
        lines.push(Line::new(i, from, i, to));
        i = i + step;
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_two_lines_per_step() {
        let lines = grid_lines(-100.0f32, 100.0, 100.0).expect("valid step");
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], Line::new(-100.0, -100.0, 100.0, -100.0));
        assert_eq!(lines[1], Line::new(-100.0, -100.0, -100.0, 100.0));
    }

    #[test]
    fn grid_rejects_non_positive_step() {
        for &step in &[0.0f32, -10.0, f32::NAN, f32::INFINITY] {
            assert_eq!(grid_lines(0.0f32, 10.0, step).err(), Some(EngineError::InvalidGridStep));
        }
    }

    #[test]
    fn unknown_shape_is_an_error() {
        let scene: Scene<f32> = Scene::new(Color::WHITE);
        assert_eq!(
            scene.shape(ShapeHandle(3)).err(),
            Some(EngineError::ShapeOutOfBounds { index: 3, count: 0 }),
        );
    }

    #[test]
    fn sprite_takes_region_size() {
        let region = TextureRegion { source: "gfx/sprite.png".into(), x: 0, y: 0, width: 32, height: 16 };
        let sprite = Shape::sprite(10.0f32, 20.0, region);
        assert_eq!(sprite.size, Vec2::new(32.0, 16.0));
        assert_eq!(sprite.center(), Vec2::new(26.0, 28.0));
    }
}
