use crate::modifier::{
    Modifier2,
    Transform2,
};
use vek::*;


/// Primitive 2D draw call, relative to the canvas's current transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawObj2 {
    /// Unit square from <0,0> to <1,1>, filled with the current color.
    Solid,
    /// Line segment between two points.
    Line(Vec2<f32>, Vec2<f32>),
}

/// Immediate-mode render target with a visual state stack and a transform
/// stack.
///
/// Pushes and pops must nest. `StateScope` is the normal way of pairing them.
pub trait Canvas {
    /// Save the current visual state (color, etc).
    fn push_state(&mut self);

    /// Restore the most recently saved visual state.
    fn pop_state(&mut self);

    /// Save the current transform.
    fn push_transform(&mut self);

    /// Restore the most recently saved transform.
    fn pop_transform(&mut self);

    /// Apply a modifier to the top of the relevant stack.
    fn modify(&mut self, modifier: Modifier2);

    /// Draw a primitive under the current transform and visual state.
    fn draw(&mut self, obj: DrawObj2);

    fn translate(&mut self, v: Vec2<f32>) {
        self.modify(Transform2::translate(v).into());
    }

    fn scale(&mut self, v: Vec2<f32>) {
        self.modify(Transform2::scale(v).into());
    }

    fn color(&mut self, c: Rgba<f32>) {
        self.modify(c.into());
    }

    /// Draw a solid rectangle from the local origin with the given size.
    fn draw_solid(&mut self, size: Extent2<f32>) {
        self.push_transform();
        self.scale(Vec2::new(size.w, size.h));
        self.draw(DrawObj2::Solid);
        self.pop_transform();
    }

    fn draw_line(&mut self, from: Vec2<f32>, to: Vec2<f32>) {
        self.draw(DrawObj2::Line(from, to));
    }
}
