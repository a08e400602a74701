//! Render-only collaborators of a container.

use graphics::Canvas;
use anyhow::Result;
use vek::*;


/// Something a container draws over its children every frame. Takes no part
/// in hit-testing, event dispatch, or the parent/child relationship.
pub trait GuiDrawable {
    /// `mouse_pos` is in the containing component's local space.
    fn draw(
        &mut self,
        canvas: &mut dyn Canvas,
        mouse_pos: Vec2<f32>,
        partial_ticks: f32,
    ) -> Result<()>;
}

/// `GuiDrawable` backed by a closure. See `drawable_fn`.
pub struct FnDrawable<F>(pub F);

/// Make a `GuiDrawable` out of a closure.
pub fn drawable_fn<F>(f: F) -> FnDrawable<F>
where
    F: FnMut(&mut dyn Canvas, Vec2<f32>, f32) -> Result<()>,
{
    FnDrawable(f)
}

impl<F> GuiDrawable for FnDrawable<F>
where
    F: FnMut(&mut dyn Canvas, Vec2<f32>, f32) -> Result<()>,
{
    fn draw(
        &mut self,
        canvas: &mut dyn Canvas,
        mouse_pos: Vec2<f32>,
        partial_ticks: f32,
    ) -> Result<()> {
        (self.0)(canvas, mouse_pos, partial_ticks)
    }
}
