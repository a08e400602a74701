//! The caller side of the tree: holds roots, draws them each frame, and
//! delivers input to them.

use crate::{
    component::ComponentRef,
    event::MouseButton,
};
use graphics::frame_content::FrameContent;
use anyhow::{
    Context,
    Result,
};
use vek::*;


/// Drives a set of root components against a recording canvas.
///
/// Cursor positions given to the host are in host space. Each root gets them
/// converted into its own local space with `relative_pos`, the same way a
/// container converts for its children.
#[derive(Default)]
pub struct GuiHost {
    roots: Vec<ComponentRef>,
    frame: FrameContent,
}

impl GuiHost {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_root(&mut self, root: ComponentRef) {
        self.roots.push(root);
        debug!(roots = self.roots.len(), "added root component");
    }

    pub fn roots(&self) -> &[ComponentRef] {
        &self.roots
    }

    /// What the most recent frame drew.
    pub fn frame(&self) -> &FrameContent {
        &self.frame
    }

    /// Draw every root, in the order added, onto a fresh frame.
    ///
    /// On error, the frame holds whatever was drawn before the failure and
    /// its stacks are balanced.
    pub fn draw_frame(&mut self, cursor: Vec2<f32>, partial_ticks: f32) -> Result<&FrameContent> {
        self.frame.clear();
        for (i, root) in self.roots.iter().enumerate() {
            let mut root = root.borrow_mut();
            let local = root.relative_pos(cursor);
            root
                .draw(&mut self.frame, local, partial_ticks)
                .with_context(|| format!("drawing root {}", i))?;
        }
        debug_assert!(self.frame.is_balanced());
        Ok(&self.frame)
    }

    pub fn key_pressed(&mut self, key: char, key_code: i32) {
        for root in &self.roots {
            root.borrow_mut().key_pressed(key, key_code);
        }
    }

    pub fn key_released(&mut self, key: char, key_code: i32) {
        for root in &self.roots {
            root.borrow_mut().key_released(key, key_code);
        }
    }

    pub fn mouse_down(&mut self, cursor: Vec2<f32>, button: MouseButton) {
        for root in &self.roots {
            let mut root = root.borrow_mut();
            let local = root.relative_pos(cursor);
            root.mouse_down(local, button);
        }
    }

    pub fn mouse_drag(&mut self, cursor: Vec2<f32>, button: MouseButton) {
        for root in &self.roots {
            let mut root = root.borrow_mut();
            let local = root.relative_pos(cursor);
            root.mouse_drag(local, button);
        }
    }

    pub fn mouse_up(&mut self, cursor: Vec2<f32>, button: MouseButton) {
        for root in &self.roots {
            let mut root = root.borrow_mut();
            let local = root.relative_pos(cursor);
            root.mouse_up(local, button);
        }
    }

    pub fn mouse_wheel(&mut self, cursor: Vec2<f32>, direction: i32) {
        for root in &self.roots {
            let mut root = root.borrow_mut();
            let local = root.relative_pos(cursor);
            root.mouse_wheel(local, direction);
        }
    }

    /// Whether any root is hovered at `cursor`.
    pub fn is_mouse_over(&self, cursor: Vec2<f32>) -> bool {
        self.roots
            .iter()
            .any(|root| {
                let root = root.borrow();
                root.is_mouse_over(root.relative_pos(cursor))
            })
    }
}
