//! Component with externally supplied draw logic.

use crate::component::{
    Component,
    ComponentBase,
};
use graphics::Canvas;
use anyhow::Result;
use std::fmt::{self, Debug, Formatter};
use vek::*;


/// Draw callback of a `RawComponent`.
pub type DrawFunc = Box<dyn FnMut(&ComponentBase, &mut dyn Canvas)>;

/// Component whose drawing is a callback, for one-off visuals that don't
/// deserve their own type.
///
/// The callback is handed the component's current state each frame, so it
/// sees position, size and z-index as they are at draw time. The canvas it
/// gets is in the parent's space; drawing at `base.pos` is up to it. Input
/// and hit-testing are the plain rectangle behavior.
pub struct RawComponent {
    base: ComponentBase,
    pub func: DrawFunc,
}

impl RawComponent {
    /// Zero-sized at `pos`.
    pub fn new<F>(pos: Vec2<f32>, func: F) -> Self
    where
        F: FnMut(&ComponentBase, &mut dyn Canvas) + 'static,
    {
        Self::with_size(pos, Vec2::zero(), func)
    }

    pub fn with_size<F>(pos: Vec2<f32>, size: Vec2<f32>, func: F) -> Self
    where
        F: FnMut(&ComponentBase, &mut dyn Canvas) + 'static,
    {
        RawComponent {
            base: ComponentBase::new(pos, size),
            func: Box::new(func),
        }
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.base.z_index = z_index;
        self
    }
}

impl Debug for RawComponent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("RawComponent")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl Component for RawComponent {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn draw_component(
        &mut self,
        canvas: &mut dyn Canvas,
        _mouse_pos: Vec2<f32>,
        _partial_ticks: f32,
    ) -> Result<()> {
        (self.func)(&self.base, canvas);
        Ok(())
    }
}


#[test]
fn test_callback_sees_current_state() {
    use graphics::frame_content::FrameContent;
    use std::{
        cell::RefCell,
        rc::Rc,
    };

    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen2 = Rc::clone(&seen);
    let mut raw = RawComponent::new(Vec2::new(1.0, 2.0), move |base, _| {
        seen2.borrow_mut().push((base.pos, base.size, base.z_index));
    });
    assert_eq!(raw.size(), Vec2::zero());

    let mut frame = FrameContent::new();
    raw.draw(&mut frame, Vec2::zero(), 0.0).unwrap();
    raw.base_mut().pos = Vec2::new(8.0, 9.0);
    raw.base_mut().z_index = 4;
    raw.draw(&mut frame, Vec2::zero(), 0.5).unwrap();

    assert_eq!(*seen.borrow(), vec![
        (Vec2::new(1.0, 2.0), Vec2::zero(), 0),
        (Vec2::new(8.0, 9.0), Vec2::zero(), 4),
    ]);
}
