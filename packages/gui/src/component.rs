//! Positioned, sized node of the GUI tree.

use crate::{
    container::ComponentContainer,
    event::MouseButton,
};
use graphics::Canvas;
use anyhow::Result;
use std::{
    cell::RefCell,
    rc::{
        Rc,
        Weak,
    },
};
use vek::*;


/// Shared handle to a component of any type. Containers own their children
/// through these.
pub type ComponentRef = Rc<RefCell<dyn Component>>;

/// Non-owning back-reference from a child to its container.
pub type ParentRef = Weak<RefCell<ComponentContainer>>;


/// State every component carries.
///
/// Also usable as a component by itself: a plain rectangle which draws
/// nothing, but hit-tests and receives events like any other.
#[derive(Debug, Default)]
pub struct ComponentBase {
    /// Top-left corner, in the parent's local space.
    pub pos: Vec2<f32>,
    /// Width and height.
    pub size: Vec2<f32>,
    /// Draw and hit-test order among siblings, ascending.
    pub z_index: i32,
    parent: Option<ParentRef>,
}

impl ComponentBase {
    pub fn new(pos: Vec2<f32>, size: Vec2<f32>) -> Self {
        ComponentBase {
            pos,
            size,
            z_index: 0,
            parent: None,
        }
    }

    /// Zero-sized at `pos`.
    pub fn at(pos: Vec2<f32>) -> Self {
        Self::new(pos, Vec2::zero())
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Whether a point in this component's local space lies within
    /// `[0, size]`, edges included.
    pub fn contains(&self, local: Vec2<f32>) -> bool {
        local.x >= 0.0
            && local.y >= 0.0
            && local.x <= self.size.x
            && local.y <= self.size.y
    }

    /// The container this is a child of, if it is one and it's still alive.
    ///
    /// While the container is drawing or dispatching input to its children it
    /// holds a mutable borrow of itself, so from inside a hook the returned
    /// handle must be accessed with `try_borrow`, which fails rather than
    /// panicking. `borrow` is only safe outside of a dispatch.
    pub fn parent(&self) -> Option<Rc<RefCell<ComponentContainer>>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }
}


/// Positionable unit of GUI behavior.
///
/// Every spatial argument is in the receiving component's own local space,
/// already translated by whoever called it. Input hooks do nothing by
/// default.
pub trait Component {
    fn base(&self) -> &ComponentBase;

    fn base_mut(&mut self) -> &mut ComponentBase;

    /// Draw this component's own visuals.
    fn draw_component(
        &mut self,
        canvas: &mut dyn Canvas,
        mouse_pos: Vec2<f32>,
        partial_ticks: f32,
    ) -> Result<()>;

    /// Called by the owner once per frame. For containers, draws the whole
    /// subtree.
    fn draw(
        &mut self,
        canvas: &mut dyn Canvas,
        mouse_pos: Vec2<f32>,
        partial_ticks: f32,
    ) -> Result<()> {
        self.draw_component(canvas, mouse_pos, partial_ticks)
    }

    /// Defaults to `ComponentBase::contains`.
    fn is_mouse_over(&self, mouse_pos: Vec2<f32>) -> bool {
        self.base().contains(mouse_pos)
    }

    /// Convert a point from the parent's local space into this component's
    /// local space.
    fn relative_pos(&self, pos: Vec2<f32>) -> Vec2<f32> {
        pos - self.base().pos
    }

    #[allow(unused_variables)]
    fn key_pressed(&mut self, key: char, key_code: i32) {}

    #[allow(unused_variables)]
    fn key_released(&mut self, key: char, key_code: i32) {}

    #[allow(unused_variables)]
    fn mouse_down(&mut self, mouse_pos: Vec2<f32>, button: MouseButton) {}

    #[allow(unused_variables)]
    fn mouse_drag(&mut self, mouse_pos: Vec2<f32>, button: MouseButton) {}

    #[allow(unused_variables)]
    fn mouse_up(&mut self, mouse_pos: Vec2<f32>, button: MouseButton) {}

    /// Positive `direction` is away from the user.
    #[allow(unused_variables)]
    fn mouse_wheel(&mut self, mouse_pos: Vec2<f32>, direction: i32) {}

    /// Set the back-reference to the containing component. Does not touch the
    /// container's children; `ComponentContainer::add` and `remove` call this.
    fn set_parent(&mut self, parent: Option<ParentRef>) {
        self.base_mut().parent = parent;
    }

    /// See `ComponentBase::parent`. The container is mutably borrowed for the
    /// duration of its own draw and event dispatch, so use `try_borrow` on
    /// the result from within hooks.
    fn parent(&self) -> Option<Rc<RefCell<ComponentContainer>>> {
        self.base().parent()
    }

    fn pos(&self) -> Vec2<f32> {
        self.base().pos
    }

    fn size(&self) -> Vec2<f32> {
        self.base().size
    }

    fn z_index(&self) -> i32 {
        self.base().z_index
    }

    /// Wrap in a shared handle, ready to be added to a container.
    fn into_ref(self) -> Rc<RefCell<Self>>
    where
        Self: Sized,
    {
        Rc::new(RefCell::new(self))
    }
}

impl Component for ComponentBase {
    fn base(&self) -> &ComponentBase {
        self
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        self
    }

    fn draw_component(
        &mut self,
        _canvas: &mut dyn Canvas,
        _mouse_pos: Vec2<f32>,
        _partial_ticks: f32,
    ) -> Result<()> {
        Ok(())
    }
}


#[test]
fn test_relative_pos_inverts_offset() {
    let c = ComponentBase::new(Vec2::new(12.5, -3.0), Vec2::new(10.0, 10.0));
    for &p in &[Vec2::new(0.0, 0.0), Vec2::new(12.5, -3.0), Vec2::new(-100.0, 42.25)] {
        assert_eq!(c.relative_pos(p), p - c.pos);
        assert_eq!(c.relative_pos(p) + c.pos, p);
    }
}

#[test]
fn test_rect_hit_test_edges() {
    let c = ComponentBase::new(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
    assert!(c.is_mouse_over(Vec2::new(0.0, 0.0)));
    assert!(c.is_mouse_over(Vec2::new(20.0, 10.0)));
    assert!(c.is_mouse_over(Vec2::new(7.0, 3.0)));
    assert!(!c.is_mouse_over(Vec2::new(-0.5, 3.0)));
    assert!(!c.is_mouse_over(Vec2::new(7.0, 10.5)));
    assert!(!c.is_mouse_over(Vec2::new(55.0, 55.0)));
}
