//! Component which owns and fans out to child components.

use crate::{
    component::{
        Component,
        ComponentBase,
        ComponentRef,
        ParentRef,
    },
    drawable::GuiDrawable,
    event::MouseButton,
};
use graphics::{
    Canvas,
    StateScope,
};
use anyhow::{
    Context,
    Result,
};
use std::{
    cell::RefCell,
    fmt::{self, Debug, Formatter},
    rc::Rc,
};
use vek::*;


/// Size of a container constructed with only a position.
pub const DEFAULT_CONTAINER_SIZE: Vec2<f32> = Vec2 { x: 100.0, y: 100.0 };


/// Groups child components and overlay drawables into one component.
///
/// Children are kept sorted ascending by z-index, re-sorted on every `add`.
/// The sort is stable, so children with equal z-index stay in the order they
/// were added in. Adding the same child twice is not supported.
///
/// Input events go to every child, whether or not the cursor is over it.
/// Children which care are expected to check `is_mouse_over` themselves.
pub struct ComponentContainer {
    base: ComponentBase,
    /// If set, the container is only hovered where one of its children is,
    /// rather than anywhere in its own rectangle.
    pub advanced_hit_test: bool,
    components: Vec<ComponentRef>,
    drawables: Vec<Box<dyn GuiDrawable>>,
    this: ParentRef,
}

impl ComponentContainer {
    /// Container of `DEFAULT_CONTAINER_SIZE` at `pos`.
    pub fn new(pos: Vec2<f32>) -> Rc<RefCell<Self>> {
        Self::with_size(pos, DEFAULT_CONTAINER_SIZE)
    }

    pub fn with_size(pos: Vec2<f32>, size: Vec2<f32>) -> Rc<RefCell<Self>> {
        Rc::new_cyclic(|this| RefCell::new(ComponentContainer {
            base: ComponentBase::new(pos, size),
            advanced_hit_test: false,
            components: Vec::new(),
            drawables: Vec::new(),
            this: this.clone(),
        }))
    }

    /// Add a child, make this its parent, and restore z-order.
    pub fn add(&mut self, component: ComponentRef) {
        component.borrow_mut().set_parent(Some(self.this.clone()));
        self.components.push(component);
        self.components.sort_by_key(|c| c.borrow().z_index());
        trace!(children = self.components.len(), "added component");
    }

    /// Add an overlay, drawn after all children in the order added.
    pub fn add_drawable<D: GuiDrawable + 'static>(&mut self, drawable: D) {
        self.drawables.push(Box::new(drawable));
        trace!(drawables = self.drawables.len(), "added drawable");
    }

    /// Detach a child, clearing its parent. Returns whether it was a child.
    pub fn remove<C: Component + ?Sized>(&mut self, component: &Rc<RefCell<C>>) -> bool {
        let target = Rc::as_ptr(component) as *const ();
        let before = self.components.len();
        self.components.retain(|c| Rc::as_ptr(c) as *const () != target);
        let removed = self.components.len() != before;
        if removed {
            component.borrow_mut().set_parent(None);
            trace!(children = self.components.len(), "removed component");
        }
        removed
    }

    /// Children, ascending by z-index.
    pub fn children(&self) -> &[ComponentRef] {
        &self.components
    }

    pub fn drawable_count(&self) -> usize {
        self.drawables.len()
    }

    fn for_each_child(&self, mut f: impl FnMut(&mut dyn Component)) {
        for component in &self.components {
            f(&mut *component.borrow_mut());
        }
    }
}

impl Debug for ComponentContainer {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ComponentContainer")
            .field("base", &self.base)
            .field("advanced_hit_test", &self.advanced_hit_test)
            .field("children", &self.components.len())
            .field("drawables", &self.drawables.len())
            .finish()
    }
}

impl Component for ComponentContainer {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn draw_component(
        &mut self,
        canvas: &mut dyn Canvas,
        mouse_pos: Vec2<f32>,
        partial_ticks: f32,
    ) -> Result<()> {
        let mut canvas = StateScope::push(canvas);
        canvas.translate(self.base.pos);

        for (i, component) in self.components.iter().enumerate() {
            let mut component = component.borrow_mut();
            let child_pos = component.relative_pos(mouse_pos);
            component
                .draw(&mut *canvas, child_pos, partial_ticks)
                .with_context(|| format!("drawing child {} of container at {:?}", i, self.base.pos))?;
        }

        for (i, drawable) in self.drawables.iter_mut().enumerate() {
            drawable
                .draw(&mut *canvas, mouse_pos, partial_ticks)
                .with_context(|| format!("drawing overlay {} of container at {:?}", i, self.base.pos))?;
        }

        Ok(())
    }

    fn is_mouse_over(&self, mouse_pos: Vec2<f32>) -> bool {
        if !self.advanced_hit_test {
            return self.base.contains(mouse_pos);
        }

        self.components
            .iter()
            .any(|component| {
                let component = component.borrow();
                component.is_mouse_over(component.relative_pos(mouse_pos))
            })
    }

    fn key_pressed(&mut self, key: char, key_code: i32) {
        self.for_each_child(|c| c.key_pressed(key, key_code));
    }

    fn key_released(&mut self, key: char, key_code: i32) {
        self.for_each_child(|c| c.key_released(key, key_code));
    }

    fn mouse_down(&mut self, mouse_pos: Vec2<f32>, button: MouseButton) {
        self.for_each_child(|c| c.mouse_down(c.relative_pos(mouse_pos), button));
    }

    fn mouse_drag(&mut self, mouse_pos: Vec2<f32>, button: MouseButton) {
        self.for_each_child(|c| c.mouse_drag(c.relative_pos(mouse_pos), button));
    }

    fn mouse_up(&mut self, mouse_pos: Vec2<f32>, button: MouseButton) {
        self.for_each_child(|c| c.mouse_up(c.relative_pos(mouse_pos), button));
    }

    fn mouse_wheel(&mut self, mouse_pos: Vec2<f32>, direction: i32) {
        self.for_each_child(|c| c.mouse_wheel(c.relative_pos(mouse_pos), direction));
    }
}
