//! Boundary between the GUI tree and whatever actually puts pixels on the
//! screen.
//!
//! The tree only ever talks to a `Canvas`: a stack machine with scoped visual
//! state, scoped transforms, modifiers which apply to the top of those stacks,
//! and a handful of primitive draw calls. `FrameContent` is a canvas which
//! simply records everything it is told, which is enough to run headless and
//! to inspect what a frame would have drawn.

#[macro_use]
extern crate tracing;

pub mod modifier;
pub mod frame_content;
mod canvas;
mod scope;

pub use crate::{
    canvas::{
        Canvas,
        DrawObj2,
    },
    scope::StateScope,
};
pub use vek;
