//! Retained-mode GUI component tree.
//!
//! A tree of positioned, sized rectangles. Containers own their children,
//! keep them ordered by z-index, and fan out drawing and input to them after
//! translating the cursor into each child's local space. Children only hold a
//! weak reference back to their container.
//!
//! Everything here runs on the thread that owns the tree. Drawing and event
//! dispatch are plain recursion, and the tree must not be restructured while
//! either is in progress.

#[macro_use]
extern crate tracing;

pub mod component;
pub mod container;
pub mod raw;
pub mod drawable;
pub mod event;
pub mod host;
pub mod logging;
pub mod settings;


pub use crate::{
    component::{
        Component,
        ComponentBase,
        ComponentRef,
    },
    container::ComponentContainer,
    raw::RawComponent,
    drawable::{
        GuiDrawable,
        FnDrawable,
        drawable_fn,
    },
    event::MouseButton,
    host::GuiHost,
};
pub use vek::Vec2;
