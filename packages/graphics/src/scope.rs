use crate::canvas::Canvas;
use std::ops::{
    Deref,
    DerefMut,
};


/// Saves both the transform and the visual state of a canvas, and restores
/// them when dropped.
///
/// Restoration happens on every exit path, including early returns through
/// `?` and unwinding panics, so whatever draws through the scope cannot leave
/// the stacks unbalanced for the code around it.
pub struct StateScope<'c, C: Canvas + ?Sized> {
    canvas: &'c mut C,
}

impl<'c, C: Canvas + ?Sized> StateScope<'c, C> {
    pub fn push(canvas: &'c mut C) -> Self {
        canvas.push_transform();
        canvas.push_state();
        StateScope { canvas }
    }
}

impl<'c, C: Canvas + ?Sized> Deref for StateScope<'c, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<'c, C: Canvas + ?Sized> DerefMut for StateScope<'c, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<'c, C: Canvas + ?Sized> Drop for StateScope<'c, C> {
    fn drop(&mut self) {
        self.canvas.pop_state();
        self.canvas.pop_transform();
    }
}


#[test]
fn test_scope_pops_on_unwind() {
    use crate::frame_content::FrameContent;
    use std::panic::{
        catch_unwind,
        AssertUnwindSafe,
    };

    let mut frame = FrameContent::new();
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut scope = StateScope::push(&mut frame);
        scope.translate(vek::Vec2::new(5.0, 5.0));
        panic!("draw failed");
    }));
    assert!(result.is_err());
    assert_eq!(frame.transform_depth(), 1);
    assert_eq!(frame.state_depth(), 1);
}
