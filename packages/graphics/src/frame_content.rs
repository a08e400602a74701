//! Canvas which records what it is told instead of rendering it.

use crate::{
    canvas::{
        Canvas,
        DrawObj2,
    },
    modifier::{
        Modifier2,
        Transform2,
    },
};
use vek::*;


/// One recorded canvas instruction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FrameItem {
    PushState,
    PopState,
    PushTransform,
    PopTransform,
    Modify(Modifier2),
    Draw(DrawCall),
}

/// A draw call, with the transform and color that were in effect for it
/// already resolved.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCall {
    pub transform: Transform2,
    pub color: Rgba<f32>,
    pub obj: DrawObj2,
}

impl DrawCall {
    /// Where the draw call's local origin lands in frame space.
    pub fn origin(&self) -> Vec2<f32> {
        self.transform.apply(Vec2::zero())
    }
}

/// Recording canvas.
///
/// Tracks the transform and visual state stacks the same way a real backend
/// would, so draw calls carry their resolved transform and color. Both stacks
/// start out with one base entry which can never be popped.
#[derive(Debug, Clone)]
pub struct FrameContent {
    items: Vec<FrameItem>,
    transforms: Vec<Transform2>,
    colors: Vec<Rgba<f32>>,
}

impl Default for FrameContent {
    fn default() -> Self {
        FrameContent {
            items: Vec::new(),
            transforms: vec![Transform2::identity()],
            colors: vec![Rgba::white()],
        }
    }
}

impl FrameContent {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn items(&self) -> &[FrameItem] {
        &self.items
    }

    pub fn draw_calls(&self) -> impl Iterator<Item = &DrawCall> + '_ {
        self.items
            .iter()
            .filter_map(|item| match item {
                FrameItem::Draw(call) => Some(call),
                _ => None,
            })
    }

    /// Number of entries on the transform stack, including the base entry.
    pub fn transform_depth(&self) -> usize {
        self.transforms.len()
    }

    /// Number of entries on the visual state stack, including the base entry.
    pub fn state_depth(&self) -> usize {
        self.colors.len()
    }

    /// Whether every push so far has been matched by a pop.
    pub fn is_balanced(&self) -> bool {
        self.transforms.len() == 1 && self.colors.len() == 1
    }

    /// Discard everything recorded and reset both stacks, ready for the next
    /// frame.
    pub fn clear(&mut self) {
        if !self.is_balanced() {
            warn!(
                transforms = self.transforms.len(),
                states = self.colors.len(),
                "clearing unbalanced frame",
            );
        }
        *self = FrameContent::new();
    }

    fn top_transform(&self) -> Transform2 {
        self.transforms.last().copied().unwrap_or_default()
    }

    fn top_color(&self) -> Rgba<f32> {
        self.colors.last().copied().unwrap_or(Rgba::white())
    }

    #[allow(unused_must_use)]
    pub fn to_pseudo_xml(&self) -> String {
        use std::fmt::Write;

        const INDENT: &'static str = "    ";

        let mut buf = String::new();
        let mut depth = 0usize;

        fn indent(buf: &mut String, depth: usize) {
            for _ in 0..depth {
                buf.push_str(INDENT);
            }
        }

        for item in &self.items {
            match *item {
                FrameItem::PushState => {
                    indent(&mut buf, depth);
                    buf.push_str("<state>\n");
                    depth += 1;
                }
                FrameItem::PushTransform => {
                    indent(&mut buf, depth);
                    buf.push_str("<transform>\n");
                    depth += 1;
                }
                FrameItem::PopState => {
                    depth = depth.saturating_sub(1);
                    indent(&mut buf, depth);
                    buf.push_str("</state>\n");
                }
                FrameItem::PopTransform => {
                    depth = depth.saturating_sub(1);
                    indent(&mut buf, depth);
                    buf.push_str("</transform>\n");
                }
                FrameItem::Modify(Modifier2::Transform(t)) => {
                    let o = t.apply(Vec2::zero());
                    indent(&mut buf, depth);
                    writeln!(&mut buf, "<modify origin=\"{:.2},{:.2}\"/>", o.x, o.y);
                }
                FrameItem::Modify(Modifier2::Color(Rgba { r, g, b, a })) => {
                    indent(&mut buf, depth);
                    writeln!(&mut buf, "<color rgba=\"{:.2},{:.2},{:.2},{:.2}\"/>", r, g, b, a);
                }
                FrameItem::Draw(call) => {
                    let o = call.origin();
                    indent(&mut buf, depth);
                    match call.obj {
                        DrawObj2::Solid => {
                            let far = call.transform.apply(Vec2::one());
                            writeln!(
                                &mut buf,
                                "<solid from=\"{:.2},{:.2}\" to=\"{:.2},{:.2}\"/>",
                                o.x, o.y, far.x, far.y,
                            );
                        }
                        DrawObj2::Line(a, b) => {
                            let a = call.transform.apply(a);
                            let b = call.transform.apply(b);
                            writeln!(
                                &mut buf,
                                "<line from=\"{:.2},{:.2}\" to=\"{:.2},{:.2}\"/>",
                                a.x, a.y, b.x, b.y,
                            );
                        }
                    }
                }
            }
        }
        buf
    }
}

impl Canvas for FrameContent {
    fn push_state(&mut self) {
        self.items.push(FrameItem::PushState);
        self.colors.push(self.top_color());
    }

    fn pop_state(&mut self) {
        self.items.push(FrameItem::PopState);
        if self.colors.len() > 1 {
            self.colors.pop();
        } else {
            error!("visual state stack underflow");
        }
    }

    fn push_transform(&mut self) {
        self.items.push(FrameItem::PushTransform);
        self.transforms.push(self.top_transform());
    }

    fn pop_transform(&mut self) {
        self.items.push(FrameItem::PopTransform);
        if self.transforms.len() > 1 {
            self.transforms.pop();
        } else {
            error!("transform stack underflow");
        }
    }

    fn modify(&mut self, modifier: Modifier2) {
        self.items.push(FrameItem::Modify(modifier));
        match modifier {
            Modifier2::Transform(t) => {
                let top = self.top_transform();
                if let Some(last) = self.transforms.last_mut() {
                    *last = t.then(&top);
                }
            }
            Modifier2::Color(c) => {
                if let Some(last) = self.colors.last_mut() {
                    *last = *last * c;
                }
            }
        }
    }

    fn draw(&mut self, obj: DrawObj2) {
        self.items.push(FrameItem::Draw(DrawCall {
            transform: self.top_transform(),
            color: self.top_color(),
            obj,
        }));
    }
}


#[test]
fn test_nested_translate_and_restore() {
    let mut frame = FrameContent::new();
    frame.push_transform();
    frame.translate(Vec2::new(10.0, 20.0));
    frame.push_transform();
    frame.translate(Vec2::new(1.0, 2.0));
    frame.draw_solid(Extent2::new(4.0, 4.0));
    frame.pop_transform();
    frame.draw_line(Vec2::zero(), Vec2::new(1.0, 0.0));
    frame.pop_transform();

    let origins = frame
        .draw_calls()
        .map(DrawCall::origin)
        .collect::<Vec<_>>();
    assert_eq!(origins, vec![Vec2::new(11.0, 22.0), Vec2::new(10.0, 20.0)]);
    assert!(frame.is_balanced());
}

#[test]
fn test_color_is_scoped_to_state() {
    let mut frame = FrameContent::new();
    frame.push_state();
    frame.color(Rgba::new(1.0, 0.0, 0.0, 1.0));
    frame.draw(DrawObj2::Solid);
    frame.pop_state();
    frame.draw(DrawObj2::Solid);

    let colors = frame
        .draw_calls()
        .map(|call| call.color)
        .collect::<Vec<_>>();
    assert_eq!(colors, vec![Rgba::new(1.0, 0.0, 0.0, 1.0), Rgba::white()]);
}

#[test]
fn test_underflow_keeps_base_entry() {
    let mut frame = FrameContent::new();
    frame.pop_transform();
    frame.pop_state();
    assert_eq!(frame.transform_depth(), 1);
    assert_eq!(frame.state_depth(), 1);
}
