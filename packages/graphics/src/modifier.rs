//! Modifiers that map one canvas space onto another, and eventually onto the
//! render target.

use vek::*;


/// Any modifier in 2D space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Modifier2 {
    /// Apply an affine transform to the geometry. Lives on the transform
    /// stack.
    Transform(Transform2),
    /// Apply color multiplication. Lives on the visual state stack.
    Color(Rgba<f32>),
}

impl From<Transform2> for Modifier2 {
    fn from(inner: Transform2) -> Self {
        Modifier2::Transform(inner)
    }
}

impl From<Rgba<f32>> for Modifier2 {
    fn from(inner: Rgba<f32>) -> Self {
        Modifier2::Color(inner)
    }
}


/// A 2D affine transform modifier. Is a newtype around a matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2(pub Mat3<f32>);

impl Default for Transform2 {
    fn default() -> Self {
        Transform2::identity()
    }
}

impl Transform2 {
    /// Identity transform.
    pub fn identity() -> Self {
        Transform2(Mat3::identity())
    }

    /// Translate by `v`.
    pub fn translate<V: Into<Vec2<f32>>>(v: V) -> Self {
        Transform2(Mat3::translation_2d(v))
    }

    /// Component-wise scale by `v`.
    pub fn scale<V: Into<Vec2<f32>>>(v: V) -> Self {
        let v = v.into();
        Transform2(Mat3::scaling_3d([v.x, v.y, 1.0]))
    }

    /// Apply this transformation to a point.
    ///
    /// This is useful for mapping from object space to screen space, eg. for
    /// rendering.
    pub fn apply<V: Into<Vec2<f32>>>(&self, v: V) -> Vec2<f32> {
        (self.0 * Vec3::from_point_2d(v)).xy()
    }

    /// Compose with another such that
    /// `b.apply(a.apply(v)) == a.then(b).apply(v)`.
    pub fn then(&self, other: &Self) -> Self {
        Transform2(other.0 * self.0)
    }
}


#[test]
fn test_translate_composes_additively() {
    let a = Transform2::translate([3.0, 4.0]);
    let b = Transform2::translate([10.0, -2.0]);
    let v = Vec2::new(1.0, 1.0);
    assert_eq!(a.then(&b).apply(v), Vec2::new(14.0, 3.0));
    assert_eq!(b.apply(a.apply(v)), a.then(&b).apply(v));
}
