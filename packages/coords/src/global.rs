//! Global block coords.

use std::{
    convert::TryInto,
    fmt,
};


/// Global block coord.
pub fn gbc<X, Y, Z>(x: X, y: Y, z: Z) -> Gbc
where
    X: TryInto<i32>,
    Y: TryInto<u8>,
    Z: TryInto<i32>,
{
    Gbc::new(
        x.try_into().ok().unwrap(),
        y.try_into().ok().unwrap(),
        z.try_into().ok().unwrap(),
    )
}


/// Global block coord.
///
/// Coordinate of a block anywhere in the world.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Gbc {
    pub x: i32,
    pub z: i32,
    pub y: u8,
}

impl Gbc {
    /// Construct from components.
    pub fn new(x: i32, y: u8, z: i32) -> Self {
        Gbc { x, y, z }
    }
}

macro_rules! impl_fmt_global_block_coord {
    ($t:ident, $fstr:literal)=>{
        impl fmt::$t for Gbc {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    f, $fstr,
                    self.x, self.y, self.z,
                )
            }
        }
    };
}
impl_fmt_global_block_coord!(Debug, "<{},{},{}>");
impl_fmt_global_block_coord!(Display, "<{},{},{}>");
