//! Block-aligned box.

use coords::{
    Chc,
    CHUNK_SIZE,
};
use vek::*;


/// Block-aligned box. Both corners are inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BlockBox {
    pub min: Vec3<i32>,
    pub max: Vec3<i32>,
}

impl BlockBox {
    /// The full-height column occupied by a chunk.
    pub fn of_chunk(chunk: Chc) -> Self {
        let (x, z) = chunk.min_block_xz();
        BlockBox {
            min: Vec3::new(x, 0, z),
            max: Vec3::new(x + CHUNK_SIZE - 1, 255, z + CHUNK_SIZE - 1),
        }
    }

    /// Number of blocks along each axis.
    pub fn size(&self) -> Extent3<i32> {
        let d = self.max - self.min + Vec3::one();
        Extent3::new(d.x, d.y, d.z)
    }

    pub fn contains(&self, pos: Vec3<i32>) -> bool {
        pos.x >= self.min.x
            && pos.y >= self.min.y
            && pos.z >= self.min.z
            && pos.x <= self.max.x
            && pos.y <= self.max.y
            && pos.z <= self.max.z
    }
}


#[test]
fn test_chunk_column() {
    let b = BlockBox::of_chunk(Chc::new(-2, 3));
    assert_eq!(b.min, Vec3::new(-32, 0, 48));
    assert_eq!(b.max, Vec3::new(-17, 255, 63));
    assert_eq!(b.size(), Extent3::new(16, 256, 16));
    assert!(b.contains(Vec3::new(-32, 0, 63)));
    assert!(!b.contains(Vec3::new(-16, 10, 50)));
}
