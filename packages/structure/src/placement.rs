use crate::{
    bounds::BlockBox,
    seed::{
        PlacementRng,
        derive_seed,
        seeded,
    },
};
use coords::{
    Chc,
    Gbc,
};
use rand_chacha::ChaCha20Rng;
use serde::{Serialize, Deserialize};
use std::cell::OnceCell;


/// How a structure is mirrored before placement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mirror {
    #[default]
    None,
    LeftRight,
    FrontBack,
}

/// How a structure is rotated around the vertical axis before placement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    CounterClockwise90,
}

/// Block type identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u16);


/// Settings for stamping a structure into the world.
///
/// Built from `Default` and adjusted with chained setters. `Clone` produces a
/// fully independent copy, including the state of an explicit random source.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSettings {
    mirror: Mirror,
    rotation: Rotation,
    ignore_entities: bool,
    /// The type of block in the world that will get replaced by the structure.
    replaced_block: Option<BlockId>,
    /// The chunk the structure is within.
    chunk: Option<Chc>,
    /// The bounds the structure is contained within. Filled in from `chunk`
    /// the first time it's asked for, then never recomputed.
    bounding_box: OnceCell<BlockBox>,
    ignore_structure_block: bool,
    integrity: f32,
    random: Option<ChaCha20Rng>,
    seed: Option<i64>,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        PlacementSettings {
            mirror: Mirror::None,
            rotation: Rotation::None,
            ignore_entities: false,
            replaced_block: None,
            chunk: None,
            bounding_box: OnceCell::new(),
            ignore_structure_block: true,
            integrity: 1.0,
            random: None,
            seed: None,
        }
    }
}

impl PlacementSettings {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn mirror(&self) -> Mirror {
        self.mirror
    }

    pub fn set_mirror(&mut self, mirror: Mirror) -> &mut Self {
        self.mirror = mirror;
        self
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) -> &mut Self {
        self.rotation = rotation;
        self
    }

    pub fn ignore_entities(&self) -> bool {
        self.ignore_entities
    }

    pub fn set_ignore_entities(&mut self, ignore_entities: bool) -> &mut Self {
        self.ignore_entities = ignore_entities;
        self
    }

    pub fn ignore_structure_block(&self) -> bool {
        self.ignore_structure_block
    }

    pub fn set_ignore_structure_block(&mut self, ignore: bool) -> &mut Self {
        self.ignore_structure_block = ignore;
        self
    }

    pub fn replaced_block(&self) -> Option<BlockId> {
        self.replaced_block
    }

    pub fn set_replaced_block(&mut self, block: Option<BlockId>) -> &mut Self {
        self.replaced_block = block;
        self
    }

    pub fn chunk(&self) -> Option<Chc> {
        self.chunk
    }

    /// Does not touch a bounding box that has already been resolved.
    pub fn set_chunk(&mut self, chunk: Option<Chc>) -> &mut Self {
        self.chunk = chunk;
        self
    }

    /// Fraction of the structure's blocks which actually get placed.
    pub fn integrity(&self) -> f32 {
        self.integrity
    }

    pub fn set_integrity(&mut self, integrity: f32) -> &mut Self {
        self.integrity = integrity;
        self
    }

    pub fn set_random(&mut self, random: Option<ChaCha20Rng>) -> &mut Self {
        self.random = random;
        self
    }

    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    pub fn set_seed(&mut self, seed: Option<i64>) -> &mut Self {
        self.seed = seed;
        self
    }

    /// The bounds the structure is contained within.
    ///
    /// If none were set explicitly, they are derived from the chunk on first
    /// read and memoized. Later chunk changes do not affect the memoized
    /// value.
    pub fn bounding_box(&self) -> Option<BlockBox> {
        if let Some(&bb) = self.bounding_box.get() {
            return Some(bb);
        }
        let chunk = self.chunk?;
        let bb = *self.bounding_box.get_or_init(|| BlockBox::of_chunk(chunk));
        trace!(%chunk, ?bb, "derived placement bounding box from chunk");
        Some(bb)
    }

    pub fn set_bounding_box(&mut self, bounding_box: Option<BlockBox>) -> &mut Self {
        self.bounding_box = match bounding_box {
            Some(bb) => OnceCell::from(bb),
            None => OnceCell::new(),
        };
        self
    }

    /// Seed the random source for placement at `pos` would be created with,
    /// or `None` if an explicit random source is set.
    ///
    /// Clock-derived seeds are read from the clock on every call.
    pub fn seed_for(&self, pos: Option<Gbc>) -> Option<i64> {
        if self.random.is_some() {
            None
        } else {
            Some(derive_seed(self.seed, pos))
        }
    }

    /// Random source for placing the structure at `pos`.
    ///
    /// In order of priority: the explicit random source, a source seeded from
    /// the explicit seed (where zero means the clock), a clock-seeded source
    /// if there is no position, and finally a source seeded from the
    /// position.
    pub fn random(&mut self, pos: Option<Gbc>) -> PlacementRng<'_> {
        match self.random {
            Some(ref mut rng) => PlacementRng::Explicit(rng),
            None => PlacementRng::Derived(seeded(derive_seed(self.seed, pos))),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::clock_seed;
    use coords::{
        chc,
        gbc,
    };
    use rand::{
        Rng,
        RngCore,
        SeedableRng,
    };
    use vek::Vec3;

    fn first_n(rng: &mut impl RngCore, n: usize) -> Vec<u64> {
        (0..n).map(|_| rng.next_u64()).collect()
    }

    #[test]
    fn defaults() {
        let s = PlacementSettings::new();
        assert_eq!(s.mirror(), Mirror::None);
        assert_eq!(s.rotation(), Rotation::None);
        assert!(!s.ignore_entities());
        assert!(s.ignore_structure_block());
        assert_eq!(s.integrity(), 1.0);
        assert_eq!(s.replaced_block(), None);
        assert_eq!(s.chunk(), None);
        assert_eq!(s.bounding_box(), None);
        assert_eq!(s.seed(), None);
    }

    #[test]
    fn chained_setters() {
        let mut s = PlacementSettings::new();
        s
            .set_mirror(Mirror::FrontBack)
            .set_rotation(Rotation::Clockwise180)
            .set_ignore_entities(true)
            .set_replaced_block(Some(BlockId(3)))
            .set_integrity(0.5);
        assert_eq!(s.mirror(), Mirror::FrontBack);
        assert_eq!(s.rotation(), Rotation::Clockwise180);
        assert!(s.ignore_entities());
        assert_eq!(s.replaced_block(), Some(BlockId(3)));
        assert_eq!(s.integrity(), 0.5);
    }

    #[test]
    fn position_seed_is_deterministic() {
        let mut s = PlacementSettings::new();
        let pos = gbc(-41, 70, 1337);
        let a = first_n(&mut s.random(Some(pos)), 8);
        let b = first_n(&mut s.random(Some(pos)), 8);
        assert_eq!(a, b);
        assert_eq!(s.seed_for(Some(gbc(0, 12, 0))), Some(987234911));
    }

    #[test]
    fn explicit_seed_wins_over_position() {
        let mut s = PlacementSettings::new();
        s.set_seed(Some(42));
        assert_eq!(s.seed_for(Some(gbc(5, 0, 5))), Some(42));
        assert_eq!(s.seed_for(None), Some(42));
        let a = first_n(&mut s.random(None), 4);
        let b = first_n(&mut ChaCha20Rng::seed_from_u64(42), 4);
        assert_eq!(a, b);
    }

    #[test]
    fn explicit_zero_seed_uses_clock() {
        let mut s = PlacementSettings::new();
        s.set_seed(Some(0));
        let before = clock_seed();
        let seed = s.seed_for(Some(gbc(0, 0, 0))).unwrap();
        let after = clock_seed();
        assert!(seed >= before && seed <= after);
        assert_ne!(seed, 0);
    }

    #[test]
    fn no_position_uses_clock() {
        let s = PlacementSettings::new();
        let before = clock_seed();
        let seed = s.seed_for(None).unwrap();
        let after = clock_seed();
        assert!(seed >= before && seed <= after);
    }

    #[test]
    fn explicit_random_is_lent_out() {
        let mut s = PlacementSettings::new();
        s
            .set_seed(Some(7))
            .set_random(Some(ChaCha20Rng::seed_from_u64(99)));
        assert_eq!(s.seed_for(Some(gbc(1, 1, 1))), None);

        let mut reference = ChaCha20Rng::seed_from_u64(99);
        let expected = first_n(&mut reference, 6);

        let mut got = first_n(&mut s.random(None), 3);
        got.extend(first_n(&mut s.random(Some(gbc(4, 4, 4))), 3));
        assert_eq!(got, expected);
    }

    #[test]
    fn bounding_box_from_chunk() {
        let mut s = PlacementSettings::new();
        s.set_chunk(Some(chc(1, -1)));
        assert_eq!(s.bounding_box(), Some(BlockBox {
            min: Vec3::new(16, 0, -16),
            max: Vec3::new(31, 255, -1),
        }));
    }

    #[test]
    fn bounding_box_memo_is_sticky() {
        let mut s = PlacementSettings::new();
        s.set_chunk(Some(chc(0, 0)));
        let first = s.bounding_box();
        s.set_chunk(Some(chc(10, 10)));
        assert_eq!(s.bounding_box(), first);
        assert_eq!(s.chunk(), Some(chc(10, 10)));
    }

    #[test]
    fn bounding_box_not_memoized_without_chunk() {
        let mut s = PlacementSettings::new();
        assert_eq!(s.bounding_box(), None);
        s.set_chunk(Some(chc(2, 2)));
        assert_eq!(s.bounding_box(), Some(BlockBox::of_chunk(chc(2, 2))));
    }

    #[test]
    fn explicit_bounding_box_wins() {
        let explicit = BlockBox {
            min: Vec3::new(0, 10, 0),
            max: Vec3::new(4, 20, 4),
        };
        let mut s = PlacementSettings::new();
        s
            .set_chunk(Some(chc(3, 3)))
            .set_bounding_box(Some(explicit));
        assert_eq!(s.bounding_box(), Some(explicit));
    }

    #[test]
    fn clone_is_independent() {
        let mut original = PlacementSettings::new();
        original
            .set_mirror(Mirror::LeftRight)
            .set_chunk(Some(chc(4, 5)))
            .set_seed(Some(12))
            .set_random(Some(ChaCha20Rng::seed_from_u64(3)));
        let _ = original.bounding_box();

        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set_rotation(Rotation::CounterClockwise90);
        original.set_ignore_entities(true);
        assert_eq!(original.rotation(), Rotation::None);
        assert!(!copy.ignore_entities());

        let from_original: u64 = original.random(None).gen();
        let from_copy: u64 = copy.random(None).gen();
        assert_eq!(from_original, from_copy);
        assert_ne!(copy, original);
    }
}
