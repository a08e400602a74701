//! Where placement randomness comes from.

use coords::Gbc;
use rand::{
    RngCore,
    SeedableRng,
};
use rand_chacha::ChaCha20Rng;
use std::time::{
    SystemTime,
    UNIX_EPOCH,
};


/// Seed derived from a block position's horizontal coordinates.
///
/// Arithmetic wraps the way 32-bit integer math does before widening, so
/// large coordinates produce the same seeds as any other implementation of
/// this formula.
pub fn position_seed(pos: Gbc) -> i64 {
    let (x, z) = (pos.x, pos.z);
    let xs = x
        .wrapping_mul(x)
        .wrapping_mul(4987142)
        .wrapping_add(x.wrapping_mul(5947611)) as i64;
    let zs = (z.wrapping_mul(z) as i64).wrapping_mul(4392871);
    let zl = z.wrapping_mul(389711) as i64;
    xs.wrapping_add(zs).wrapping_add(zl) ^ 987234911
}

/// Milliseconds since the unix epoch.
pub fn clock_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Resolve the seed for a derived random source.
///
/// An explicit seed of exactly zero means "use the clock", not zero.
pub(crate) fn derive_seed(explicit: Option<i64>, pos: Option<Gbc>) -> i64 {
    match (explicit, pos) {
        (Some(0), _) => clock_seed(),
        (Some(seed), _) => seed,
        (None, None) => clock_seed(),
        (None, Some(pos)) => position_seed(pos),
    }
}

pub(crate) fn seeded(seed: i64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed as u64)
}


/// Random source handed out by `PlacementSettings::random`.
///
/// An explicitly configured source is lent out, so successive calls keep
/// drawing from the same stream. Anything else is a fresh, owned source.
#[derive(Debug)]
pub enum PlacementRng<'a> {
    Explicit(&'a mut ChaCha20Rng),
    Derived(ChaCha20Rng),
}

impl<'a> PlacementRng<'a> {
    fn inner(&mut self) -> &mut ChaCha20Rng {
        match self {
            PlacementRng::Explicit(rng) => rng,
            PlacementRng::Derived(rng) => rng,
        }
    }
}

impl<'a> RngCore for PlacementRng<'a> {
    fn next_u32(&mut self) -> u32 {
        self.inner().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner().try_fill_bytes(dest)
    }
}


#[test]
fn test_position_seed_values() {
    use coords::gbc;

    assert_eq!(position_seed(gbc(0, 0, 0)), 987234911);
    assert_eq!(position_seed(gbc(1, 0, 1)), 976736648);
    assert_eq!(position_seed(gbc(-3, 200, 7)), 876787610);
    assert_eq!(position_seed(gbc(1000, 0, -2000)), 17569372698775);
}

#[test]
fn test_position_seed_ignores_height() {
    use coords::gbc;

    assert_eq!(position_seed(gbc(5, 0, 9)), position_seed(gbc(5, 255, 9)));
}
