//! Parameters for stamping a structure into the world.
//!
//! Nothing here places blocks. `PlacementSettings` is read by whatever does,
//! to decide how the structure is mirrored and rotated, what it may replace,
//! which volume it is confined to, and where its randomness comes from.

#[macro_use]
extern crate tracing;

mod bounds;
mod placement;
mod seed;

pub use crate::{
    bounds::BlockBox,
    placement::{
        PlacementSettings,
        Mirror,
        Rotation,
        BlockId,
    },
    seed::{
        PlacementRng,
        position_seed,
        clock_seed,
    },
};
