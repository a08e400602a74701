//! World coordinates consumed by structure placement.

mod global;
mod chunk;


pub use crate::{
    global::{
        Gbc,
        gbc,
    },
    chunk::{
        Chc,
        chc,
        CHUNK_SIZE,
    },
};


#[test]
fn test_chunk_min_block() {
    assert_eq!(chc(0, 0).min_block_xz(), (0, 0));
    assert_eq!(chc(3, -2).min_block_xz(), (48, -32));
    assert_eq!(chc(-1, 1).min_block_xz(), (-16, 16));
}
