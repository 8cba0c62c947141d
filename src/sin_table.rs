//! Table-driven `sin(2π·phase)`

use crate::{math::sin_turns, Phase, Sample};

/// log2 of the number of table segments per cycle
const TABLE_BITS: u32 = 11;
const TABLE_SIZE: usize = 1 << TABLE_BITS;
/// Raw phase bits below the table index, used for interpolation
const FRACT_BITS: u32 = 32 - TABLE_BITS;
const FRACT_MASK: u32 = (1 << FRACT_BITS) - 1;
const FRACT_SCALE: f32 = 1.0 / (1u32 << FRACT_BITS) as f32;

/// One cycle of sine, plus a guard entry equal to the first so interpolation never wraps
static SIN_TABLE: [f32; TABLE_SIZE + 1] = {
    let mut table = [0.0f32; TABLE_SIZE + 1];
    let mut i = 0;
    while i <= TABLE_SIZE {
        table[i] = sin_turns(i as f64 / TABLE_SIZE as f64) as f32;
        i += 1;
    }
    table
};

/// Approximate `sin(2π·phase)` from a raw phase representation
///
/// The top bits of `raw` select a table segment and the rest interpolate linearly within it.
/// Pure and allocation-free; absolute error is below 2e-6.
#[inline]
pub fn sin_lookup(raw: u32) -> Sample {
    let index = (raw >> FRACT_BITS) as usize;
    let t = (raw & FRACT_MASK) as f32 * FRACT_SCALE;
    let a = SIN_TABLE[index];
    let b = SIN_TABLE[index + 1];
    a + t * (b - a)
}

/// [`sin_lookup`] of a [`Phase`]
#[inline]
pub fn sin(phase: Phase) -> Sample {
    sin_lookup(phase.raw())
}
