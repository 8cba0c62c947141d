//! Fixed-point phase accumulator oscillators for real-time audio
//!
//! Every oscillator is driven by an [`Accumulator`], which steps a wrapping fixed-point [`Phase`]
//! by a constant increment each sample. Output is deterministic: the same frequency, sample rate
//! and starting phase always produce bit-identical samples, which makes these oscillators suitable
//! as reference signals, e.g. for testing pitch detection.
//!
//! ```
//! use phasor::{Fm, Pulse, Seek, Signal, Sine};
//!
//! let sample_rate = 44100;
//! let mut sine = Sine::new(440.0, sample_rate);
//! let mut square = Pulse::new(220.0, 0.5, sample_rate);
//! let mut bell = Fm::new(280.0, 0.2, 200.0, sample_rate);
//!
//! // In audio callback:
//! # let out = &mut [0.0f32; 64][..];
//! sine.sample(out);
//! for x in out.iter_mut() {
//!     *x += 0.5 * square.next_sample();
//! }
//!
//! // Read half a block ahead without disturbing timing
//! let ahead = bell.sample_at(32);
//! # let _ = ahead;
//! ```
//!
//! The crate is `no_std` and never allocates.

#![no_std]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

mod accum;
mod fm;
pub mod freq;
mod gain;
mod math;
mod mix;
mod phase;
mod pulse;
mod signal;
mod sin_table;
mod sine;

pub use accum::Accumulator;
pub use fm::Fm;
pub use gain::FixedGain;
pub use mix::Mix;
pub use phase::Phase;
pub use pulse::Pulse;
pub use signal::{Iter, Seek, Signal};
pub use sin_table::{sin, sin_lookup};
pub use sine::Sine;

/// Unitless instantaneous sound wave amplitude measurement
pub type Sample = f32;
