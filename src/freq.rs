//! Conversions from frequencies and periods to per-sample phase increments
//!
//! Adding an increment to a [`Phase`] `sample_rate / frequency` times advances it by one full
//! cycle, within the rounding of the fixed-point representation.

use crate::Phase;

/// Per-sample increment for an oscillator cycling `frequency` times per second
///
/// A frequency of 0 yields a zero increment, i.e. a static oscillator. `sample_rate` must be
/// nonzero, and the result is only meaningful for frequencies below the Nyquist limit.
pub fn increment(frequency: f64, sample_rate: u32) -> Phase {
    debug_assert!(sample_rate > 0, "sample rate must be nonzero");
    Phase::from_fraction(frequency / f64::from(sample_rate))
}

/// Per-sample increment for an oscillator with a period of `samples`
///
/// `samples` must be nonzero.
pub fn period_increment(samples: f64) -> Phase {
    debug_assert!(samples != 0.0, "period must be nonzero");
    Phase::from_fraction(1.0 / samples)
}

/// Per-sample increment for an oscillator with a period of `seconds` at `sample_rate`
pub fn period_secs_increment(seconds: f64, sample_rate: u32) -> Phase {
    period_increment(seconds * f64::from(sample_rate))
}
