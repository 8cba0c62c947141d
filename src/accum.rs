use crate::{freq, Phase};

/// Phase accumulator: the clock driving every oscillator in this crate
///
/// Holds a current phase and a per-sample increment. Each [`advance`](Self::advance) returns the
/// phase *before* stepping, so the first sample after construction is taken at the start of a
/// cycle and sample `n` reflects `n` increments.
///
/// ```
/// use phasor::{Accumulator, Phase};
/// let mut accum = Accumulator::new(Phase::from_fraction(0.25));
/// assert_eq!(accum.advance(), Phase::ZERO);
/// assert_eq!(accum.advance(), Phase::from_fraction(0.25));
/// // Look two samples ahead without disturbing the clock
/// assert_eq!(accum.advance_at(2), Phase::from_fraction(0.0));
/// assert_eq!(accum.phase(), Phase::from_fraction(0.75));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Accumulator {
    freq: Phase,
    phase: Phase,
}

impl Accumulator {
    /// Construct with a per-sample `increment`, starting at phase zero
    pub fn new(increment: Phase) -> Self {
        Self {
            freq: increment,
            phase: Phase::ZERO,
        }
    }

    /// Construct an accumulator cycling `frequency` times per second at `sample_rate`
    pub fn with_frequency(frequency: f64, sample_rate: u32) -> Self {
        Self::new(freq::increment(frequency, sample_rate))
    }

    /// Return the current phase, then step forward by one sample
    #[inline]
    pub fn advance(&mut self) -> Phase {
        let val = self.phase;
        self.phase += self.freq;
        val
    }

    /// Like [`advance`](Self::advance), but return the phase `offset` samples away from the
    /// current one
    ///
    /// Negative offsets look behind, positive offsets look ahead. Only the returned value is
    /// shifted: the stored phase still moves forward by exactly one increment.
    #[inline]
    pub fn advance_at(&mut self, offset: i32) -> Phase {
        self.advance() + offset * self.freq
    }

    /// Whether the most recent step crossed, or started at, the beginning of a cycle
    ///
    /// With a zero increment the phase never moves, and this is true only at phase zero.
    #[inline]
    pub fn is_phase_start(&self) -> bool {
        self.phase < self.freq || self.phase == Phase::ZERO
    }

    /// Per-sample increment
    #[inline]
    pub fn freq(&self) -> Phase {
        self.freq
    }

    /// Replace the per-sample increment
    pub fn set_freq(&mut self, increment: Phase) {
        self.freq = increment;
    }

    /// Cycle `frequency` times per second at `sample_rate`
    pub fn set_frequency(&mut self, frequency: f64, sample_rate: u32) {
        self.freq = freq::increment(frequency, sample_rate);
    }

    /// Cycle once every `samples`
    pub fn set_period(&mut self, samples: f64) {
        self.freq = freq::period_increment(samples);
    }

    /// Cycle once every `seconds` at `sample_rate`
    pub fn set_period_secs(&mut self, seconds: f64, sample_rate: u32) {
        self.freq = freq::period_secs_increment(seconds, sample_rate);
    }

    /// Current phase, i.e. the value the next [`advance`](Self::advance) will return
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Force the current phase, e.g. to reset or synchronize oscillators
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Step forward one sample without reading
    #[inline]
    pub fn incr(&mut self) {
        self.phase += self.freq;
    }

    /// Step back one sample
    #[inline]
    pub fn decr(&mut self) {
        self.phase -= self.freq;
    }
}

/// Endless stream of [`Accumulator::advance`] results
impl Iterator for Accumulator {
    type Item = Phase;

    #[inline]
    fn next(&mut self) -> Option<Phase> {
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
