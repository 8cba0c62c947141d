use crate::{sin_table::sin, Accumulator, Phase, Sample, Seek, Signal};

/// A sine wave of a particular frequency, forever
///
/// Samples come from the table lookup in [`sin_lookup`](crate::sin_lookup), driven by an owned
/// [`Accumulator`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sine {
    base: Accumulator,
}

impl Sine {
    /// Construct a sine wave cycling `frequency` times per second at `sample_rate`
    pub fn new(frequency: f64, sample_rate: u32) -> Self {
        Self {
            base: Accumulator::with_frequency(frequency, sample_rate),
        }
    }

    /// Construct a sine wave advancing by `increment` every sample
    pub fn from_increment(increment: Phase) -> Self {
        Self {
            base: Accumulator::new(increment),
        }
    }

    /// Start the wave at `phase` rather than at zero
    ///
    /// `phase` doesn't impact the sound of a single sine wave, but shifts it relative to other
    /// waves, e.g. the harmonics of a composite test signal.
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.base.set_phase(phase);
        self
    }

    /// Whether the most recent sample started a new cycle
    pub fn is_phase_start(&self) -> bool {
        self.base.is_phase_start()
    }

    /// The underlying phase accumulator
    pub fn accumulator(&self) -> &Accumulator {
        &self.base
    }

    /// Mutable access to the underlying phase accumulator, e.g. to retune or resynchronize
    pub fn accumulator_mut(&mut self) -> &mut Accumulator {
        &mut self.base
    }
}

impl Signal for Sine {
    #[inline]
    fn next_sample(&mut self) -> Sample {
        sin(self.base.advance())
    }
}

impl Seek for Sine {
    #[inline]
    fn sample_at(&mut self, offset: i32) -> Sample {
        sin(self.base.advance_at(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let mut s = Sine::new(1000.0, 8000);
        assert_eq!(s.next_sample(), 0.0);
        assert!((s.next_sample() - core::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
        assert_eq!(s.next_sample(), 1.0);
    }

    #[test]
    fn upward_zero_crossings() {
        let mut s = Sine::new(440.0, 44100);
        let expected = (44100.0f64 / 440.0).round() as i64;
        let mut prev = s.next_sample();
        let mut last_crossing = None;
        let mut crossings = 0;
        for i in 1..44100i64 {
            let x = s.next_sample();
            if prev < 0.0 && x >= 0.0 {
                if let Some(last) = last_crossing {
                    let distance: i64 = i - last;
                    assert!((distance - expected).abs() <= 1, "distance {}", distance);
                    crossings += 1;
                }
                last_crossing = Some(i);
            }
            prev = x;
        }
        assert!(crossings > 400);
    }

    #[test]
    fn initial_phase() {
        let mut s = Sine::from_increment(Phase::from_fraction(0.125)).with_phase(Phase::HALF);
        assert!(s.next_sample().abs() < 1e-6);
        assert!((s.next_sample() + core::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn look_behind() {
        let mut s = Sine::from_increment(Phase::from_fraction(0.25));
        s.next_sample();
        // Current sample is at a quarter cycle; one sample back is the start
        assert_eq!(s.sample_at(-1), 0.0);
        assert_eq!(s.next_sample(), 0.0);
        assert_eq!(s.accumulator().phase(), Phase::from_fraction(0.75));
    }

    #[test]
    fn retune() {
        let mut s = Sine::new(100.0, 1000);
        s.accumulator_mut().set_frequency(250.0, 1000);
        assert_eq!(s.next_sample(), 0.0);
        assert_eq!(s.next_sample(), 1.0);
        assert!(!s.is_phase_start());
        s.next_sample();
        s.next_sample();
        assert!(s.is_phase_start());
    }
}
