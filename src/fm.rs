use crate::{freq, sin_table::sin, Accumulator, Phase, Sample, Seek, Signal};

/// Two-operator frequency modulation
///
/// A modulator sine wave, scaled by the modulator gain, shifts the phase of a carrier sine wave
/// before lookup. The gain is measured in cycles of carrier phase per unit of modulator amplitude:
/// a gain of `0.25` swings the carrier up to a quarter cycle either way. With zero gain the output
/// is exactly a [`Sine`](crate::Sine) at the carrier frequency.
///
/// ```
/// use phasor::{Fm, Signal, Sine};
/// let mut fm = Fm::new(10.0, 0.0, 440.0, 44100);
/// let mut sine = Sine::new(440.0, 44100);
/// assert!(fm.iter().zip(sine.iter()).take(1000).all(|(a, b)| a == b));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fm {
    carrier: Accumulator,
    modulator: Accumulator,
    gain: f32,
}

impl Fm {
    /// Construct from modulator and carrier frequencies in Hz at `sample_rate`
    pub fn new(modulator_freq: f64, gain: f32, carrier_freq: f64, sample_rate: u32) -> Self {
        Self::from_increments(
            freq::increment(modulator_freq, sample_rate),
            gain,
            freq::increment(carrier_freq, sample_rate),
        )
    }

    /// Construct from per-sample modulator and carrier phase increments
    pub fn from_increments(modulator: Phase, gain: f32, carrier: Phase) -> Self {
        Self {
            carrier: Accumulator::new(carrier),
            modulator: Accumulator::new(modulator),
            gain,
        }
    }

    /// Cycles of carrier phase per unit of modulator amplitude
    pub fn modulator_gain(&self) -> f32 {
        self.gain
    }

    /// Replace the modulator gain, taking effect from the next sample
    pub fn set_modulator_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    /// Whether the most recent sample started a new carrier cycle
    pub fn is_phase_start(&self) -> bool {
        self.carrier.is_phase_start()
    }

    /// The carrier's phase accumulator
    pub fn carrier(&self) -> &Accumulator {
        &self.carrier
    }

    /// Mutable access to the carrier's phase accumulator
    pub fn carrier_mut(&mut self) -> &mut Accumulator {
        &mut self.carrier
    }

    /// The modulator's phase accumulator
    pub fn modulator(&self) -> &Accumulator {
        &self.modulator
    }

    /// Mutable access to the modulator's phase accumulator
    pub fn modulator_mut(&mut self) -> &mut Accumulator {
        &mut self.modulator
    }

    /// Carrier sample at `carrier` phase, shifted by the modulator's output at `modulator` phase
    #[inline]
    fn modulate(&self, modulator: Phase, carrier: Phase) -> Sample {
        let shift = Phase::from_fraction(f64::from(sin(modulator)) * f64::from(self.gain));
        sin(carrier + shift)
    }
}

impl Signal for Fm {
    #[inline]
    fn next_sample(&mut self) -> Sample {
        let modulator = self.modulator.advance();
        let carrier = self.carrier.advance();
        self.modulate(modulator, carrier)
    }
}

impl Seek for Fm {
    #[inline]
    fn sample_at(&mut self, offset: i32) -> Sample {
        let modulator = self.modulator.advance_at(offset);
        let carrier = self.carrier.advance_at(offset);
        self.modulate(modulator, carrier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sine;

    #[test]
    fn zero_gain_is_carrier_sine() {
        let mut fm = Fm::new(10.0, 0.0, 440.0, 44100);
        let mut sine = Sine::new(440.0, 44100);
        for i in 0..1000 {
            let (a, b) = (fm.next_sample(), sine.next_sample());
            assert!((a - b).abs() < 1e-6, "sample {}: {} != {}", i, a, b);
        }
    }

    #[test]
    fn zero_gain_with_offsets() {
        let mut fm = Fm::new(37.0, 0.0, 523.25, 48000);
        let mut sine = Sine::new(523.25, 48000);
        for i in 0..500 {
            let offset = (i % 7) - 3;
            assert_eq!(fm.sample_at(offset).to_bits(), sine.sample_at(offset).to_bits());
        }
    }

    #[test]
    fn quarter_cycle_deviation() {
        // Modulator frozen at its peak: the carrier is shifted by exactly the gain
        let mut fm = Fm::from_increments(Phase::ZERO, 0.25, Phase::from_fraction(0.125));
        fm.modulator_mut().set_phase(Phase::from_fraction(0.25));
        let out = [fm.next_sample(), fm.next_sample()];
        assert_eq!(out[0], 1.0);
        assert!((out[1] - core::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn negative_modulation_wraps_backwards() {
        let mut fm = Fm::from_increments(Phase::ZERO, 0.25, Phase::ZERO);
        fm.modulator_mut().set_phase(Phase::from_fraction(0.75));
        assert_eq!(fm.next_sample(), -1.0);
    }

    #[test]
    fn both_operators_advance_once() {
        let mut fm = Fm::new(10.0, 0.1, 440.0, 44100);
        let m = fm.modulator().freq();
        let c = fm.carrier().freq();
        fm.sample_at(25);
        fm.next_sample();
        fm.sample_at(-9);
        assert_eq!(fm.modulator().phase(), 3 * m);
        assert_eq!(fm.carrier().phase(), 3 * c);
    }

    #[test]
    fn offset_matches_future_sample() {
        let template = Fm::new(13.0, 0.05, 220.0, 44100);
        let mut probed = template;
        let shifted = probed.sample_at(5);
        let mut stepped = template;
        let expected = stepped.iter().nth(5).unwrap();
        assert_eq!(shifted.to_bits(), expected.to_bits());
    }

    #[test]
    fn gain_applies_to_later_samples() {
        let mut a = Fm::new(10.0, 0.0, 440.0, 44100);
        let mut b = a;
        for _ in 0..100 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
        b.set_modulator_gain(0.5);
        assert_eq!(b.modulator_gain(), 0.5);
        let diverged = (0..100).any(|_| a.next_sample() != b.next_sample());
        assert!(diverged);
        assert!(a.is_phase_start() == b.is_phase_start());
    }
}
