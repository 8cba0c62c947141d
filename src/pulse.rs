use crate::{Accumulator, Phase, Sample, Seek, Signal};

/// A pulse wave alternating between -1 and +1
///
/// Outputs +1 while the phase is past the width threshold and -1 otherwise, so a width of half a
/// cycle yields a square wave. Transitions are hard steps: the output is not bandwidth limited and
/// aliases at high frequencies.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pulse {
    base: Accumulator,
    width: Phase,
}

impl Pulse {
    /// Construct a pulse wave cycling `frequency` times per second at `sample_rate`, switching
    /// to +1 after `width` of each cycle
    ///
    /// `width` is a fraction of a cycle, e.g. `0.5` for a square wave.
    pub fn new(frequency: f64, width: f64, sample_rate: u32) -> Self {
        Self::from_raw(
            crate::freq::increment(frequency, sample_rate),
            Phase::from_fraction(width),
        )
    }

    /// Construct from a per-sample phase increment and a phase threshold
    pub fn from_raw(increment: Phase, width: Phase) -> Self {
        Self {
            base: Accumulator::new(increment),
            width,
        }
    }

    /// Phase threshold past which the output is +1
    pub fn width(&self) -> Phase {
        self.width
    }

    /// Replace the phase threshold
    pub fn set_width(&mut self, width: Phase) {
        self.width = width;
    }

    /// Whether the most recent sample started a new cycle
    pub fn is_phase_start(&self) -> bool {
        self.base.is_phase_start()
    }

    /// The underlying phase accumulator
    pub fn accumulator(&self) -> &Accumulator {
        &self.base
    }

    /// Mutable access to the underlying phase accumulator
    pub fn accumulator_mut(&mut self) -> &mut Accumulator {
        &mut self.base
    }

    #[inline]
    fn level(&self, phase: Phase) -> Sample {
        if phase > self.width {
            1.0
        } else {
            -1.0
        }
    }
}

impl Signal for Pulse {
    #[inline]
    fn next_sample(&mut self) -> Sample {
        let phase = self.base.advance();
        self.level(phase)
    }
}

impl Seek for Pulse {
    #[inline]
    fn sample_at(&mut self, offset: i32) -> Sample {
        let phase = self.base.advance_at(offset);
        self.level(phase)
    }
}
