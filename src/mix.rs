use crate::{Sample, Seek, Signal};

/// Sums two signals sample by sample
///
/// Both inputs advance together, once per output sample. Nest to combine more than two:
///
/// ```
/// use phasor::{FixedGain, Mix, Signal, Sine};
/// // Fundamental plus second and third harmonics
/// let mut signal = Mix::new(
///     FixedGain::from_ratio(Sine::new(110.0, 44100), 0.3),
///     Mix::new(
///         FixedGain::from_ratio(Sine::new(220.0, 44100), 0.4),
///         FixedGain::from_ratio(Sine::new(330.0, 44100), 0.3),
///     ),
/// );
/// assert_eq!(signal.next_sample(), 0.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mix<A, B> {
    a: A,
    b: B,
}

impl<A, B> Mix<A, B> {
    /// Mix `a` with `b`
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Access both inputs
    pub fn inner(&self) -> (&A, &B) {
        (&self.a, &self.b)
    }

    /// Mutable access to both inputs
    pub fn inner_mut(&mut self) -> (&mut A, &mut B) {
        (&mut self.a, &mut self.b)
    }
}

impl<A: Signal, B: Signal> Signal for Mix<A, B> {
    #[inline]
    fn next_sample(&mut self) -> Sample {
        self.a.next_sample() + self.b.next_sample()
    }
}

impl<A: Seek, B: Seek> Seek for Mix<A, B> {
    #[inline]
    fn sample_at(&mut self, offset: i32) -> Sample {
        self.a.sample_at(offset) + self.b.sample_at(offset)
    }
}
