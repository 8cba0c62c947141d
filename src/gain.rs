use crate::{math::db_to_ratio, Sample, Seek, Signal};

/// Amplifies a signal by a constant amount
///
/// Useful for setting the relative levels of the partials in a composite test signal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedGain<T> {
    gain: f32,
    inner: T,
}

impl<T> FixedGain<T> {
    /// Amplify `signal` by `db` decibels
    ///
    /// Decibels are perceptually linear. Negative values make the signal quieter.
    pub fn new(signal: T, db: f32) -> Self {
        Self::from_ratio(signal, db_to_ratio(db))
    }

    /// Scale `signal` by a linear amplitude `ratio`
    ///
    /// Unlike [`new`](Self::new), this allows a signal to be zeroed out, or have its polarity
    /// inverted with a negative factor.
    pub fn from_ratio(signal: T, ratio: f32) -> Self {
        Self {
            gain: ratio,
            inner: signal,
        }
    }

    /// Linear amplitude scaling factor
    pub fn ratio(&self) -> f32 {
        self.gain
    }

    /// Access the inner signal
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Mutable access to the inner signal
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Signal> Signal for FixedGain<T> {
    #[inline]
    fn next_sample(&mut self) -> Sample {
        self.inner.next_sample() * self.gain
    }

    fn sample(&mut self, out: &mut [Sample]) {
        self.inner.sample(out);
        for x in out {
            *x *= self.gain;
        }
    }
}

impl<T: Seek> Seek for FixedGain<T> {
    #[inline]
    fn sample_at(&mut self, offset: i32) -> Sample {
        self.inner.sample_at(offset) * self.gain
    }
}
