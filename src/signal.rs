use crate::Sample;

/// An audio signal produced one sample at a time
///
/// Every call to [`next_sample`](Self::next_sample) moves the signal forward by exactly one
/// sample. Implementations must not wait, allocate or free: they are meant to be stepped directly
/// from a real-time audio thread that owns them.
pub trait Signal {
    /// Produce the next sample
    fn next_sample(&mut self) -> Sample;

    /// Fill `out` with consecutive samples
    #[inline]
    fn sample(&mut self, out: &mut [Sample]) {
        for x in out {
            *x = self.next_sample();
        }
    }

    /// Borrow as an endless iterator of samples
    #[inline]
    fn iter(&mut self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter(self)
    }
}

/// A signal that can be read at a shifted instant
pub trait Seek: Signal {
    /// Like [`Signal::next_sample`], but evaluate the waveform `offset` samples away from the
    /// current position
    ///
    /// The signal still moves forward by exactly one sample, so interleaving shifted and unshifted
    /// reads never disturbs its timing. `offset` may be negative.
    fn sample_at(&mut self, offset: i32) -> Sample;
}

impl<T: Signal + ?Sized> Signal for &mut T {
    #[inline]
    fn next_sample(&mut self) -> Sample {
        (**self).next_sample()
    }
}

impl<T: Seek + ?Sized> Seek for &mut T {
    #[inline]
    fn sample_at(&mut self, offset: i32) -> Sample {
        (**self).sample_at(offset)
    }
}

/// Endless iterator over a signal's samples, see [`Signal::iter`]
pub struct Iter<'a, T>(&'a mut T);

impl<T: Signal> Iterator for Iter<'_, T> {
    type Item = Sample;

    #[inline]
    fn next(&mut self) -> Option<Sample> {
        Some(self.0.next_sample())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
