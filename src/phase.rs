use core::{
    fmt,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

use num_traits::{float::FloatCore, Bounded, WrappingAdd, WrappingSub, Zero};

/// Position within one waveform cycle
///
/// A fixed-point fraction in [0, 1) stored as a `u32`, where raw value `r` means `r / 2^32`
/// cycles. Addition and subtraction always wrap, so stepping past the end of a cycle lands at the
/// start of the next one. No `Phase` is ever out of range.
///
/// ```
/// use phasor::Phase;
/// let a = Phase::from_fraction(0.75);
/// let b = Phase::from_fraction(0.5);
/// assert_eq!(a + b, Phase::from_fraction(0.25));
/// assert_eq!(b - a, Phase::from_fraction(0.75));
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phase(u32);

impl Phase {
    /// Start of the cycle
    pub const ZERO: Phase = Phase(0);
    /// Half a cycle
    pub const HALF: Phase = Phase(1 << 31);
    /// The last representable position before the cycle wraps
    pub const MAX: Phase = Phase(u32::MAX);

    /// Number of raw steps in one cycle
    const ONE: f64 = 4_294_967_296.0;

    /// Construct from the raw fixed-point representation
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw fixed-point representation
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Construct from a fraction of a cycle, rounding to the nearest raw step
    ///
    /// Only the fractional part is kept, so `1.25` and `0.25` are the same phase and negative
    /// inputs count backwards from the end of the cycle. Non-finite inputs yield [`Phase::ZERO`].
    pub fn from_fraction(x: f64) -> Self {
        if !x.is_finite() {
            return Self::ZERO;
        }
        let fract = x - FloatCore::floor(x);
        // `fract * ONE` may round up to exactly one cycle, which wraps to zero
        Self(FloatCore::round(fract * Self::ONE) as u64 as u32)
    }

    /// The position as a fraction of a cycle in [0, 1)
    #[inline]
    pub fn to_fraction(self) -> f64 {
        f64::from(self.0) / Self::ONE
    }
}

impl fmt::Debug for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phase({:#010x} ~ {})", self.0, self.to_fraction())
    }
}

impl From<Phase> for f64 {
    fn from(x: Phase) -> f64 {
        x.to_fraction()
    }
}

impl Add for Phase {
    type Output = Phase;

    #[inline]
    fn add(self, rhs: Phase) -> Phase {
        Phase(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Phase {
    #[inline]
    fn add_assign(&mut self, rhs: Phase) {
        *self = *self + rhs;
    }
}

impl Sub for Phase {
    type Output = Phase;

    #[inline]
    fn sub(self, rhs: Phase) -> Phase {
        Phase(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Phase {
    #[inline]
    fn sub_assign(&mut self, rhs: Phase) {
        *self = *self - rhs;
    }
}

impl Neg for Phase {
    type Output = Phase;

    #[inline]
    fn neg(self) -> Phase {
        Phase(self.0.wrapping_neg())
    }
}

/// Scale by a signed sample count, e.g. `offset * increment`
impl Mul<Phase> for i32 {
    type Output = Phase;

    #[inline]
    fn mul(self, rhs: Phase) -> Phase {
        // Two's complement makes a negative count step backwards modulo one cycle
        Phase(rhs.0.wrapping_mul(self as u32))
    }
}

impl Mul<i32> for Phase {
    type Output = Phase;

    #[inline]
    fn mul(self, rhs: i32) -> Phase {
        rhs * self
    }
}

impl WrappingAdd for Phase {
    #[inline]
    fn wrapping_add(&self, v: &Self) -> Self {
        *self + *v
    }
}

impl WrappingSub for Phase {
    #[inline]
    fn wrapping_sub(&self, v: &Self) -> Self {
        *self - *v
    }
}

impl Zero for Phase {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Bounded for Phase {
    fn min_value() -> Self {
        Self::ZERO
    }

    fn max_value() -> Self {
        Self::MAX
    }
}
