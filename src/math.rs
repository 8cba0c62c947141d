use core::f64::consts::{FRAC_PI_2, PI, TAU};

/// `sin(2π·t)` for `t` in [0, 1], usable in constant evaluation
///
/// Folds the angle into [-π/2, π/2] and sums the Taylor series through the 17th power, which is
/// accurate to well under 1e-12 there.
pub const fn sin_turns(t: f64) -> f64 {
    let mut x = if t > 0.5 { (t - 1.0) * TAU } else { t * TAU };
    if x > FRAC_PI_2 {
        x = PI - x;
    } else if x < -FRAC_PI_2 {
        x = -PI - x;
    }

    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    let mut n = 1;
    while n < 9 {
        let k = (2 * n) as f64;
        term = -term * x2 / (k * (k + 1.0));
        sum += term;
        n += 1;
    }
    sum
}

/// Convert decibels to a linear amplitude ratio
pub fn db_to_ratio(db: f32) -> f32 {
    num_traits::Float::powf(10.0f32, db / 20.0)
}
