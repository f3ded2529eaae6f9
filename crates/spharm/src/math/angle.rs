//! Trigonometry of angles given in degrees.

// External dependencies
use num_traits::Float;

/// Sine and cosine of `x` degrees.
///
/// The argument is reduced exactly to `[-45, 45]` before conversion to
/// radians, so multiples of 90 give exact results and large arguments lose
/// no accuracy.
pub fn sincosd<T: Float>(x: T) -> (T, T) {
    let ninety = T::from(90).unwrap_or_else(T::nan);
    let full_turn = ninety + ninety + ninety + ninety;

    let r = x % full_turn;
    let quadrant = (r / ninety).round();
    let r = (r - ninety * quadrant).to_radians();
    let (s, c) = (r.sin(), r.cos());

    let (sinx, cosx) = match quadrant.to_i64().unwrap_or(0).rem_euclid(4) {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    };

    // -0 only for sin(-0).
    if x != T::zero() {
        (sinx + T::zero(), cosx + T::zero())
    } else {
        (x, T::one())
    }
}
