use crate::{Error, Num, Result, DISTANCE_DIVISOR, DISTANCE_EXPONENT, DISTANCE_OFFSET};

/// Compresses a physical distance in km into a display distance.
///
/// scale(x) = (x^(1 / 2.2) / ln(x) - 100) / 2
///
/// The result is only meaningful for `x > 0` and `x != 1`, see [`check_domain`].
#[inline]
pub fn scale(x: Num) -> Num {
    (x.powf(1.0 / DISTANCE_EXPONENT) / x.ln() - DISTANCE_OFFSET) / DISTANCE_DIVISOR
}

/// Generalized form of [`scale`] used for orbit rings and body markers.
///
/// scale_orbit(x, factor, offset) = x^(1 / factor) / ln(x) + offset
///
/// With `factor = 2.2` and `offset = -100` this is exactly `2 * scale(x)`, so a
/// ring drawn with that diameter passes through the body.
#[inline]
pub fn scale_orbit(x: Num, factor: Num, offset: Num) -> Num {
    x.powf(1.0 / factor) / x.ln() + offset
}

/// Returns `x` if both scaling functions are well defined for it.
pub fn check_domain(x: Num) -> Result<Num> {
    if x.is_finite() && x > 0.0 && x != 1.0 {
        Ok(x)
    } else {
        Err(Error::OutOfDomain { value: x })
    }
}
