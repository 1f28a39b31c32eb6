use crate::math::scale;
use crate::{Num, Position, TWO_PI};

/// Fraction of one revolution completed after `time` days.
///
/// Not wrapped: 2.5 means two full orbits plus half of the next one. A zero
/// period yields zero progress, although attached bodies never carry one.
#[inline]
pub fn progress(time: Num, period: Num) -> Num {
    if period == 0.0 {
        0.0
    } else {
        time / period
    }
}

/// Orbital angle in radians after `time` days.
#[inline]
pub fn angle(time: Num, period: Num) -> Num {
    progress(time, period) * TWO_PI
}

/// Offset from the orbital center after `time` days, in display units.
pub fn orbital_offset(radius: Num, period: Num, time: Num) -> Position {
    Position::from_polar(scale(radius), angle(time, period))
}
