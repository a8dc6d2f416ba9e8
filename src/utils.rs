//! Integer equations shared by the calendar converters.

use num_traits::{Euclid, PrimInt};

// NOTE: Calendrical formulas use mathematical floor division throughout.
// Rust's `/` truncates toward zero, which is wrong for negative years and
// days before the Hebrew epoch, so every division goes through here.

/// Floor division, `floor(x / y)` for a positive divisor.
#[inline]
pub(crate) fn floor_div<T: PrimInt + Euclid>(x: T, y: T) -> T {
    x.div_euclid(&y)
}

/// Mathematical modulo, result in `[0, y)` for a positive divisor.
#[inline]
pub(crate) fn modulo<T: PrimInt + Euclid>(x: T, y: T) -> T {
    x.rem_euclid(&y)
}

/// Adjusted remainder, result in `[1, y]` instead of `[0, y)`.
#[inline]
pub(crate) fn amod<T: PrimInt + Euclid>(x: T, y: T) -> T {
    let rem = modulo(x, y);
    if rem.is_zero() {
        y
    } else {
        rem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(floor_div(-234i64, 19), -13);
        assert_eq!(floor_div(-14, 7), -2);
    }

    #[test]
    fn modulo_is_never_negative() {
        assert_eq!(modulo(-1, 7), 6);
        assert_eq!(modulo(-1149i64, 7), 6);
        assert_eq!(modulo(14, 7), 0);
    }

    #[test]
    fn amod_replaces_zero_with_divisor() {
        assert_eq!(amod(14, 7), 7);
        assert_eq!(amod(732_877, 7), 5);
        assert_eq!(amod(0, 12), 12);
        assert_eq!(amod(-1, 12), 11);
        assert_eq!(amod(5, 12), 5);
    }
}
