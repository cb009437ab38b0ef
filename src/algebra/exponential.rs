//! Exponentials and interest compounding.

use crate::math::Scalar;

/// `eˣ`.
#[must_use]
pub fn exp(x: Scalar) -> Scalar {
    x.exp()
}

/// `base^exponent`.
#[must_use]
pub fn exp_base(base: Scalar, exponent: Scalar) -> Scalar {
    base.powf(exponent)
}

/// Balance after compounding `periods` times per unit of `time` at `rate`:
/// `P·(1 + r/n)^(n·t)`.
///
/// Zero periods means no compounding at all and the principal is returned
/// unchanged.
#[must_use]
pub fn compound_interest(principal: Scalar, rate: Scalar, time: Scalar, periods: i32) -> Scalar {
    if periods == 0 {
        return principal;
    }
    let n = Scalar::from(periods);
    principal * (1.0 + rate / n).powf(n * time)
}

/// Continuously compounded balance `P·e^(r·t)`.
#[must_use]
pub fn continuous_compound(principal: Scalar, rate: Scalar, time: Scalar) -> Scalar {
    principal * (rate * time).exp()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn yearly_compounding() {
        assert_relative_eq!(compound_interest(1000.0, 0.1, 2.0, 1), 1210.0, epsilon = 1.0e-9);
        assert_eq!(compound_interest(1000.0, 0.1, 2.0, 0), 1000.0);
    }

    #[test]
    fn frequent_compounding_approaches_continuous() {
        let discrete = compound_interest(100.0, 0.05, 3.0, 1_000_000);
        let continuous = continuous_compound(100.0, 0.05, 3.0);
        assert_relative_eq!(discrete, continuous, max_relative = 1.0e-6);
    }

    #[test]
    fn exponentials_agree() {
        assert_relative_eq!(exp(1.0), std::f64::consts::E);
        assert_relative_eq!(exp_base(std::f64::consts::E, 2.5), exp(2.5), epsilon = 1.0e-12);
    }
}
