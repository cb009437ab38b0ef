//! Quadratic polynomials `a·x² + b·x + c`.
//!
//! A zero leading coefficient is never degraded into a linear equation: the
//! vertex and root formulas report it as a division by zero instead.

use num_complex::Complex;

use crate::errors::{checked_div, DomainError, Outcome, Saturate};
use crate::math::{CScalar, Scalar};

/// Discriminant `b² − 4ac`.
#[inline]
#[must_use]
pub fn discriminant(a: Scalar, b: Scalar, c: Scalar) -> Scalar {
    b * b - 4.0 * a * c
}

/// Abscissa of the parabola's vertex, `−b / 2a`.
pub fn try_vertex_x(a: Scalar, b: Scalar) -> Outcome {
    checked_div(-b, 2.0 * a, "quadratic::vertex_x")
}

/// Abscissa of the vertex; 0 when `a = 0`.
#[must_use]
pub fn vertex_x(a: Scalar, b: Scalar) -> Scalar {
    try_vertex_x(a, b).or_zero()
}

/// Ordinate of the vertex: the polynomial evaluated at [`vertex_x`].
///
/// With `a = 0` the strict form fails; the default form evaluates the
/// polynomial at `x = 0` and therefore returns `c`.
pub fn try_vertex_y(a: Scalar, b: Scalar, c: Scalar) -> Outcome {
    let x = try_vertex_x(a, b)?;
    Ok(evaluate(a, b, c, x))
}

/// Ordinate of the vertex.
#[must_use]
pub fn vertex_y(a: Scalar, b: Scalar, c: Scalar) -> Scalar {
    evaluate(a, b, c, vertex_x(a, b))
}

/// Evaluates `a·x² + b·x + c`.
#[inline]
#[must_use]
pub fn evaluate(a: Scalar, b: Scalar, c: Scalar, x: Scalar) -> Scalar {
    a * x * x + b * x + c
}

/// Both roots of the quadratic as complex numbers, the `+√Δ` root first.
pub fn try_roots(a: Scalar, b: Scalar, c: Scalar) -> Outcome<(CScalar, CScalar)> {
    if a == 0.0 {
        return Err(DomainError::DivisionByZero("quadratic::roots"));
    }
    let delta = Complex::new(discriminant(a, b, c), 0.0).sqrt();
    let minus_b = Complex::new(-b, 0.0);
    let two_a = 2.0 * a;
    Ok(((minus_b + delta) / two_a, (minus_b - delta) / two_a))
}

/// Both roots of the quadratic; two zero roots when `a = 0`.
#[must_use]
pub fn roots(a: Scalar, b: Scalar, c: Scalar) -> (CScalar, CScalar) {
    try_roots(a, b, c).unwrap_or((Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)))
}

/// Real roots, when the discriminant is non-negative. `None` for complex roots
/// or a zero leading coefficient.
#[must_use]
pub fn real_roots(a: Scalar, b: Scalar, c: Scalar) -> Option<(Scalar, Scalar)> {
    let d = discriminant(a, b, c);
    if a == 0.0 || d < 0.0 {
        return None;
    }
    let sqrt_d = d.sqrt();
    Some(((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a)))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn discriminant_is_exact_polynomial() {
        assert_eq!(discriminant(1.0, -3.0, 2.0), 1.0);
        assert_eq!(discriminant(2.0, 1.0, 5.0), 1.0 - 40.0);
    }

    #[test]
    fn vertex_of_shifted_parabola() {
        // (x - 3)² + 2 = x² - 6x + 11
        assert_relative_eq!(vertex_x(1.0, -6.0), 3.0);
        assert_relative_eq!(vertex_y(1.0, -6.0, 11.0), 2.0);
    }

    #[test]
    fn zero_leading_coefficient_is_not_linear() {
        assert_eq!(vertex_x(0.0, 4.0), 0.0);
        assert_eq!(vertex_y(0.0, 4.0, 7.0), 7.0);
        assert_eq!(
            try_vertex_y(0.0, 4.0, 7.0),
            Err(DomainError::DivisionByZero("quadratic::vertex_x"))
        );
        assert!(real_roots(0.0, 4.0, 7.0).is_none());
    }

    #[test]
    fn complex_roots_are_conjugates() {
        let (r1, r2) = roots(1.0, 2.0, 5.0);
        assert_relative_eq!(r1.re, -1.0, epsilon = 1.0e-12);
        assert_relative_eq!(r1.im, 2.0, epsilon = 1.0e-12);
        assert_relative_eq!(r2.im, -2.0, epsilon = 1.0e-12);
        assert!(real_roots(1.0, 2.0, 5.0).is_none());
    }

    #[test]
    fn real_roots_satisfy_polynomial() {
        let (x1, x2) = real_roots(2.0, -3.0, -5.0).expect("real roots");
        assert_relative_eq!(x1, 2.5, epsilon = 1.0e-12);
        assert_relative_eq!(x2, -1.0, epsilon = 1.0e-12);
        assert_relative_eq!(evaluate(2.0, -3.0, -5.0, x1), 0.0, epsilon = 1.0e-12);
    }
}
