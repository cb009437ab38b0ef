//! Factorials, permutations and combinations over exact 64-bit integers.
//!
//! Arithmetic is checked: a result that does not fit in `i64` is reported as
//! [`DomainError::Overflow`] by the strict forms and collapses to 0 in the
//! default forms, never wrapping around silently.

use crate::errors::{DomainError, Outcome, Saturate};

/// `n!`.
pub fn try_factorial(n: i32) -> Outcome<i64> {
    if n < 0 {
        return Err(DomainError::InvalidCount("combinatorics::factorial"));
    }
    (2..=i64::from(n)).try_fold(1_i64, |acc, i| {
        acc.checked_mul(i)
            .ok_or(DomainError::Overflow("combinatorics::factorial"))
    })
}

/// `n!`; 0 for negative `n` or when the result exceeds `i64` (n > 20).
#[must_use]
pub fn factorial(n: i32) -> i64 {
    try_factorial(n).or_zero()
}

/// Ordered selections `n! / (n − r)!`.
pub fn try_permutation(n: i32, r: i32) -> Outcome<i64> {
    if n < 0 || r < 0 || r > n {
        return Err(DomainError::InvalidCount("combinatorics::permutation"));
    }
    let n = i64::from(n);
    (0..i64::from(r)).try_fold(1_i64, |acc, i| {
        acc.checked_mul(n - i)
            .ok_or(DomainError::Overflow("combinatorics::permutation"))
    })
}

/// Ordered selections of `r` out of `n`; 0 when `r > n`, either argument is
/// negative, or the result overflows.
#[must_use]
pub fn permutation(n: i32, r: i32) -> i64 {
    try_permutation(n, r).or_zero()
}

/// Unordered selections `n! / (r!·(n − r)!)`.
///
/// Uses the symmetry `C(n, r) = C(n, n − r)` and a multiply-then-divide pass;
/// every intermediate value is itself a binomial coefficient, so each division
/// is exact. The product `C(n, i)·(n − i)` is formed in `i128`, so only the
/// coefficients themselves must fit in `i64`. They grow with `i` up to
/// `min(r, n − r)`, so the first one that does not fit proves overflow.
pub fn try_combination(n: i32, r: i32) -> Outcome<i64> {
    if n < 0 || r < 0 || r > n {
        return Err(DomainError::InvalidCount("combinatorics::combination"));
    }
    let n = i64::from(n);
    let r = i64::from(r).min(n - i64::from(r));
    (0..r).try_fold(1_i64, |acc, i| {
        let next = i128::from(acc) * i128::from(n - i) / i128::from(i + 1);
        i64::try_from(next).map_err(|_| DomainError::Overflow("combinatorics::combination"))
    })
}

/// Unordered selections of `r` out of `n`; 0 on invalid counts or overflow.
#[must_use]
pub fn combination(n: i32, r: i32) -> i64 {
    try_combination(n, r).or_zero()
}
