//! Algebra catalog: equation solving, means, logarithms, combinatorics,
//! trigonometry in degrees and descriptive statistics.

pub mod arithmetic;
pub mod combinatorics;
pub mod exponential;
pub mod geometric;
pub mod linear;
pub mod logarithm;
pub mod quadratic;
pub mod statistics;
pub mod trigonometry;
