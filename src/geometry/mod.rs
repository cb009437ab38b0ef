//! Geometry catalog: plane shapes, solids, polygons and distances.
//!
//! Shapes expose forward formulas (dimensions → area, perimeter, volume) and,
//! where the forward formula inverts in closed form, inverse formulas
//! recovering one dimension. Angles are in degrees.

pub mod circle;
pub mod cone;
pub mod cube;
pub mod cylinder;
pub mod distance;
pub mod ellipse;
pub mod parallelogram;
pub mod polygon;
pub mod prism;
pub mod pyramid;
pub mod rectangle;
pub mod rhombus;
pub mod right_triangle;
pub mod sphere;
pub mod square;
pub mod trapezoid;
pub mod triangle;
