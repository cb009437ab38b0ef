//! Interactive formula sheet.
//!
//! A [`FormulaSheet`] is a static catalog of well-known formulas grouped into
//! categories and sections. Each [`Formula`] lists its quantities as
//! [`Field`]s and can be solved for any quantity that has a [`Solver`], given
//! values for the others:
//!
//! ```
//! use std::collections::HashMap;
//! use formulary::sheet::FormulaSheet;
//!
//! let sheet = FormulaSheet::standard();
//! let values = HashMap::from([("U", 12.0), ("R", 4.0)]);
//! let current = sheet.calculate("Ohm's law", "I", &values).unwrap();
//! assert_eq!(current, 3.0);
//! ```
//!
//! Solvers call the strict `try_*` catalog functions, so degenerate input
//! surfaces as [`SheetError::Domain`] instead of the sentinel zero.

#![allow(non_snake_case)]

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use thiserror::Error;

use crate::algebra::{arithmetic, linear, logarithm};
use crate::constants::PI;
use crate::errors::{checked_div, checked_sqrt, DomainError, Outcome};
use crate::geometry::{circle, cube, cylinder, prism, rectangle, sphere, trapezoid, triangle};
use crate::math::Scalar;
use crate::physics::{
    acceleration, circuit, distance, energy, force, height, mass, mechanics, optics, power, time,
    velocity,
};

/// Failure to evaluate a sheet formula.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SheetError {
    /// No formula with this name exists on the sheet.
    #[error("formula `{0}` not found")]
    UnknownFormula(String),
    /// The formula has no solver for the requested quantity.
    #[error("`{formula}` cannot be solved for `{target}`")]
    UnknownTarget {
        /// Formula that was asked.
        formula: &'static str,
        /// Requested quantity.
        target: String,
    },
    /// Some quantities the solver needs were not supplied.
    #[error("missing inputs: {}", .0.join(", "))]
    MissingInputs(Vec<&'static str>),
    /// The supplied values are outside the formula's domain.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A quantity appearing in a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Symbol used as the key for input values (e.g. `"v0"`).
    pub symbol: &'static str,
    /// Human-readable name.
    pub label: &'static str,
    /// SI unit, empty for dimensionless quantities.
    pub unit: &'static str,
}

/// Rearrangement of a formula for one of its quantities.
#[derive(Clone, Copy)]
pub struct Solver {
    /// Symbol of the quantity this solver produces.
    pub target: &'static str,
    /// Symbols of the quantities it consumes, in evaluation order.
    pub inputs: &'static [&'static str],
    eval: fn(&[Scalar]) -> Outcome,
}

impl Solver {
    /// Evaluates the solver on arguments ordered like [`Solver::inputs`].
    pub fn evaluate(&self, args: &[Scalar]) -> Outcome {
        if args.len() != self.inputs.len() {
            return Err(DomainError::InvalidCount("sheet::evaluate"));
        }
        (self.eval)(args)
    }
}

impl fmt::Debug for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("target", &self.target)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}

/// A named formula with its quantities and solvers.
#[derive(Debug, Clone, Copy)]
pub struct Formula {
    /// Display name, unique across the sheet.
    pub name: &'static str,
    /// Display form of the relation (e.g. `"S = a × b"`).
    pub expression: &'static str,
    /// Quantities the formula relates.
    pub fields: &'static [Field],
    /// Available rearrangements.
    pub solvers: &'static [Solver],
}

impl Formula {
    /// Solver producing `target`, if the formula can be solved for it.
    #[must_use]
    pub fn solver(&self, target: &str) -> Option<&'static Solver> {
        self.solvers.iter().find(|s| s.target == target)
    }

    /// Symbols this formula can be solved for.
    pub fn targets(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.solvers.iter().map(|s| s.target)
    }

    /// Solves for `target` using the values keyed by field symbol. Extra
    /// values are ignored.
    pub fn solve<K>(&self, target: &str, values: &HashMap<K, Scalar>) -> Result<Scalar, SheetError>
    where
        K: Borrow<str> + Hash + Eq,
    {
        let solver = self.solver(target).ok_or_else(|| SheetError::UnknownTarget {
            formula: self.name,
            target: target.to_owned(),
        })?;
        let missing: Vec<&'static str> = solver
            .inputs
            .iter()
            .copied()
            .filter(|symbol| !values.contains_key(*symbol))
            .collect();
        if !missing.is_empty() {
            return Err(SheetError::MissingInputs(missing));
        }
        let args: Vec<Scalar> = solver
            .inputs
            .iter()
            .filter_map(|symbol| values.get(*symbol).copied())
            .collect();
        Ok(solver.evaluate(&args)?)
    }
}

/// Group of related formulas within a category.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Section title.
    pub name: &'static str,
    /// Formulas in display order.
    pub formulas: &'static [Formula],
}

/// Top-level subject area.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Category title.
    pub name: &'static str,
    /// Sections in display order.
    pub sections: &'static [Section],
}

/// Browsable, solvable collection of formulas.
#[derive(Debug, Clone, Copy)]
pub struct FormulaSheet {
    categories: &'static [Category],
}

impl Default for FormulaSheet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormulaSheet {
    /// Built-in sheet covering geometry, algebra and physics.
    #[must_use]
    pub const fn standard() -> Self {
        Self { categories: STANDARD }
    }

    /// Sheet over caller-provided categories.
    #[must_use]
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    /// All categories in display order.
    #[must_use]
    pub const fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// Sections of `category`, empty when the category is unknown.
    #[must_use]
    pub fn sections(&self, category: &str) -> &'static [Section] {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.sections)
            .unwrap_or_default()
    }

    /// Formulas of a section, empty when either name is unknown.
    #[must_use]
    pub fn formulas(&self, category: &str, section: &str) -> &'static [Formula] {
        self.sections(category)
            .iter()
            .find(|s| s.name == section)
            .map(|s| s.formulas)
            .unwrap_or_default()
    }

    /// Every formula on the sheet.
    pub fn iter(&self) -> impl Iterator<Item = &'static Formula> {
        self.categories
            .iter()
            .flat_map(|c| c.sections.iter())
            .flat_map(|s| s.formulas.iter())
    }

    /// Looks a formula up by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static Formula> {
        self.iter().find(|f| f.name == name)
    }

    /// Finds `name` and solves it for `target`.
    pub fn calculate<K>(
        &self,
        name: &str,
        target: &str,
        values: &HashMap<K, Scalar>,
    ) -> Result<Scalar, SheetError>
    where
        K: Borrow<str> + Hash + Eq,
    {
        self.find(name)
            .ok_or_else(|| SheetError::UnknownFormula(name.to_owned()))?
            .solve(target, values)
    }
}

macro_rules! field {
    ($symbol:literal, $label:literal, $unit:literal) => {
        Field {
            symbol: $symbol,
            label: $label,
            unit: $unit,
        }
    };
}

macro_rules! solve_for {
    ($target:ident <- [$($input:ident),*] => $body:expr) => {
        Solver {
            target: stringify!($target),
            inputs: &[$(stringify!($input)),*],
            eval: |args| {
                let [$($input),*] = *args else {
                    return Err(DomainError::InvalidCount("sheet::evaluate"));
                };
                $body
            },
        }
    };
}

const STANDARD: &[Category] = &[
    Category {
        name: "Geometry",
        sections: &[Section {
            name: "Plane and solid figures",
            formulas: GEOMETRY,
        }],
    },
    Category {
        name: "Algebra",
        sections: &[Section {
            name: "Basics",
            formulas: ALGEBRA,
        }],
    },
    Category {
        name: "Physics",
        sections: &[
            Section {
                name: "Mechanics",
                formulas: MECHANICS,
            },
            Section {
                name: "Electricity",
                formulas: ELECTRICITY,
            },
            Section {
                name: "Optics",
                formulas: OPTICS,
            },
        ],
    },
];

const GEOMETRY: &[Formula] = &[
    Formula {
        name: "Rectangle area",
        expression: "S = a × b",
        fields: &[
            field!("S", "Area", "m²"),
            field!("a", "Length", "m"),
            field!("b", "Width", "m"),
        ],
        solvers: &[
            solve_for!(S <- [a, b] => Ok(rectangle::area(a, b))),
            solve_for!(a <- [S, b] => rectangle::try_length_from_area_width(S, b)),
            solve_for!(b <- [S, a] => rectangle::try_width_from_area_length(S, a)),
        ],
    },
    Formula {
        name: "Triangle area",
        expression: "S = a × h / 2",
        fields: &[
            field!("S", "Area", "m²"),
            field!("a", "Base", "m"),
            field!("h", "Height", "m"),
        ],
        solvers: &[
            solve_for!(S <- [a, h] => Ok(triangle::area_base_height(a, h))),
            solve_for!(a <- [S, h] => checked_div(2.0 * S, h, "sheet::triangle_base")),
            solve_for!(h <- [S, a] => triangle::try_height_from_area_base(S, a)),
        ],
    },
    Formula {
        name: "Circle area",
        expression: "S = π × r²",
        fields: &[field!("S", "Area", "m²"), field!("r", "Radius", "m")],
        solvers: &[
            solve_for!(S <- [r] => Ok(circle::area(r))),
            solve_for!(r <- [S] => circle::try_radius_from_area(S)),
        ],
    },
    Formula {
        name: "Trapezoid area",
        expression: "S = (a + b) × h / 2",
        fields: &[
            field!("S", "Area", "m²"),
            field!("a", "Base a", "m"),
            field!("b", "Base b", "m"),
            field!("h", "Height", "m"),
        ],
        solvers: &[
            solve_for!(S <- [a, b, h] => Ok(trapezoid::area(a, b, h))),
            solve_for!(a <- [S, b, h] => Ok(checked_div(2.0 * S, h, "sheet::trapezoid_base")? - b)),
            solve_for!(b <- [S, a, h] => Ok(checked_div(2.0 * S, h, "sheet::trapezoid_base")? - a)),
            solve_for!(h <- [S, a, b] => trapezoid::try_height_from_area_bases(S, a, b)),
        ],
    },
    Formula {
        name: "Cube volume",
        expression: "V = a³",
        fields: &[field!("V", "Volume", "m³"), field!("a", "Edge", "m")],
        solvers: &[
            solve_for!(V <- [a] => Ok(cube::volume(a))),
            solve_for!(a <- [V] => cube::try_side_from_volume(V)),
        ],
    },
    Formula {
        name: "Cuboid volume",
        expression: "V = a × b × c",
        fields: &[
            field!("V", "Volume", "m³"),
            field!("a", "Length", "m"),
            field!("b", "Width", "m"),
            field!("c", "Height", "m"),
        ],
        solvers: &[
            solve_for!(V <- [a, b, c] => Ok(prism::volume(a, b, c))),
            solve_for!(a <- [V, b, c] => checked_div(V, b * c, "sheet::cuboid_edge")),
            solve_for!(b <- [V, a, c] => checked_div(V, a * c, "sheet::cuboid_edge")),
            solve_for!(c <- [V, a, b] => prism::try_height_from_volume_length_width(V, a, b)),
        ],
    },
    Formula {
        name: "Cylinder volume",
        expression: "V = π × r² × h",
        fields: &[
            field!("V", "Volume", "m³"),
            field!("r", "Radius", "m"),
            field!("h", "Height", "m"),
        ],
        solvers: &[
            solve_for!(V <- [r, h] => Ok(cylinder::volume(r, h))),
            solve_for!(r <- [V, h] => {
                const FORMULA: &str = "sheet::cylinder_radius";
                checked_sqrt(checked_div(V, PI * h, FORMULA)?, FORMULA)
            }),
            solve_for!(h <- [V, r] => cylinder::try_height_from_volume_radius(V, r)),
        ],
    },
    Formula {
        name: "Sphere volume",
        expression: "V = 4/3 × π × r³",
        fields: &[field!("V", "Volume", "m³"), field!("r", "Radius", "m")],
        solvers: &[
            solve_for!(V <- [r] => Ok(sphere::volume(r))),
            solve_for!(r <- [V] => sphere::try_radius_from_volume(V)),
        ],
    },
    Formula {
        name: "Cube surface area",
        expression: "S = 6 × a²",
        fields: &[field!("S", "Area", "m²"), field!("a", "Edge", "m")],
        solvers: &[
            solve_for!(S <- [a] => Ok(cube::surface_area(a))),
            solve_for!(a <- [S] => cube::try_side_from_surface_area(S)),
        ],
    },
    Formula {
        name: "Cylinder surface area",
        expression: "S = 2πr(r + h)",
        fields: &[
            field!("S", "Area", "m²"),
            field!("r", "Radius", "m"),
            field!("h", "Height", "m"),
        ],
        solvers: &[
            solve_for!(S <- [r, h] => Ok(cylinder::total_surface_area(r, h))),
            // Positive root of r² + h·r − S/2π = 0.
            solve_for!(r <- [S, h] => {
                let root = checked_sqrt(h * h + 2.0 * S / PI, "sheet::cylinder_surface_radius")?;
                Ok((root - h) / 2.0)
            }),
            solve_for!(h <- [S, r] => {
                Ok(checked_div(S, 2.0 * PI * r, "sheet::cylinder_surface_height")? - r)
            }),
        ],
    },
];

const ALGEBRA: &[Formula] = &[
    Formula {
        name: "Percent of a number",
        expression: "A = N × P / 100",
        fields: &[
            field!("A", "Result", ""),
            field!("N", "Number", ""),
            field!("P", "Percent", "%"),
        ],
        solvers: &[
            solve_for!(A <- [N, P] => Ok(arithmetic::percent_of(N, P))),
            solve_for!(N <- [A, P] => checked_div(A * 100.0, P, "sheet::percent_number")),
            solve_for!(P <- [A, N] => checked_div(A * 100.0, N, "sheet::percent_rate")),
        ],
    },
    Formula {
        name: "Square of a sum",
        expression: "(a + b)² = a² + 2ab + b²",
        fields: &[
            field!("result", "Result", ""),
            field!("a", "First number", ""),
            field!("b", "Second number", ""),
        ],
        solvers: &[solve_for!(result <- [a, b] => Ok(a * a + 2.0 * a * b + b * b))],
    },
    Formula {
        name: "Square of a difference",
        expression: "(a − b)² = a² − 2ab + b²",
        fields: &[
            field!("result", "Result", ""),
            field!("a", "First number", ""),
            field!("b", "Second number", ""),
        ],
        solvers: &[solve_for!(result <- [a, b] => Ok(a * a - 2.0 * a * b + b * b))],
    },
    Formula {
        name: "Difference of squares",
        expression: "a² − b² = (a − b)(a + b)",
        fields: &[
            field!("result", "Result", ""),
            field!("a", "First number", ""),
            field!("b", "Second number", ""),
        ],
        solvers: &[solve_for!(result <- [a, b] => Ok((a - b) * (a + b)))],
    },
    Formula {
        name: "Arithmetic mean",
        expression: "avg = (a + b) / 2",
        fields: &[
            field!("avg", "Mean", ""),
            field!("a", "First number", ""),
            field!("b", "Second number", ""),
        ],
        solvers: &[
            solve_for!(avg <- [a, b] => Ok(arithmetic::average2(a, b))),
            solve_for!(a <- [avg, b] => Ok(2.0 * avg - b)),
            solve_for!(b <- [avg, a] => Ok(2.0 * avg - a)),
        ],
    },
    Formula {
        name: "Linear equation",
        expression: "y = k × x + b",
        fields: &[
            field!("y", "Value of y", ""),
            field!("k", "Slope", ""),
            field!("x", "Value of x", ""),
            field!("b", "Intercept", ""),
        ],
        solvers: &[
            solve_for!(y <- [k, x, b] => Ok(linear::evaluate(x, k, b))),
            solve_for!(k <- [y, x, b] => checked_div(y - b, x, "sheet::linear_slope")),
            solve_for!(x <- [y, k, b] => linear::try_solve(k, b - y)),
            solve_for!(b <- [y, k, x] => Ok(linear::y_intercept(x, y, k))),
        ],
    },
    Formula {
        name: "Power",
        expression: "result = aⁿ",
        fields: &[
            field!("result", "Result", ""),
            field!("a", "Base", ""),
            field!("n", "Exponent", ""),
        ],
        solvers: &[
            solve_for!(result <- [a, n] => Ok(logarithm::power(a, n))),
            solve_for!(a <- [result, n] => {
                Ok(logarithm::power(result, checked_div(1.0, n, "sheet::power_base")?))
            }),
        ],
    },
    Formula {
        name: "Square root",
        expression: "x = √a",
        fields: &[field!("x", "Root", ""), field!("a", "Number", "")],
        solvers: &[
            solve_for!(x <- [a] => checked_sqrt(a, "sheet::square_root")),
            solve_for!(a <- [x] => Ok(x * x)),
        ],
    },
];

const MECHANICS: &[Formula] = &[
    Formula {
        name: "Velocity",
        expression: "v = S / t",
        fields: &[
            field!("v", "Velocity", "m/s"),
            field!("S", "Distance", "m"),
            field!("t", "Time", "s"),
        ],
        solvers: &[
            solve_for!(v <- [S, t] => velocity::try_from_distance_time(S, t)),
            solve_for!(S <- [v, t] => Ok(distance::from_velocity_time(v, t))),
            solve_for!(t <- [S, v] => time::try_from_distance_velocity(S, v)),
        ],
    },
    Formula {
        name: "Acceleration",
        expression: "a = (v − v₀) / t",
        fields: &[
            field!("a", "Acceleration", "m/s²"),
            field!("v", "Final velocity", "m/s"),
            field!("v0", "Initial velocity", "m/s"),
            field!("t", "Time", "s"),
        ],
        solvers: &[
            solve_for!(a <- [v, v0, t] => acceleration::try_from_velocity_time(v, v0, t)),
            solve_for!(v <- [a, v0, t] => Ok(velocity::from_acceleration_time(v0, a, t))),
            solve_for!(v0 <- [v, a, t] => Ok(v - a * t)),
            solve_for!(t <- [v, v0, a] => time::try_from_velocity_acceleration(v, v0, a)),
        ],
    },
    Formula {
        name: "Newton's second law",
        expression: "F = m × a",
        fields: &[
            field!("F", "Force", "N"),
            field!("m", "Mass", "kg"),
            field!("a", "Acceleration", "m/s²"),
        ],
        solvers: &[
            solve_for!(F <- [m, a] => Ok(force::newton_second_law(m, a))),
            solve_for!(m <- [F, a] => mass::try_from_force_acceleration(F, a)),
            solve_for!(a <- [F, m] => acceleration::try_from_force_mass(F, m)),
        ],
    },
    Formula {
        name: "Momentum",
        expression: "p = m × v",
        fields: &[
            field!("p", "Momentum", "kg·m/s"),
            field!("m", "Mass", "kg"),
            field!("v", "Velocity", "m/s"),
        ],
        solvers: &[
            solve_for!(p <- [m, v] => Ok(mechanics::momentum(m, v))),
            solve_for!(m <- [p, v] => checked_div(p, v, "sheet::momentum_mass")),
            solve_for!(v <- [p, m] => checked_div(p, m, "sheet::momentum_velocity")),
        ],
    },
    Formula {
        name: "Kinetic energy",
        expression: "E = m × v² / 2",
        fields: &[
            field!("E", "Energy", "J"),
            field!("m", "Mass", "kg"),
            field!("v", "Velocity", "m/s"),
        ],
        solvers: &[
            solve_for!(E <- [m, v] => Ok(energy::kinetic(m, v))),
            solve_for!(m <- [E, v] => mass::try_from_kinetic_energy_velocity(E, v)),
            solve_for!(v <- [E, m] => velocity::try_from_kinetic_energy(E, m)),
        ],
    },
    Formula {
        name: "Potential energy",
        expression: "E = m × g × h",
        fields: &[
            field!("E", "Energy", "J"),
            field!("m", "Mass", "kg"),
            field!("g", "Gravitational acceleration", "m/s²"),
            field!("h", "Height", "m"),
        ],
        solvers: &[
            solve_for!(E <- [m, g, h] => Ok(energy::potential_with(m, h, g))),
            solve_for!(m <- [E, g, h] => mass::try_from_potential_energy_height_with(E, h, g)),
            solve_for!(g <- [E, m, h] => checked_div(E, m * h, "sheet::potential_gravity")),
            solve_for!(h <- [E, m, g] => height::try_from_potential_energy_with(E, m, g)),
        ],
    },
];

const ELECTRICITY: &[Formula] = &[
    Formula {
        name: "Ohm's law",
        expression: "I = U / R",
        fields: &[
            field!("I", "Current", "A"),
            field!("U", "Voltage", "V"),
            field!("R", "Resistance", "Ω"),
        ],
        solvers: &[
            solve_for!(I <- [U, R] => circuit::try_ohm_current(U, R)),
            solve_for!(U <- [I, R] => Ok(circuit::voltage(I, R))),
            solve_for!(R <- [U, I] => circuit::try_resistance(U, I)),
        ],
    },
    Formula {
        name: "Electric power",
        expression: "P = U × I",
        fields: &[
            field!("P", "Power", "W"),
            field!("U", "Voltage", "V"),
            field!("I", "Current", "A"),
        ],
        solvers: &[
            solve_for!(P <- [U, I] => Ok(power::from_voltage_current(U, I))),
            solve_for!(U <- [P, I] => checked_div(P, I, "sheet::power_voltage")),
            solve_for!(I <- [P, U] => checked_div(P, U, "sheet::power_current")),
        ],
    },
    Formula {
        name: "Electric work",
        expression: "A = P × t",
        fields: &[
            field!("A", "Work", "J"),
            field!("P", "Power", "W"),
            field!("t", "Time", "s"),
        ],
        solvers: &[
            solve_for!(A <- [P, t] => Ok(mechanics::work_from_power(P, t))),
            solve_for!(P <- [A, t] => mechanics::try_power(A, t)),
            solve_for!(t <- [A, P] => time::try_from_work_power(A, P)),
        ],
    },
    Formula {
        name: "Joule-Lenz law",
        expression: "Q = I² × R × t",
        fields: &[
            field!("Q", "Heat", "J"),
            field!("I", "Current", "A"),
            field!("R", "Resistance", "Ω"),
            field!("t", "Time", "s"),
        ],
        solvers: &[
            solve_for!(Q <- [I, R, t] => Ok(circuit::joule_heat(I, R, t))),
            solve_for!(I <- [Q, R, t] => {
                const FORMULA: &str = "sheet::joule_current";
                checked_sqrt(checked_div(Q, R * t, FORMULA)?, FORMULA)
            }),
            solve_for!(R <- [Q, I, t] => checked_div(Q, I * I * t, "sheet::joule_resistance")),
            solve_for!(t <- [Q, I, R] => checked_div(Q, I * I * R, "sheet::joule_time")),
        ],
    },
];

const OPTICS: &[Formula] = &[Formula {
    name: "Thin lens",
    expression: "1/F = 1/d + 1/f",
    fields: &[
        field!("F", "Focal length", "m"),
        field!("d", "Object distance", "m"),
        field!("f", "Image distance", "m"),
    ],
    solvers: &[
        solve_for!(F <- [d, f] => optics::try_focal_length(d, f)),
        solve_for!(d <- [F, f] => optics::try_object_distance(F, f)),
        solve_for!(f <- [F, d] => optics::try_image_distance(F, d)),
    ],
}];

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn browsing() {
        let sheet = FormulaSheet::standard();
        let names: Vec<_> = sheet.categories().iter().map(|c| c.name).collect();
        assert_eq!(names, ["Geometry", "Algebra", "Physics"]);
        assert_eq!(sheet.sections("Physics").len(), 3);
        assert_eq!(sheet.formulas("Physics", "Optics").len(), 1);
        assert!(sheet.sections("Chemistry").is_empty());
        assert!(sheet.formulas("Physics", "Acoustics").is_empty());
        assert_eq!(sheet.find("Sphere volume").map(|f| f.expression), Some("V = 4/3 × π × r³"));
    }

    #[test]
    fn names_are_unique_and_solvers_use_declared_fields() {
        let sheet = FormulaSheet::standard();
        let mut names: Vec<_> = sheet.iter().map(|f| f.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);

        for formula in sheet.iter() {
            let symbols: Vec<_> = formula.fields.iter().map(|f| f.symbol).collect();
            for solver in formula.solvers {
                assert!(symbols.contains(&solver.target), "{}", formula.name);
                assert!(!solver.inputs.contains(&solver.target), "{}", formula.name);
                for input in solver.inputs {
                    assert!(symbols.contains(input), "{}: {input}", formula.name);
                }
            }
        }
    }

    #[test]
    fn solvers_invert_each_other() {
        for formula in FormulaSheet::standard().iter() {
            let mut values: HashMap<&str, Scalar> = formula
                .fields
                .iter()
                .enumerate()
                .map(|(i, field)| (field.symbol, 1.5 + 0.75 * i as Scalar))
                .collect();
            let primary = &formula.solvers[0];
            let computed = formula.solve(primary.target, &values).unwrap();
            values.insert(primary.target, computed);

            for solver in &formula.solvers[1..] {
                let expected = values[solver.target];
                let solved = formula.solve(solver.target, &values).unwrap();
                assert_relative_eq!(solved, expected, max_relative = 1.0e-9);
            }
        }
    }

    #[test]
    fn calculate_reports_errors() {
        let sheet = FormulaSheet::standard();
        let values = HashMap::from([("U".to_owned(), 12.0), ("R".to_owned(), 0.0)]);
        assert_eq!(
            sheet.calculate("Ohm's law", "I", &values),
            Err(SheetError::Domain(DomainError::DivisionByZero("circuit::ohm_current")))
        );
        assert_eq!(
            sheet.calculate("Ohm's law", "P", &values),
            Err(SheetError::UnknownTarget {
                formula: "Ohm's law",
                target: "P".to_owned()
            })
        );
        assert_eq!(
            sheet.calculate("Joule-Lenz law", "Q", &values),
            Err(SheetError::MissingInputs(vec!["I", "t"]))
        );
        assert_eq!(
            sheet.calculate("Hooke's law", "F", &values),
            Err(SheetError::UnknownFormula("Hooke's law".to_owned()))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SheetError::MissingInputs(vec!["I", "t"]).to_string(),
            "missing inputs: I, t"
        );
        assert_eq!(
            SheetError::from(DomainError::NegativeRadicand("sheet::square_root")).to_string(),
            "sheet::square_root: negative radicand"
        );
    }

    #[test]
    fn evaluates_with_ordered_arguments() {
        let lens = FormulaSheet::standard().find("Thin lens").unwrap();
        let solver = lens.solver("F").unwrap();
        assert_relative_eq!(solver.evaluate(&[0.3, 0.6]).unwrap(), 0.2, epsilon = 1.0e-12);
        assert!(solver.evaluate(&[0.3]).is_err());
    }
}
