//! Reference tables of material properties.
//!
//! Each [`Property`] is an immutable table from [`Material`] to a value in SI
//! (or customary, for temperatures) units. A table only lists the materials it
//! has a reference value for; lookups of anything else return `None`.
//!
//! | property          | unit        |
//! |-------------------|-------------|
//! | specific heat     | J/(kg·K)    |
//! | density           | kg/m³       |
//! | resistivity       | Ω·m         |
//! | melting point     | °C          |
//! | boiling point     | °C          |

use std::fmt;
use std::str::FromStr;

use crate::math::Scalar;

/// Errors raised when parsing material or property names.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MaterialError {
    /// The name does not match any known material.
    #[error("unknown material: {0}")]
    UnknownMaterial(String),
    /// The name does not match any tabulated property.
    #[error("unknown property: {0}")]
    UnknownProperty(String),
}

/// Substances that appear in at least one property table.
#[allow(missing_docs)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Water,
    Ice,
    /// Water vapour.
    Steam,
    SeaWater,
    Aluminum,
    Iron,
    Copper,
    Gold,
    Lead,
    Mercury,
    Silver,
    Platinum,
    Zinc,
    Tin,
    Nickel,
    Titanium,
    Tungsten,
    Steel,
    Brass,
    Bronze,
    Nichrome,
    Carbon,
    Germanium,
    Silicon,
    Air,
    Hydrogen,
    Oxygen,
    Ethanol,
    Oil,
    Gasoline,
    Granite,
    Glass,
    Wood,
    Concrete,
    Rubber,
    /// Average for the human body.
    HumanBody,
}

impl Material {
    /// Every known material, in declaration order.
    pub const ALL: [Self; 36] = [
        Self::Water,
        Self::Ice,
        Self::Steam,
        Self::SeaWater,
        Self::Aluminum,
        Self::Iron,
        Self::Copper,
        Self::Gold,
        Self::Lead,
        Self::Mercury,
        Self::Silver,
        Self::Platinum,
        Self::Zinc,
        Self::Tin,
        Self::Nickel,
        Self::Titanium,
        Self::Tungsten,
        Self::Steel,
        Self::Brass,
        Self::Bronze,
        Self::Nichrome,
        Self::Carbon,
        Self::Germanium,
        Self::Silicon,
        Self::Air,
        Self::Hydrogen,
        Self::Oxygen,
        Self::Ethanol,
        Self::Oil,
        Self::Gasoline,
        Self::Granite,
        Self::Glass,
        Self::Wood,
        Self::Concrete,
        Self::Rubber,
        Self::HumanBody,
    ];

    /// Canonical snake_case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Ice => "ice",
            Self::Steam => "steam",
            Self::SeaWater => "sea_water",
            Self::Aluminum => "aluminum",
            Self::Iron => "iron",
            Self::Copper => "copper",
            Self::Gold => "gold",
            Self::Lead => "lead",
            Self::Mercury => "mercury",
            Self::Silver => "silver",
            Self::Platinum => "platinum",
            Self::Zinc => "zinc",
            Self::Tin => "tin",
            Self::Nickel => "nickel",
            Self::Titanium => "titanium",
            Self::Tungsten => "tungsten",
            Self::Steel => "steel",
            Self::Brass => "brass",
            Self::Bronze => "bronze",
            Self::Nichrome => "nichrome",
            Self::Carbon => "carbon",
            Self::Germanium => "germanium",
            Self::Silicon => "silicon",
            Self::Air => "air",
            Self::Hydrogen => "hydrogen",
            Self::Oxygen => "oxygen",
            Self::Ethanol => "ethanol",
            Self::Oil => "oil",
            Self::Gasoline => "gasoline",
            Self::Granite => "granite",
            Self::Glass => "glass",
            Self::Wood => "wood",
            Self::Concrete => "concrete",
            Self::Rubber => "rubber",
            Self::HumanBody => "human_body",
        }
    }

    /// Value of `property` for this material, if tabulated.
    #[must_use]
    pub const fn property(self, property: Property) -> Option<Scalar> {
        lookup(property, self)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercases and maps spaces/hyphens to underscores.
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

impl FromStr for Material {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        let key = match key.as_str() {
            "water_steam" | "vapor" | "water_vapor" => "steam",
            "aluminium" => "aluminum",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|m| m.name() == key)
            .ok_or_else(|| MaterialError::UnknownMaterial(s.to_owned()))
    }
}

/// Tabulated physical property.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Specific heat capacity in J/(kg·K).
    SpecificHeat,
    /// Mass density in kg/m³.
    Density,
    /// Electrical resistivity at room temperature in Ω·m.
    Resistivity,
    /// Melting point at standard pressure in °C.
    MeltingPoint,
    /// Boiling point at standard pressure in °C.
    BoilingPoint,
}

impl Property {
    /// Every tabulated property.
    pub const ALL: [Self; 5] = [
        Self::SpecificHeat,
        Self::Density,
        Self::Resistivity,
        Self::MeltingPoint,
        Self::BoilingPoint,
    ];

    /// Canonical snake_case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SpecificHeat => "specific_heat",
            Self::Density => "density",
            Self::Resistivity => "resistivity",
            Self::MeltingPoint => "melting_point",
            Self::BoilingPoint => "boiling_point",
        }
    }

    /// Unit symbol of the tabulated values.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::SpecificHeat => "J/(kg·K)",
            Self::Density => "kg/m³",
            Self::Resistivity => "Ω·m",
            Self::MeltingPoint | Self::BoilingPoint => "°C",
        }
    }

    /// Iterates the `(material, value)` rows of this table.
    pub fn entries(self) -> impl Iterator<Item = (Material, Scalar)> {
        Material::ALL
            .into_iter()
            .filter_map(move |m| lookup(self, m).map(|v| (m, v)))
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| MaterialError::UnknownProperty(s.to_owned()))
    }
}

/// Value of `property` for `material`, if tabulated.
#[must_use]
pub const fn lookup(property: Property, material: Material) -> Option<Scalar> {
    match property {
        Property::SpecificHeat => specific_heat(material),
        Property::Density => density(material),
        Property::Resistivity => resistivity(material),
        Property::MeltingPoint => melting_point(material),
        Property::BoilingPoint => boiling_point(material),
    }
}

/// Looks up a value by property and material names, e.g.
/// `lookup_by_name("density", "copper")`. Unknown names yield `None`.
#[must_use]
pub fn lookup_by_name(property: &str, material: &str) -> Option<Scalar> {
    let property = property.parse::<Property>().ok()?;
    let material = material.parse::<Material>().ok()?;
    lookup(property, material)
}

/// Specific heat capacity in J/(kg·K).
#[must_use]
pub const fn specific_heat(material: Material) -> Option<Scalar> {
    use Material::*;
    Some(match material {
        Water => 4200.0,
        Ice => 2100.0,
        Steam => 2010.0,
        Aluminum => 900.0,
        Iron => 460.0,
        Copper => 385.0,
        Gold => 129.0,
        Lead => 130.0,
        Air => 1005.0,
        Ethanol => 2440.0,
        Granite => 790.0,
        Glass => 840.0,
        Wood => 1700.0,
        Mercury => 140.0,
        Hydrogen => 14300.0,
        Oxygen => 920.0,
        Concrete => 880.0,
        HumanBody => 3470.0,
        Silver => 235.0,
        Platinum => 133.0,
        Zinc => 385.0,
        Tin => 230.0,
        Nickel => 440.0,
        Titanium => 523.0,
        Steel => 500.0,
        Brass => 380.0,
        Bronze => 380.0,
        _ => return None,
    })
}

/// Mass density in kg/m³ (gases at 0 °C, 1 atm).
#[must_use]
pub const fn density(material: Material) -> Option<Scalar> {
    use Material::*;
    Some(match material {
        Water => 1000.0,
        Ice => 917.0,
        Aluminum => 2700.0,
        Iron => 7870.0,
        Copper => 8960.0,
        Gold => 19300.0,
        Lead => 11340.0,
        Mercury => 13590.0,
        Air => 1.29,
        Ethanol => 789.0,
        Granite => 2700.0,
        Glass => 2500.0,
        Wood => 700.0,
        Hydrogen => 0.0899,
        Oxygen => 1.429,
        Concrete => 2400.0,
        Silver => 10500.0,
        Platinum => 21450.0,
        Zinc => 7140.0,
        Tin => 7280.0,
        Nickel => 8900.0,
        Titanium => 4500.0,
        Steel => 7850.0,
        Brass => 8500.0,
        Bronze => 8700.0,
        Oil => 900.0,
        Gasoline => 750.0,
        SeaWater => 1025.0,
        _ => return None,
    })
}

/// Electrical resistivity at 20 °C in Ω·m.
#[must_use]
pub const fn resistivity(material: Material) -> Option<Scalar> {
    use Material::*;
    Some(match material {
        Silver => 1.59e-8,
        Copper => 1.68e-8,
        Gold => 2.44e-8,
        Aluminum => 2.65e-8,
        Tungsten => 5.60e-8,
        Iron => 9.70e-8,
        Platinum => 10.6e-8,
        Lead => 22.0e-8,
        Nichrome => 1.10e-6,
        Carbon => 3.5e-5,
        Germanium => 0.46,
        Silicon => 640.0,
        Glass => 1e12,
        Rubber => 1e13,
        Wood => 1e8,
        _ => return None,
    })
}

/// Melting point in °C.
#[must_use]
pub const fn melting_point(material: Material) -> Option<Scalar> {
    use Material::*;
    Some(match material {
        Water => 0.0,
        Aluminum => 660.3,
        Iron => 1538.0,
        Copper => 1085.0,
        Gold => 1064.0,
        Lead => 327.5,
        Mercury => -38.8,
        Silver => 961.8,
        Platinum => 1768.0,
        Zinc => 419.5,
        Tin => 231.9,
        Nickel => 1455.0,
        Titanium => 1668.0,
        Steel => 1370.0,
        Tungsten => 3414.0,
        _ => return None,
    })
}

/// Boiling point in °C.
#[must_use]
pub const fn boiling_point(material: Material) -> Option<Scalar> {
    use Material::*;
    Some(match material {
        Water => 100.0,
        Aluminum => 2519.0,
        Iron => 2862.0,
        Copper => 2562.0,
        Gold => 2856.0,
        Lead => 1749.0,
        Mercury => 356.7,
        Silver => 2162.0,
        Platinum => 3825.0,
        Zinc => 907.0,
        Tin => 2602.0,
        Nickel => 2913.0,
        Titanium => 3287.0,
        Steel => 2750.0,
        Tungsten => 5555.0,
        _ => return None,
    })
}
