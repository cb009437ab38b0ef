use std::collections::HashMap;

use formulary::environment::Environment;
use formulary::materials::{self, Material, Property};
use formulary::physics::circuit;
use formulary::sheet::FormulaSheet;

fn main() {
    let sheet = FormulaSheet::standard();

    for category in sheet.categories() {
        println!("{}", category.name);
        for section in category.sections {
            println!("  {}", section.name);
            for formula in section.formulas {
                let targets: Vec<_> = formula.targets().collect();
                println!("    {:<24} {:<28} solves for {}", formula.name, formula.expression, targets.join(", "));
            }
        }
    }

    // Thin lens: object at 30 cm, image at 60 cm.
    let values = HashMap::from([("d", 0.3), ("f", 0.6)]);
    match sheet.calculate("Thin lens", "F", &values) {
        Ok(focal) => println!("\nfocal length: {focal:.3} m"),
        Err(err) => println!("\nthin lens: {err}"),
    }

    // Missing and degenerate inputs are reported, not zeroed.
    let values = HashMap::from([("U", 230.0), ("R", 0.0)]);
    for target in ["I", "R"] {
        match sheet.calculate("Ohm's law", target, &values) {
            Ok(v) => println!("Ohm's law {target} = {v}"),
            Err(err) => println!("Ohm's law {target}: {err}"),
        }
    }

    // 10 m of 1 mm² copper wire.
    if let Some(r) = circuit::wire_resistance_of(Material::Copper, 10.0, 1.0e-6) {
        println!("\ncopper wire: {r:.4} Ω");
    }
    if let Some(c) = materials::lookup(Property::SpecificHeat, Material::Water) {
        println!("water specific heat: {c} {}", Property::SpecificHeat.unit());
    }

    for (name, env) in [
        ("earth", Environment::earth()),
        ("moon", Environment::moon()),
        ("mars", Environment::mars()),
    ] {
        println!("{name:>5}: 70 kg weighs {:.1} N", env.weight(70.0));
    }
}
