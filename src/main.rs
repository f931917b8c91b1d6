//! Demonstration binary: Miami to Lisbon along the rhumb line

use rhumbline_engine::{GeoPoint, RhumbLineCalc};

fn main() {
    let calc = RhumbLineCalc::new();
    let miami = GeoPoint::new(25.7976636, -80.1163316);
    let lisbon = GeoPoint::new(38.7134232, -9.1498182);

    println!("Rhumbline Engine v0.1.0");
    println!();
    println!("Miami:  {}", miami);
    println!("Lisbon: {}", lisbon);
    println!();
    println!("Distance:        {:.3} km", calc.distance(miami, lisbon));
    println!("Bearing:         {:.4}°", calc.bearing(miami, lisbon));
    println!("Midpoint:        {}", calc.loxodromic_midpoint(miami, lisbon));
    println!();
    println!("7-point loxodromic interpolation (bisection order):");
    match calc.loxodromic_power_interpolation(miami, lisbon, 7) {
        Ok(points) => {
            for p in points {
                println!("  {}", p);
            }
        }
        Err(e) => eprintln!("interpolation failed: {}", e),
    }
}
