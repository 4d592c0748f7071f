// ============================================================================
// Basic Usage Example
// ============================================================================

use astro_units::prelude::*;

fn main() -> UnitsResult<()> {
    // Run with --features logging to see the trace events.
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Astro Units Example ===\n");

    // Angles: sexagesimal construction and template formatting
    println!("Angles...");
    let ra = Angle::from_dms(5.0, 55.0, 10.3053, 0.0);
    println!("  Betelgeuse RA as angle: {}", ra.format(Angle::FORMAT_DEFAULT));
    println!("  ...in decimal degrees:  {}", ra.format(Angle::FORMAT_DECIMAL));
    println!("  ...as sidereal time:    {}", ra.to_time(None));

    let dec = Angle::from_deg(-7.0).add(&Angle::from_amin(-24.0));
    println!("  Betelgeuse Dec:         {}", dec.format("+0d°0m'0s\""));

    // Normalization into a standard interval
    let swept = Angle::from_deg(1234.5).normalize(0.0, 360.0);
    println!("  1234.5° normalized:     {}°\n", swept.deg());

    // Times: durations and unit views
    println!("Times...");
    let t = Time::from_hms(2.0, 46.0, 40.0, 0.0);
    println!("  2h46m40s is {} seconds, {} days", t.sec(), t.days());
    println!("  Formatted: {}", t.format(Time::FORMAT_HMS));

    let year = Time::from_years(1.0);
    println!("  One Julian year: {} days\n", year.days());

    // Distances: exact decimal conversions
    println!("Distances...");
    let au = Distance::from_au(1.0)?;
    println!("  1 AU = {} km", au.get(DistanceUnit::Km));
    println!("  1 AU = {}", au.clone().with_unit(DistanceUnit::Mi).with_places(0));

    let proxima = Distance::from_parallax(&Angle::from_asec(0.7685))?;
    println!(
        "  Proxima Centauri: {:.3} pc = {:.3} ly",
        proxima.get(DistanceUnit::Pc),
        proxima.get(DistanceUnit::Ly)
    );

    // Velocities: distance over time
    println!("\nVelocities...");
    let c = Velocity::from_ms(Velocity::C_MS)?;
    println!("  Speed of light: {}", c.clone().with_unit(VelocityUnit::Aud));

    let travel = c.time_to_cover(&au);
    println!("  Light covers 1 AU in {} minutes", travel.format("2M"));

    // Temperatures and pressures
    println!("\nWeather...");
    let t = Temperature::from_c(-63.0);
    println!(
        "  Mars mean surface temp: {} = {}",
        t,
        t.clone().with_unit(TemperatureUnit::Fahrenheit)
    );

    let p = Pressure::from_mbar(6.1);
    println!(
        "  Mars surface pressure:  {} = {}",
        p,
        p.clone().with_unit(PressureUnit::Pascal)
    );

    Ok(())
}
