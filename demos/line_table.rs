use line_profile::prelude::*;

fn main() -> Result<()> {
    let model = LineModel::study()?;
    println!(
        "gamma = {:.6e} 1/km (alpha = {:.3e} Np/km), Zc = {:.3} ohm, wavelength = {:.0} km",
        model.params.gamma,
        model.params.attenuation(),
        model.params.zc,
        model.params.wavelength_km()
    );

    // Every 100 km out to 1000 km
    let xs = linspace(0.0, 1000.0, 11);
    let series = model.profile_series(&xs);

    println!("x(km), |V| dist(kV), |V| series(kV), |I| dist(A), efficiency(%)");
    for (p, s) in model.profile(&xs).iter().zip(&series) {
        println!(
            "{:>6.0}, {:>10.3}, {:>10.3}, {:>8.2}, {:>7.3}",
            p.distance_km,
            p.voltage.norm() / 1e3,
            s.voltage.norm() / 1e3,
            p.current.norm(),
            model.efficiency(p.distance_km)
        );
    }

    write_profile_csv(std::io::stdout().lock(), &model.profile(&linspace(0.0, 20.0, 5)))?;
    Ok(())
}
