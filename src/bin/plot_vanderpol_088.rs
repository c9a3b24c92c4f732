//! Phase portrait of the RK4 Van der Pol run with damping parameter mu = 0.88.

use std::path::Path;

use anyhow::Result;
use log::info;

use ode_plots::data::loader::load_table;
use ode_plots::plot::render_phase_portrait;

const INPUT: &str = "rk4_vanderpol_0.88.txt";
const OUTPUT: &str = "rk4_vanderpol_0.88.png";

fn main() -> Result<()> {
    env_logger::init();

    let table = load_table(Path::new(INPUT))?;
    // Columns are (t, x, y); the time column is not plotted.
    let points = table.points(1, 2)?;
    info!("{INPUT}: {} rows", points.len());

    render_phase_portrait(Path::new(OUTPUT), &points, 0.88)?;
    info!("wrote {OUTPUT}");
    Ok(())
}
