//! Overlay the L2 error tables of the three integrators on one log-log chart.
//!
//! Inputs and output are fixed: the solver suite writes `errors_*.txt` into
//! the working directory and this tool leaves `errors.png` next to them.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use ode_plots::data::loader::load_table;
use ode_plots::data::transform::ln_points;
use ode_plots::plot::{Curve, render_error_comparison};

const INPUTS: [(&str, &str); 3] = [
    ("errors_rk4.txt", "Runge-Kutta 4th order"),
    ("errors_hi.txt", "Runge-Kutta 2nd order"),
    ("errors_euler.txt", "Forward Euler"),
];
const OUTPUT: &str = "errors.png";

fn main() -> Result<()> {
    env_logger::init();

    let mut curves = Vec::with_capacity(INPUTS.len());
    for (file, label) in INPUTS {
        let table = load_table(Path::new(file))?;
        let points = table.points(0, 1)?;
        let logged = ln_points(&points).with_context(|| format!("log-transforming {file}"))?;
        info!("{file}: {} rows", logged.len());
        curves.push(Curve::new(label, logged));
    }

    render_error_comparison(Path::new(OUTPUT), &curves)?;
    info!("wrote {OUTPUT}");
    Ok(())
}
