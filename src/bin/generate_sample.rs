//! Writes example input tables for the plotting binaries.
//!
//! The real tables come from the solver suite; these stand-ins have the same
//! shape and column layout so the plot tools can be tried without it. Error
//! tables follow `err = C * h^p` with each method's convergence order, so the
//! log-log chart shows straight lines with slopes 4, 2 and 1. The trajectory
//! files hold a parametric closed curve shaped by mu, not a real integration.
//!
//! Everything is deterministic: running twice rewrites identical files.

use std::f64::consts::PI;
use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use log::info;

/// (file, error constant C, convergence order p)
const ERROR_TABLES: [(&str, f64, i32); 3] = [
    ("errors_rk4.txt", 0.05, 4),
    ("errors_hi.txt", 0.1, 2),
    ("errors_euler.txt", 0.5, 1),
];

fn main() -> Result<()> {
    env_logger::init();

    for (name, c, order) in ERROR_TABLES {
        let mut out = String::from("# step_size l2_error\n");
        for i in 0..8 {
            let h = 0.5 / f64::powi(2.0, i);
            let err = c * h.powi(order);
            writeln!(out, "{h:.8e} {err:.8e}")?;
        }
        fs::write(name, &out).with_context(|| format!("writing {name}"))?;
        info!("wrote {name}");
    }

    write_vanderpol("rk4_vanderpol.txt", 7.0)?;
    write_vanderpol("rk4_vanderpol_0.88.txt", 0.88)?;
    Ok(())
}

/// Closed (t, x, y) curve with the rough look of a Van der Pol limit cycle:
/// larger mu squashes the ellipse into a relaxation-style loop.
fn write_vanderpol(name: &str, mu: f64) -> Result<()> {
    let n = 2000;
    let mut out = String::from("# t x y\n");
    for i in 0..n {
        let t = 2.0 * PI * i as f64 / n as f64;
        let x = 2.0 * t.cos();
        let y = -2.0 * t.sin() * (1.0 + mu * t.cos().powi(2) / (1.0 + mu));
        writeln!(out, "{t:.6} {x:.6} {y:.6}")?;
    }
    fs::write(name, &out).with_context(|| format!("writing {name}"))?;
    info!("wrote {name}");
    Ok(())
}
