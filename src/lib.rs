//! Batch plotting tools for ODE solver result tables.
//!
//! The companion solver suite (Forward Euler, RK2, RK4) writes its results as
//! plain whitespace-delimited text tables. The binaries in `src/bin/` read
//! those tables and render them to PNG:
//!
//! * `plot_errors` – log-log comparison of the L2 error vs. step size for the
//!   three methods (`errors.png`)
//! * `plot_vanderpol_7` / `plot_vanderpol_088` – phase portraits of a Van der
//!   Pol run (`rk4_vanderpol_7.png`, `rk4_vanderpol_0.88.png`)
//! * `generate_sample` – writes example input tables for trying the tools out

pub mod data;
pub mod plot;
