//! Exact solution of the one dimensional Riemann problem for the Euler equations of an ideal gas.
//!
//! Given two constant states separated by a discontinuity, the [`ExactRiemannSolver`] computes
//! the pressure and velocity in the star region, classifies the left and right waves as shocks
//! or rarefaction fans and returns a [`RiemannSolution`] that can be sampled at any `x / t`.
//! A [`Profile`] samples that solution on a uniform grid and writes it to a text file.

pub use config::{ProblemConfig, StateCfg};
pub use errors::{ConfigError, RiemannError};
pub use gas_law::AdiabaticIndex;
pub use physical_quantities::State;
pub use profile::Profile;
pub use riemann_solver::{ExactRiemannSolver, RiemannSolution, RiemannStarValues, Side};

mod config;
mod errors;
pub mod gas_law;
pub mod physical_quantities;
mod profile;
pub mod riemann_solver;
