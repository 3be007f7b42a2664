use std::fmt::Display;

use crate::{gas_law::AdiabaticIndex, physical_quantities::State};

mod exact;
mod sampler;
mod wave;

pub use exact::ExactRiemannSolver;
pub use sampler::{Bound, Interval, Region};
pub use wave::Wave;

/// Which of the two original states a wave (or region) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Direction in which the waves of this side travel relative to the gas.
    pub fn sign(&self) -> f64 {
        match self {
            Side::Left => -1.,
            Side::Right => 1.,
        }
    }
}

/// Pressure and velocity in the star region, shared by both sides of the contact discontinuity.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct RiemannStarValues {
    pub p: f64,
    pub u: f64,
}

/// Complete self-similar solution of a Riemann problem.
///
/// Holds everything needed to sample the solution at any `x / t`: the two
/// original states, the star values, the left and right waves and the ordered
/// partition of the `x / t` axis in regions.
#[derive(Debug, Clone)]
pub struct RiemannSolution {
    gamma: AdiabaticIndex,
    left: State,
    right: State,
    star: RiemannStarValues,
    left_wave: Wave,
    right_wave: Wave,
    left_star: State,
    right_star: State,
    intervals: Vec<Interval>,
}

impl RiemannSolution {
    pub(crate) fn new(
        left: State,
        right: State,
        star: RiemannStarValues,
        gamma: AdiabaticIndex,
    ) -> Self {
        let left_wave = Wave::classify(Side::Left, &left, star.p, star.u, &gamma);
        let right_wave = Wave::classify(Side::Right, &right, star.p, star.u, &gamma);
        let left_star = State::new_unchecked(star.u, left_wave.star_density(), star.p, &gamma);
        let right_star = State::new_unchecked(star.u, right_wave.star_density(), star.p, &gamma);
        let intervals = sampler::partition(&left_wave, &right_wave, star.u);

        Self {
            gamma,
            left,
            right,
            star,
            left_wave,
            right_wave,
            left_star,
            right_star,
            intervals,
        }
    }

    pub fn gamma(&self) -> &AdiabaticIndex {
        &self.gamma
    }

    pub fn p_star(&self) -> f64 {
        self.star.p
    }

    pub fn v_star(&self) -> f64 {
        self.star.u
    }

    /// The original state on the given side.
    pub fn state(&self, side: Side) -> &State {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// The state between the wave of the given side and the contact discontinuity.
    pub fn star_state(&self, side: Side) -> &State {
        match side {
            Side::Left => &self.left_star,
            Side::Right => &self.right_star,
        }
    }

    pub fn wave(&self, side: Side) -> &Wave {
        match side {
            Side::Left => &self.left_wave,
            Side::Right => &self.right_wave,
        }
    }

    /// The ordered, half-open regions covering the whole `x / t` axis.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Residual of the pressure equation at the star pressure.
    pub fn residual(&self) -> f64 {
        ExactRiemannSolver::f(self.star.p, &self.left, &self.right, &self.gamma)
    }
}

impl Display for RiemannSolution {
    /// One line per region, with the `x / t` range it occupies.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for interval in self.intervals.iter() {
            match self.uniform_state(interval.region()) {
                Some(state) => write!(f, "{state}")?,
                None => write!(f, "{:<63}", "rarefaction wave")?,
            }
            writeln!(f, " ({interval})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sod_listing() {
        let gamma = AdiabaticIndex::from(1.4);
        let left = State::new(0., 1., 1., &gamma).unwrap();
        let right = State::new(0., 0.125, 0.1, &gamma).unwrap();
        let solution = ExactRiemannSolver::new()
            .solve(&left, &right, &gamma)
            .unwrap();

        let listing = solution.to_string();
        let lines = listing.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "velocity = 0.000e0, density = 1.000e0, pressure = 1.000e0 (x/t <= -1.183e0)"
        );
        assert_eq!(
            lines[1],
            format!("{:<63} (-1.183e0 < x/t <= -7.027e-2)", "rarefaction wave")
        );
        assert_eq!(
            lines[2],
            "velocity = 9.275e-1, density = 4.263e-1, pressure = 3.031e-1 (-7.027e-2 < x/t <= 9.275e-1)"
        );
        assert_eq!(
            lines[3],
            "velocity = 9.275e-1, density = 2.656e-1, pressure = 3.031e-1 (9.275e-1 < x/t < 1.752e0)"
        );
        assert_eq!(
            lines[4],
            "velocity = 0.000e0, density = 1.250e-1, pressure = 1.000e-1 (1.752e0 <= x/t)"
        );
    }
}
