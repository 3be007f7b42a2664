use crate::{errors::RiemannError, gas_law::AdiabaticIndex, physical_quantities::State};

use super::{RiemannSolution, RiemannStarValues};

/// Exact Riemann solver for the Euler equations with an ideal gas.
///
/// The star pressure is found with a Newton-Raphson iteration on the pressure
/// function, starting from the two-rarefaction estimate (see [`ExactRiemannSolver::guess_p`]).
#[derive(Debug, Clone, Copy)]
pub struct ExactRiemannSolver {
    // Relative change in pressure below which the iteration has converged.
    tolerance: f64,
    max_iterations: usize,
}

impl Default for ExactRiemannSolver {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 1000,
        }
    }
}

impl ExactRiemannSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Functions (4.6) and (4.7) in Toro.
    pub fn fb(p: f64, state: &State, gamma: &AdiabaticIndex) -> f64 {
        if p > state.pressure() {
            let cap_a = gamma.tdgp1() / state.density();
            let cap_b = gamma.gm1dgp1() * state.pressure();
            (p - state.pressure()) * (cap_a / (p + cap_b)).sqrt()
        } else {
            gamma.tdgm1() * state.sound_speed() * ((p / state.pressure()).powf(gamma.gm1d2g()) - 1.)
        }
    }

    /// Function (4.5) in Toro
    pub fn f(p: f64, left: &State, right: &State, gamma: &AdiabaticIndex) -> f64 {
        Self::fb(p, left, gamma) + Self::fb(p, right, gamma) + (right.velocity() - left.velocity())
    }

    /// Function (4.37) in Toro
    fn fprimeb(p: f64, state: &State, gamma: &AdiabaticIndex) -> f64 {
        if p > state.pressure() {
            let cap_a = gamma.tdgp1() / state.density();
            let cap_b = gamma.gm1dgp1() * state.pressure();
            (1. - 0.5 * (p - state.pressure()) / (cap_b + p)) * (cap_a / (p + cap_b)).sqrt()
        } else {
            1. / (state.density() * state.sound_speed())
                * (p / state.pressure()).powf(-gamma.gp1d2g())
        }
    }

    /// The derivative of f w.r.t. p
    fn fprime(p: f64, left: &State, right: &State, gamma: &AdiabaticIndex) -> f64 {
        Self::fprimeb(p, left, gamma) + Self::fprimeb(p, right, gamma)
    }

    /// Two-rarefaction estimate (4.46) in Toro, the starting point of the iteration.
    ///
    /// This is the exact solution if both waves turn out to be rarefactions. A non-positive
    /// numerator means the two rarefactions separate and leave vacuum in between.
    pub fn two_rarefaction_guess(
        left: &State,
        right: &State,
        gamma: &AdiabaticIndex,
    ) -> Result<f64, RiemannError> {
        let a_l = left.sound_speed();
        let a_r = right.sound_speed();
        let v_r_m_v_l = right.velocity() - left.velocity();
        let num = a_l + a_r - gamma.gm1d2() * v_r_m_v_l;
        if !(num > 0.) {
            return Err(RiemannError::VacuumCondition {
                critical_velocity: gamma.tdgm1() * (a_l + a_r),
                velocity_jump: v_r_m_v_l,
            });
        }
        let beta = gamma.gm1d2g();
        let denom = a_l * left.pressure().powf(-beta) + a_r * right.pressure().powf(-beta);
        Ok((num / denom).powf(1. / beta))
    }

    /// Bottom function of (4.48) in Toro
    fn gb(p: f64, state: &State, gamma: &AdiabaticIndex) -> f64 {
        let cap_a = gamma.tdgp1() / state.density();
        let cap_b = gamma.gm1dgp1() * state.pressure();
        (cap_a / (p + cap_b)).sqrt()
    }

    /// Get a good first guess for the pressure in the iterative scheme.
    ///
    /// This is the two-rarefaction estimate, which never underestimates the star pressure.
    /// When the primitive variable estimate predicts a collision, it is capped by the two-shock
    /// estimate (4.47) in Toro: for gamma close to 1 the two-rarefaction estimate of a strong
    /// collision overshoots by hundreds of orders of magnitude, or overflows.
    pub fn guess_p(
        left: &State,
        right: &State,
        gamma: &AdiabaticIndex,
    ) -> Result<f64, RiemannError> {
        let p_trrs = Self::two_rarefaction_guess(left, right, gamma)?;
        let p_min = left.pressure().min(right.pressure());
        let v_r_m_v_l = right.velocity() - left.velocity();
        let ppv = 0.5 * (left.pressure() + right.pressure())
            - 0.125
                * v_r_m_v_l
                * (left.density() + right.density())
                * (left.sound_speed() + right.sound_speed());
        if ppv < p_min {
            return Ok(p_trrs);
        }

        // two shocks
        let g_l = Self::gb(ppv, left, gamma);
        let g_r = Self::gb(ppv, right, gamma);
        let p_tsrs = (g_l * left.pressure() + g_r * right.pressure() - v_r_m_v_l) / (g_l + g_r);
        Ok(p_trrs.min(p_tsrs.max(p_min)))
    }

    /// Velocity in the star region, (4.9) in Toro.
    pub fn star_velocity(p: f64, left: &State, right: &State, gamma: &AdiabaticIndex) -> f64 {
        0.5 * (left.velocity() + right.velocity())
            + 0.5 * (Self::fb(p, right, gamma) - Self::fb(p, left, gamma))
    }

    /// Find the zeropoint of f(p) using a Newton-Raphson iteration.
    ///
    /// f is monotonically increasing and concave, so after the first step the iterates
    /// approach the root from below. Steps that would lead to a non-positive pressure,
    /// where f is undefined, are replaced by halving the current pressure.
    fn solve_newton_raphson(
        &self,
        p_guess: f64,
        left: &State,
        right: &State,
        gamma: &AdiabaticIndex,
    ) -> Result<f64, RiemannError> {
        let mut p = p_guess;
        let mut fp = Self::f(p, left, right, gamma);
        for iteration in 1..=self.max_iterations {
            // Residual at round-off level: further steps cannot improve p. This happens close
            // to vacuum, where f' diverges and the relative change never drops below tolerance.
            let scale = Self::fb(p, left, gamma).abs()
                + Self::fb(p, right, gamma).abs()
                + (right.velocity() - left.velocity()).abs();
            if fp.abs() <= 8. * f64::EPSILON * scale {
                return Ok(p);
            }
            let mut p_next = p - fp / Self::fprime(p, left, right, gamma);
            if p_next <= 0. {
                p_next = 0.5 * p;
            }
            if !p_next.is_finite() {
                return Err(RiemannError::NonConvergence {
                    iterations: iteration,
                    residual: fp,
                });
            }
            fp = Self::f(p_next, left, right, gamma);
            let change = 2. * (p_next - p).abs() / (p_next + p);
            p = p_next;
            if change < self.tolerance {
                return Ok(p);
            }
        }

        Err(RiemannError::NonConvergence {
            iterations: self.max_iterations,
            residual: fp,
        })
    }

    /// Pressure and velocity in the star region.
    ///
    /// Both states must have been constructed with the same adiabatic index as `gamma`.
    pub fn solve_for_star_state(
        &self,
        left: &State,
        right: &State,
        gamma: &AdiabaticIndex,
    ) -> Result<RiemannStarValues, RiemannError> {
        let p_guess = Self::guess_p(left, right, gamma)?;
        let p = self.solve_newton_raphson(p_guess, left, right, gamma)?;
        if !(p > 0.) {
            return Err(RiemannError::VacuumCondition {
                critical_velocity: gamma.tdgm1() * (left.sound_speed() + right.sound_speed()),
                velocity_jump: right.velocity() - left.velocity(),
            });
        }

        // calculate the velocity in the intermediate state
        let u = Self::star_velocity(p, left, right, gamma);

        Ok(RiemannStarValues { p, u })
    }

    /// Solve the Riemann problem and classify both waves.
    pub fn solve(
        &self,
        left: &State,
        right: &State,
        gamma: &AdiabaticIndex,
    ) -> Result<RiemannSolution, RiemannError> {
        let star = self.solve_for_star_state(left, right, gamma)?;
        Ok(RiemannSolution::new(*left, *right, star, *gamma))
    }
}
