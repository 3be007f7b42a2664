use crate::{gas_law::AdiabaticIndex, physical_quantities::State};

use super::Side;

/// The nonlinear wave separating an original state from its star state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wave {
    /// Discontinuity moving at `speed`.
    Shock { speed: f64, star_density: f64 },
    /// Continuous fan. The `head` touches the original state, the `tail` the star state.
    Rarefaction {
        head: f64,
        tail: f64,
        star_density: f64,
    },
}

impl Wave {
    /// Classify the wave on `side`, given the original `state` on that side and the star values.
    ///
    /// The star pressure exceeding the original pressure gives a shock, see (4.50)-(4.59) in
    /// Toro for the jump relations; otherwise we get a rarefaction fan (4.53)-(4.65).
    pub fn classify(
        side: Side,
        state: &State,
        p_star: f64,
        v_star: f64,
        gamma: &AdiabaticIndex,
    ) -> Self {
        let sign = side.sign();
        let pdps = p_star / state.pressure();
        if p_star > state.pressure() {
            let star_density = state.density() * (pdps + gamma.gm1dgp1())
                / (gamma.gm1dgp1() * pdps + 1.);
            let speed = state.velocity()
                + sign * state.sound_speed() * (gamma.gp1d2g() * pdps + gamma.gm1d2g()).sqrt();
            Wave::Shock {
                speed,
                star_density,
            }
        } else {
            let star_density = state.density() * pdps.powf(gamma.gamma_inv());
            let star_sound_speed = state.sound_speed() * pdps.powf(gamma.gm1d2g());
            Wave::Rarefaction {
                head: state.velocity() + sign * state.sound_speed(),
                tail: v_star + sign * star_sound_speed,
                star_density,
            }
        }
    }

    pub fn is_shock(&self) -> bool {
        matches!(self, Wave::Shock { .. })
    }

    pub fn star_density(&self) -> f64 {
        match self {
            Wave::Shock { star_density, .. } | Wave::Rarefaction { star_density, .. } => {
                *star_density
            }
        }
    }

    /// Wave speed bordering the original state.
    pub fn outer_speed(&self) -> f64 {
        match self {
            Wave::Shock { speed, .. } => *speed,
            Wave::Rarefaction { head, .. } => *head,
        }
    }

    /// Wave speed bordering the star state.
    pub fn inner_speed(&self) -> f64 {
        match self {
            Wave::Shock { speed, .. } => *speed,
            Wave::Rarefaction { tail, .. } => *tail,
        }
    }

    /// State inside the rarefaction fan of `side` along the ray `xi = x / t`.
    ///
    /// See (4.56) and (4.63) in Toro.
    pub fn fan_state(side: Side, state: &State, xi: f64, gamma: &AdiabaticIndex) -> State {
        let sign = side.sign();
        let v = state.velocity();
        let a = state.sound_speed();
        let base = gamma.tdgp1() - sign * gamma.gm1dgp1() / a * (v - xi);
        State::new_unchecked(
            gamma.tdgp1() * (-sign * a + gamma.gm1d2() * v + xi),
            state.density() * base.powf(gamma.tdgm1()),
            state.pressure() * base.powf(gamma.gamma() * gamma.tdgm1()),
            gamma,
        )
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::riemann_solver::ExactRiemannSolver;

    const GAMMA: f64 = 1.4;

    fn get_state(velocity: f64, density: f64, pressure: f64) -> State {
        State::new(velocity, density, pressure, &GAMMA.into()).unwrap()
    }

    #[test]
    fn test_rankine_hugoniot() {
        let gamma = AdiabaticIndex::from(GAMMA);
        let p_star = 1.3;
        for (side, state) in [
            (Side::Left, get_state(0.8, 1.2, 0.5)),
            (Side::Right, get_state(-0.3, 0.4, 0.2)),
        ] {
            let v_star =
                state.velocity() + side.sign() * ExactRiemannSolver::fb(p_star, &state, &gamma);
            let wave = Wave::classify(side, &state, p_star, v_star, &gamma);
            let Wave::Shock {
                speed,
                star_density,
            } = wave
            else {
                panic!("Expected a shock!");
            };
            // mass and momentum flux through the shock are conserved
            assert_approx_eq!(
                f64,
                star_density * (speed - v_star),
                state.density() * (speed - state.velocity()),
                epsilon = 1e-12
            );
            assert_approx_eq!(
                f64,
                star_density * (speed - v_star) * v_star - p_star,
                state.density() * (speed - state.velocity()) * state.velocity() - state.pressure(),
                epsilon = 1e-12
            );
            assert!(star_density > state.density());
            assert!(wave.is_shock());
        }
    }

    #[test]
    fn test_shock_directions() {
        let gamma = AdiabaticIndex::from(GAMMA);
        let state = get_state(0., 1., 1.);
        let left = Wave::classify(Side::Left, &state, 2., 0., &gamma);
        let right = Wave::classify(Side::Right, &state, 2., 0., &gamma);
        assert!(left.outer_speed() < -state.sound_speed());
        assert!(right.outer_speed() > state.sound_speed());
        assert_approx_eq!(f64, left.outer_speed(), -right.outer_speed());
        assert_approx_eq!(f64, left.star_density(), right.star_density());
    }

    #[test]
    fn test_rarefaction_speeds() {
        let gamma = AdiabaticIndex::from(GAMMA);
        let state = get_state(0.5, 1., 1.);
        let wave = Wave::classify(Side::Left, &state, 0.3, 0.9, &gamma);
        let Wave::Rarefaction {
            head,
            tail,
            star_density,
        } = wave
        else {
            panic!("Expected a rarefaction!");
        };
        let star_sound_speed = (GAMMA * 0.3 / star_density).sqrt();
        assert_approx_eq!(f64, head, 0.5 - state.sound_speed());
        assert_approx_eq!(f64, tail, 0.9 - star_sound_speed, epsilon = 1e-12);
        assert_approx_eq!(f64, star_density, 0.3f64.powf(1. / GAMMA));
        assert_approx_eq!(f64, wave.outer_speed(), head);
        assert_approx_eq!(f64, wave.inner_speed(), tail);
        assert!(!wave.is_shock());
    }

    #[test]
    fn test_equal_pressure_is_zero_strength_rarefaction() {
        let gamma = AdiabaticIndex::from(GAMMA);
        let state = get_state(0.2, 1., 1.);
        let wave = Wave::classify(Side::Right, &state, 1., 0.2, &gamma);
        assert!(!wave.is_shock());
        assert_approx_eq!(f64, wave.outer_speed(), wave.inner_speed());
        assert_approx_eq!(f64, wave.star_density(), 1.);
    }

    #[test]
    fn test_fan_edges() {
        let gamma = AdiabaticIndex::from(GAMMA);
        let left = get_state(0., 1., 1.);
        let right = get_state(0.3, 0.5, 0.8);
        let p_star = 0.4;
        for (side, state) in [(Side::Left, left), (Side::Right, right)] {
            let v_star =
                state.velocity() + side.sign() * ExactRiemannSolver::fb(p_star, &state, &gamma);
            let wave = Wave::classify(side, &state, p_star, v_star, &gamma);
            let head = Wave::fan_state(side, &state, wave.outer_speed(), &gamma);
            assert_approx_eq!(f64, head.velocity(), state.velocity(), epsilon = 1e-12);
            assert_approx_eq!(f64, head.density(), state.density(), epsilon = 1e-12);
            assert_approx_eq!(f64, head.pressure(), state.pressure(), epsilon = 1e-12);

            let tail = Wave::fan_state(side, &state, wave.inner_speed(), &gamma);
            assert_approx_eq!(f64, tail.velocity(), v_star, epsilon = 1e-12);
            assert_approx_eq!(f64, tail.density(), wave.star_density(), epsilon = 1e-12);
            assert_approx_eq!(f64, tail.pressure(), p_star, epsilon = 1e-12);
        }
    }
}
