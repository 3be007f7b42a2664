use std::fmt::Display;

use crate::{errors::RiemannError, gas_law::AdiabaticIndex};

/// Primitive state of a one dimensional ideal gas.
///
/// The sound speed is derived once from the adiabatic index at construction,
/// a `State` is never mutated afterwards.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct State {
    velocity: f64,
    density: f64,
    pressure: f64,
    sound_speed: f64,
}

impl State {
    /// Create a new state, rejecting non-finite values and non-positive densities and pressures.
    pub fn new(
        velocity: f64,
        density: f64,
        pressure: f64,
        gamma: &AdiabaticIndex,
    ) -> Result<Self, RiemannError> {
        let is_positive = |value: f64| value > 0. && value.is_finite();
        if !velocity.is_finite() || !is_positive(density) || !is_positive(pressure) {
            return Err(RiemannError::InvalidState {
                velocity,
                density,
                pressure,
            });
        }
        Ok(Self::new_unchecked(velocity, density, pressure, gamma))
    }

    /// Used for the star and fan states, which are positive by construction.
    pub(crate) fn new_unchecked(
        velocity: f64,
        density: f64,
        pressure: f64,
        gamma: &AdiabaticIndex,
    ) -> Self {
        Self {
            velocity,
            density,
            pressure,
            sound_speed: gamma.sound_speed(pressure, 1. / density),
        }
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    pub fn sound_speed(&self) -> f64 {
        self.sound_speed
    }

    /// Specific internal energy p / ((gamma - 1) rho)
    pub fn internal_energy(&self, gamma: &AdiabaticIndex) -> f64 {
        gamma.internal_energy_from_pressure(self.pressure, 1. / self.density)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "velocity = {:.3e}, density = {:.3e}, pressure = {:.3e}",
            self.velocity, self.density, self.pressure
        )
    }
}
