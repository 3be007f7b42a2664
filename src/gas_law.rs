/// Adiabatic index of an ideal gas, together with the combinations of gamma
/// that show up in the exact Riemann solver.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AdiabaticIndex {
    gamma: f64,
    gamma_inv: f64,
    odgm1: f64,
    odgp1: f64,
}

impl From<f64> for AdiabaticIndex {
    fn from(value: f64) -> Self {
        AdiabaticIndex {
            gamma: value,
            gamma_inv: 1. / value,
            odgm1: 1. / (value - 1.),
            odgp1: 1. / (value + 1.),
        }
    }
}

impl From<AdiabaticIndex> for f64 {
    fn from(value: AdiabaticIndex) -> Self {
        value.gamma
    }
}

impl AdiabaticIndex {
    /// Only gamma > 1 describes a physical ideal gas (and keeps `odgm1` finite).
    pub fn is_valid(&self) -> bool {
        self.gamma > 1. && self.gamma.is_finite()
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// (gamma + 1) / (2 gamma)
    pub fn gp1d2g(&self) -> f64 {
        0.5 * (self.gamma + 1.) * self.gamma_inv
    }

    /// (gamma - 1) / (2 gamma)
    pub fn gm1d2g(&self) -> f64 {
        0.5 * (self.gamma - 1.) * self.gamma_inv
    }

    /// (gamma - 1) / (gamma + 1)
    pub fn gm1dgp1(&self) -> f64 {
        (self.gamma - 1.) * self.odgp1
    }

    /// (gamma - 1) / 2
    pub fn gm1d2(&self) -> f64 {
        0.5 * (self.gamma - 1.)
    }

    pub fn gamma_inv(&self) -> f64 {
        self.gamma_inv
    }

    pub fn tdgm1(&self) -> f64 {
        2. * self.odgm1
    }

    pub fn tdgp1(&self) -> f64 {
        2. * self.odgp1
    }

    /// Ideal gas sound speed.
    pub fn sound_speed(&self, pressure: f64, density_inv: f64) -> f64 {
        (self.gamma * pressure * density_inv).sqrt()
    }

    /// Specific internal energy
    pub fn internal_energy_from_pressure(&self, pressure: f64, density_inv: f64) -> f64 {
        pressure * density_inv * self.odgm1
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_combinations() {
        let gamma = AdiabaticIndex::from(1.4);
        assert_approx_eq!(f64, gamma.gamma(), 1.4, epsilon = 1e-12);
        assert_approx_eq!(f64, gamma.gm1d2g(), 0.4 / 2.8, epsilon = 1e-12);
        assert_approx_eq!(f64, gamma.gp1d2g(), 2.4 / 2.8, epsilon = 1e-12);
        assert_approx_eq!(f64, gamma.gm1dgp1(), 0.4 / 2.4, epsilon = 1e-12);
        assert_approx_eq!(f64, gamma.tdgm1(), 5., epsilon = 1e-12);
        assert_approx_eq!(f64, gamma.tdgp1(), 2. / 2.4, epsilon = 1e-12);
        assert_approx_eq!(f64, gamma.gm1d2(), 0.2, epsilon = 1e-12);
        assert_approx_eq!(f64, f64::from(gamma), 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_validity() {
        assert!(AdiabaticIndex::from(5. / 3.).is_valid());
        assert!(!AdiabaticIndex::from(1.).is_valid());
        assert!(!AdiabaticIndex::from(0.5).is_valid());
        assert!(!AdiabaticIndex::from(f64::NAN).is_valid());
    }

    #[test]
    fn test_internal_energy() {
        let gamma = AdiabaticIndex::from(1.4);
        assert_approx_eq!(f64, gamma.internal_energy_from_pressure(1., 1.), 2.5, epsilon = 1e-12);
        assert_approx_eq!(f64, gamma.sound_speed(1., 1.), 1.4f64.sqrt(), epsilon = 1e-12);
    }
}
