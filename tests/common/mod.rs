use exact_riemann::{AdiabaticIndex, ExactRiemannSolver, ProblemConfig, RiemannSolution, State};
use rand::{rngs::StdRng, Rng};

pub const SOD_CONFIG: &'static str = r##"
{
    "left": {"velocity": 0.0, "density": 1.0, "pressure": 1.0},
    "right": {"velocity": 0.0, "density": 0.125, "pressure": 0.1},
    "gamma": 1.4,
    "number": 100,
    "time": 0.2,
    "fileName": "sod.dat"
}
"##;

pub const STATIONARY_CONTACT_CONFIG: &'static str = r##"
left:
  velocity: 0.
  density: 1.
  pressure: 1.
right:
  velocity: 0.
  density: 1.
  pressure: 1.
gamma: 1.4
number: 50
time: 0.1
fileName: "contact.dat"
"##;

pub const VACUUM_CONFIG: &'static str = r##"
{
    "left": {"velocity": -5.0, "density": 1.0, "pressure": 0.4},
    "right": {"velocity": 5.0, "density": 1.0, "pressure": 0.4},
    "gamma": 1.4,
    "number": 10,
    "time": 0.1,
    "fileName": "vacuum.dat"
}
"##;

pub fn get_solution(config: &ProblemConfig) -> RiemannSolution {
    let (left, right) = config.states().expect("Error creating states!");
    config
        .solver()
        .solve(&left, &right, &config.adiabatic_index())
        .expect("Error solving Riemann problem!")
}

/// A random state with density and pressure spread over a few orders of magnitude.
pub fn random_state(rng: &mut StdRng, gamma: &AdiabaticIndex) -> State {
    let velocity = rng.gen_range(-2.0..2.0);
    let density = 10f64.powf(rng.gen_range(-2.0..1.0));
    let pressure = 10f64.powf(rng.gen_range(-3.0..2.0));
    State::new(velocity, density, pressure, gamma).expect("Error creating random state!")
}

/// Solve a random Riemann problem, skipping the ones that generate vacuum.
pub fn random_solution(rng: &mut StdRng, gamma: &AdiabaticIndex) -> RiemannSolution {
    loop {
        let left = random_state(rng, gamma);
        let right = random_state(rng, gamma);
        if let Ok(solution) = ExactRiemannSolver::new().solve(&left, &right, gamma) {
            return solution;
        }
    }
}
