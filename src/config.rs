use std::{fs, path::Path};

use serde::Deserialize;
use yaml_rust::{Yaml, YamlLoader};

use crate::{
    errors::{ConfigError, RiemannError},
    gas_law::AdiabaticIndex,
    physical_quantities::State,
    riemann_solver::ExactRiemannSolver,
};

fn default_tolerance() -> f64 {
    ExactRiemannSolver::default().tolerance()
}

fn default_max_iterations() -> usize {
    ExactRiemannSolver::default().max_iterations()
}

/// Constant initial state on one side of the discontinuity.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StateCfg {
    pub velocity: f64,
    pub density: f64,
    pub pressure: f64,
}

impl StateCfg {
    fn parse(yaml: &Yaml, name: &str) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            as_number(&yaml[key]).ok_or(ConfigError::MissingParameter(format!("{name}:{key}")))
        };
        Ok(Self {
            velocity: get("velocity")?,
            density: get("density")?,
            pressure: get("pressure")?,
        })
    }

    pub fn to_state(&self, gamma: &AdiabaticIndex) -> Result<State, RiemannError> {
        State::new(self.velocity, self.density, self.pressure, gamma)
    }
}

/// A Riemann problem together with the grid and time at which to output its solution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemConfig {
    pub left: StateCfg,
    pub right: StateCfg,
    pub gamma: f64,
    pub number: usize,
    pub time: f64,
    pub file_name: String,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

/// YAML distinguishes integers from reals, we accept both.
fn as_number(yaml: &Yaml) -> Option<f64> {
    match yaml {
        Yaml::Integer(i) => Some(*i as f64),
        _ => yaml.as_f64(),
    }
}

impl ProblemConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn from_yaml(yaml: &Yaml) -> Result<Self, ConfigError> {
        let gamma = as_number(&yaml["gamma"])
            .ok_or(ConfigError::MissingParameter("gamma".to_string()))?;
        let number = yaml["number"]
            .as_i64()
            .ok_or(ConfigError::MissingParameter("number".to_string()))?;
        let number = usize::try_from(number)
            .map_err(|_| ConfigError::InvalidParameter(format!("number: {number}")))?;
        let time =
            as_number(&yaml["time"]).ok_or(ConfigError::MissingParameter("time".to_string()))?;
        let file_name = yaml["fileName"]
            .as_str()
            .ok_or(ConfigError::MissingParameter("fileName".to_string()))?
            .to_string();
        let tolerance = as_number(&yaml["tolerance"]).unwrap_or_else(default_tolerance);
        let max_iterations = match yaml["maxIterations"].as_i64() {
            Some(max_iterations) => usize::try_from(max_iterations).map_err(|_| {
                ConfigError::InvalidParameter(format!("maxIterations: {max_iterations}"))
            })?,
            None => default_max_iterations(),
        };

        Self {
            left: StateCfg::parse(&yaml["left"], "left")?,
            right: StateCfg::parse(&yaml["right"], "right")?,
            gamma,
            number,
            time,
            file_name,
            tolerance,
            max_iterations,
        }
        .validate()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let docs = YamlLoader::load_from_str(yaml)?;
        let config_yml = docs
            .first()
            .ok_or(ConfigError::MissingParameter("YAML document".to_string()))?;
        Self::from_yaml(config_yml)
    }

    /// Read a configuration file, YAML for `.yml` and `.yaml` files and JSON otherwise.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => Self::from_yaml_str(&content),
            Some("json") | None => Self::from_json_str(&content),
            Some(ext) => Err(ConfigError::UnknownFormat(ext.to_string())),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !self.adiabatic_index().is_valid() {
            return Err(ConfigError::InvalidParameter(format!(
                "gamma must be larger than 1, got {}",
                self.gamma
            )));
        }
        if self.number == 0 {
            return Err(ConfigError::InvalidParameter(
                "number of grid points must be positive".to_string(),
            ));
        }
        if !(self.tolerance > 0.) || self.max_iterations == 0 {
            return Err(ConfigError::InvalidParameter(format!(
                "tolerance: {}, maxIterations: {}",
                self.tolerance, self.max_iterations
            )));
        }
        Ok(self)
    }

    pub fn adiabatic_index(&self) -> AdiabaticIndex {
        self.gamma.into()
    }

    /// The left and right initial states.
    pub fn states(&self) -> Result<(State, State), RiemannError> {
        let gamma = self.adiabatic_index();
        Ok((self.left.to_state(&gamma)?, self.right.to_state(&gamma)?))
    }

    pub fn solver(&self) -> ExactRiemannSolver {
        ExactRiemannSolver::new()
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations)
    }
}
