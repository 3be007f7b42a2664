use std::{error::Error, fmt::Display, io};

/// Failures of a single solve or sample call. None of them are recoverable by retrying.
#[derive(Debug, Clone, PartialEq)]
pub enum RiemannError {
    InvalidState {
        velocity: f64,
        density: f64,
        pressure: f64,
    },
    VacuumCondition { critical_velocity: f64, velocity_jump: f64 },
    NonConvergence { iterations: usize, residual: f64 },
    InvalidTime(f64),
    NonFiniteCoordinate(f64),
}

impl Display for RiemannError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiemannError::InvalidState {
                velocity,
                density,
                pressure,
            } => write!(
                f,
                "Velocity must be finite and density and pressure positive, got velocity = {velocity}, density = {density}, pressure = {pressure}"
            ),
            RiemannError::VacuumCondition {
                critical_velocity,
                velocity_jump,
            } => write!(
                f,
                "Vacuum is generated: velocity jump {velocity_jump} exceeds the critical value {critical_velocity}"
            ),
            RiemannError::NonConvergence {
                iterations,
                residual,
            } => write!(
                f,
                "Pressure iteration did not converge after {iterations} iterations (residual: {residual})"
            ),
            RiemannError::InvalidTime(time) => {
                write!(f, "The solution can only be sampled at t > 0, got t = {time}")
            }
            RiemannError::NonFiniteCoordinate(xi) => {
                write!(f, "Cannot sample the solution at x/t = {xi}")
            }
        }
    }
}

impl Error for RiemannError {}

#[derive(Debug)]
pub enum ConfigError {
    MissingParameter(String),
    InvalidParameter(String),
    UnknownFormat(String),
    Io(io::Error),
    Json(serde_json::Error),
    Yaml(yaml_rust::ScanError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingParameter(name) => {
                write!(f, "Missing required parameter in configuration: {}", name)
            }
            ConfigError::InvalidParameter(description) => {
                write!(f, "Invalid parameter in configuration: {}", description)
            }
            ConfigError::UnknownFormat(name) => {
                write!(f, "Unknown configuration file format: {}", name)
            }
            ConfigError::Io(err) => write!(f, "Error reading configuration: {err}"),
            ConfigError::Json(err) => write!(f, "Error parsing JSON configuration: {err}"),
            ConfigError::Yaml(err) => write!(f, "Error parsing YAML configuration: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Json(err) => Some(err),
            ConfigError::Yaml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

impl From<yaml_rust::ScanError> for ConfigError {
    fn from(err: yaml_rust::ScanError) -> Self {
        ConfigError::Yaml(err)
    }
}
