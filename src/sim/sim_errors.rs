//src/sim/sim_errors.rs
use std::fmt;

use std::io::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    ConfigError(String),
    TraceError(String),
    ReportError(String),
}


impl SimError {
    pub fn config_error(msg: &str) -> Self {
        SimError::ConfigError(msg.to_string())
    }

    pub fn trace_error(msg: &str) -> Self {
        SimError::TraceError(msg.to_string())
    }

    pub fn report_error(msg: &str) -> Self {
        SimError::ReportError(msg.to_string())
    }
}


impl fmt::Display for SimError{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::ConfigError(msg) => write!(f, "ConfigError: {}", msg),
            SimError::TraceError(msg) => write!(f, "TraceError: {}", msg),
            SimError::ReportError(msg) => write!(f, "ReportError: {}", msg),
        }
    }
}


impl From<Error> for SimError {
    fn from(err: Error) -> Self {
        SimError::TraceError(format!("I/O Error: {}", err))
    }
}


/// Resultat type pour les operations du simulateur
pub type SimResult<T> = Result<T, SimError>;
