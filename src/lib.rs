//! Generator for the piecewise-polynomial reciprocal table used by the
//! divider's fast-division path.
//!
//! The divider range-reduces an IEEE-754 operand so that its mantissa lies
//! in `[1, 2)`, then evaluates a stored polynomial instead of dividing.
//! This crate produces that polynomial table: it partitions the
//! approximation domain, fits a Chebyshev interpolant to `1/x` on each
//! piece, converts each fit to power-basis coefficients, and emits the
//! quantized coefficients as a C++ header of constant data.

pub mod approx;
pub mod backend;
pub mod config;
pub mod opts;
pub mod table;

use std::fmt;
use std::io;

pub use approx::{Domain, Interval, SingularityError};
pub use config::{Config, ConfigError};
pub use table::Table;

/// An error terminating a generation run.
///
/// None of these are retried: the first two stem from the configuration
/// and the third from environment state that will not change without
/// operator intervention.
#[derive(Debug)]
pub enum Error {
    InvalidConfiguration(ConfigError),
    DivisionSingularity(SingularityError),
    ArtifactWrite(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(err) => {
                write!(f, "invalid configuration: {err}")
            }
            Error::DivisionSingularity(err) => write!(f, "{err}"),
            Error::ArtifactWrite(err) => {
                write!(f, "cannot write output: {err}")
            }
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::InvalidConfiguration(err)
    }
}

impl From<SingularityError> for Error {
    fn from(err: SingularityError) -> Self {
        Error::DivisionSingularity(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::ArtifactWrite(err)
    }
}
