//! Pipeline configuration.

use std::fmt;

use crate::approx::Domain;

/// Parameters for one table-generation run.
///
/// The shipped configuration is fixed, but the pipeline takes its
/// parameters explicitly so the generator's properties can be checked
/// against other configurations without a rebuild.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Approximation domain. Must match the range the consumer normalizes
    /// its operands into.
    pub domain: Domain,
    /// Polynomial degree per subinterval; each table row holds
    /// `degree + 1` coefficients.
    pub degree: u32,
    /// Number of subintervals (table rows).
    pub intervals: u32,
}

impl Config {
    /// Rejects configurations that cannot produce a well-formed table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.intervals == 0 {
            return Err(ConfigError::NoIntervals);
        }

        if !(self.domain.left < self.domain.right) {
            return Err(ConfigError::EmptyDomain(self.domain));
        }

        if self.domain.left <= 0.0 && self.domain.right >= 0.0 {
            return Err(ConfigError::DomainContainsZero(self.domain));
        }

        Ok(())
    }
}

impl Default for Config {
    /// The configuration shipped with the divider: `1/x` on `[1.0, 2.0)`,
    /// eight rows of two coefficients each.
    fn default() -> Config {
        Config {
            domain: Domain::new(1.0, 2.0),
            degree: 1,
            intervals: 8,
        }
    }
}

/// A configuration rejected before any computation.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    NoIntervals,
    EmptyDomain(Domain),
    DomainContainsZero(Domain),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::NoIntervals => {
                write!(f, "interval count must be positive")
            }
            ConfigError::EmptyDomain(domain) => {
                write!(f, "domain {domain} is empty")
            }
            ConfigError::DomainContainsZero(domain) => {
                write!(f, "domain {domain} contains zero")
            }
        }
    }
}
