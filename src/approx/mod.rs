//! Piecewise approximation of the reciprocal.

pub mod chebyshev;

use std::fmt;

use log::debug;

use crate::config::Config;

/// The range of values approximated by a table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub left: f64,
    pub right: f64,
}

impl Domain {
    pub const fn new(left: f64, right: f64) -> Domain {
        Domain { left, right }
    }

    /// Splits the domain into `rows` equal-width subintervals, ordered
    /// left to right.
    ///
    /// Adjacent subintervals share their breakpoint exactly, and the last
    /// breakpoint is pinned to the right bound so accumulated rounding in
    /// `left + i * width` cannot leave the domain uncovered.
    pub fn partition(&self, rows: u32) -> Vec<Interval> {
        let width = (self.right - self.left) / f64::from(rows);

        let edge = |i: u32| {
            if i == rows {
                self.right
            } else {
                self.left + f64::from(i) * width
            }
        };

        (0..rows)
            .map(|i| Interval::new(edge(i), edge(i + 1)))
            .collect()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}

/// One partition row's bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub left: f64,
    pub right: f64,
}

impl Interval {
    pub const fn new(left: f64, right: f64) -> Interval {
        Interval { left, right }
    }

    pub fn midpoint(&self) -> f64 {
        (self.right + self.left) / 2.0
    }

    pub fn halfwidth(&self) -> f64 {
        (self.right - self.left) / 2.0
    }

    /// Maps a coordinate on the canonical interpolation domain `[-1, 1]`
    /// into the interval.
    pub fn unmap(&self, t: f64) -> f64 {
        t * self.halfwidth() + self.midpoint()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}

/// Evaluates `1/x` at the image of the canonical coordinate `t` under the
/// interval's affine map.
///
/// Chebyshev nodes live on `[-1, 1]`; remapping node coordinates on demand
/// lets the fitter treat every subinterval uniformly.
fn reciprocal(interval: &Interval, t: f64) -> f64 {
    1.0 / interval.unmap(t)
}

/// Fits a polynomial to the reciprocal on each subinterval of the
/// configured domain.
///
/// Row `i` of the result holds the power-basis coefficients for
/// subinterval `i`, ascending by degree. Rows are pushed in subinterval
/// order, so the table order never depends on evaluation order.
pub fn build_table(config: &Config) -> Result<Vec<Vec<f64>>, SingularityError> {
    let intervals = config.domain.partition(config.intervals);
    let mut table = Vec::with_capacity(intervals.len());

    for (index, interval) in intervals.into_iter().enumerate() {
        if interval.left <= 0.0 && interval.right >= 0.0 {
            return Err(SingularityError { index, interval });
        }

        let fit = chebyshev::interpolate(
            |t| reciprocal(&interval, t),
            config.degree,
        );

        debug!("interval {index} {interval}: fit {fit:?}");

        table.push(chebyshev::to_power_basis(&fit));
    }

    Ok(table)
}

/// The reciprocal was requested on an interval containing zero.
///
/// A validated configuration never reaches this; it guards direct callers
/// against domains the affine map would send through the pole.
#[derive(Debug)]
pub struct SingularityError {
    pub index: usize,
    pub interval: Interval,
}

impl fmt::Display for SingularityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "reciprocal is singular on subinterval {} {}",
            self.index, self.interval
        )
    }
}
