//! Coefficient quantization.

use smallvec::SmallVec;

use crate::approx;
use crate::config::Config;
use crate::Error;

/// One row of quantized coefficients, ascending by degree.
pub type Row = SmallVec<[u64; 4]>;

/// An immutable table of quantized polynomial coefficients.
///
/// Row `i` covers subinterval `i` of the partition; each row holds
/// `degree + 1` entries.
#[derive(Debug, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Runs the full numeric pipeline for `config`.
    pub fn build(config: &Config) -> Result<Table, Error> {
        config.validate()?;

        let rows = approx::build_table(config)?
            .iter()
            .map(|row| row.iter().map(|&c| quantize(c)).collect())
            .collect();

        Ok(Table { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

/// Encodes a coefficient as the bit pattern of its nearest `f32`,
/// zero-extended into a 64-bit slot.
///
/// The byte-level round trip pins down the little-endian layout the
/// consumer reinterprets. The consumer declares its table as `uint64_t`
/// while storing 32-bit patterns; the widening is kept for ABI
/// compatibility, at the cost of doubling the artifact size.
pub fn quantize(coefficient: f64) -> u64 {
    let bits = u32::from_le_bytes((coefficient as f32).to_le_bytes());

    u64::from(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::Domain;
    use crate::config::ConfigError;

    fn decode(entry: u64) -> f64 {
        f64::from(f32::from_le_bytes(u32::to_le_bytes(entry as u32)))
    }

    #[test]
    fn quantize_known_patterns() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 0x3f800000);
        assert_eq!(quantize(-0.5), 0xbf000000);
        assert_eq!(quantize(2.0 / 3.0), 1059760811);
    }

    #[test]
    fn quantize_round_trip() {
        for &c in &[0.9411764705882353, -0.4152249134948097, 1.0 / 1.5] {
            let decoded = decode(quantize(c));

            assert!((decoded - c).abs() <= c.abs() * f64::from(f32::EPSILON));
        }
    }

    #[test]
    fn table_shape() {
        for (intervals, degree) in [(8, 1), (1, 0), (3, 4), (16, 2)] {
            let config = Config {
                degree,
                intervals,
                ..Default::default()
            };

            let table = Table::build(&config).unwrap();

            assert_eq!(table.rows().len(), intervals as usize);

            for row in table.rows() {
                assert_eq!(row.len(), degree as usize + 1);
            }
        }
    }

    #[test]
    fn shipped_configuration() {
        let table = Table::build(&Config::default()).unwrap();

        let expected: Vec<Vec<u64>> = vec![
            vec![1064393687, 3177392451],
            vec![1062723777, 3174419134],
            vec![1061373150, 3172255426],
            vec![1060258149, 3170370032],
            vec![1059322015, 3167871507],
            vec![1058524878, 3165907870],
            vec![1057837902, 3164336637],
            vec![1057239716, 3163059799],
        ];

        for (row, expected) in table.rows().iter().zip(&expected) {
            assert_eq!(row.as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn constant_row_approximates_midpoint_reciprocal() {
        let config = Config {
            degree: 0,
            intervals: 1,
            ..Default::default()
        };

        let table = Table::build(&config).unwrap();
        let decoded = decode(table.rows()[0][0]);

        assert!((decoded - 1.0 / 1.5).abs() < 1e-6);
    }

    #[test]
    fn invalid_configuration_rejected() {
        let config = Config {
            intervals: 0,
            ..Default::default()
        };

        assert!(matches!(
            Table::build(&config),
            Err(Error::InvalidConfiguration(ConfigError::NoIntervals))
        ));
    }

    #[test]
    fn singular_domain_rejected_before_fitting() {
        let config = Config {
            domain: Domain::new(-1.0, 1.0),
            ..Default::default()
        };

        assert!(matches!(
            Table::build(&config),
            Err(Error::InvalidConfiguration(
                ConfigError::DomainContainsZero(_)
            ))
        ));
    }
}
