//! Chebyshev interpolation and basis conversion.

use std::f64::consts::PI;

/// Chebyshev points of the first kind for an order-`n` fit: the roots of
/// `T_n`, in ascending order.
fn nodes(n: u32) -> impl Iterator<Item = f64> {
    (0..n)
        .rev()
        .map(move |k| {
            PI * (2.0 * f64::from(k) + 1.0) / (2.0 * f64::from(n))
        })
        .map(f64::cos)
}

/// Interpolates `f` at the `degree + 1` first-kind Chebyshev points,
/// returning the coefficients of the fit in the Chebyshev basis.
///
/// Interpolating at these nodes rather than uniformly spaced ones keeps
/// the error from oscillating toward the interval ends (the Runge
/// phenomenon), so `degree + 1` coefficients give near-minimax quality.
///
/// The coefficients follow from the discrete orthogonality of the basis
/// over the node set: `c_j = (2 - [j = 0]) / n * sum_k f(x_k) T_j(x_k)`.
pub fn interpolate<F>(f: F, degree: u32) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    let order = degree + 1;
    let mut coeffs = vec![0.0; order as usize];

    for x in nodes(order) {
        let y = f(x);

        coeffs[0] += y;

        // T_j(x) by the three-term recurrence.
        let mut t_prev = 1.0;
        let mut t_curr = x;

        for c in &mut coeffs[1..] {
            *c += y * t_curr;

            (t_prev, t_curr) = (t_curr, 2.0 * x * t_curr - t_prev);
        }
    }

    let scale = 2.0 / f64::from(order);

    for c in &mut coeffs {
        *c *= scale;
    }

    coeffs[0] /= 2.0;

    coeffs
}

/// Rewrites a Chebyshev-basis expansion as power-basis coefficients,
/// ascending by degree.
///
/// Accumulates `c_k * T_k` with the power-basis form of each `T_k`
/// carried through the recurrence `T_k = 2x T_{k-1} - T_{k-2}`. The
/// conversion is well-conditioned for the small degrees used here.
pub fn to_power_basis(coeffs: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; coeffs.len()];

    out[0] = coeffs[0];

    // T_1 and T_0 in the power basis.
    let mut t_curr = vec![0.0, 1.0];
    let mut t_prev = vec![1.0];

    for (k, &c) in coeffs.iter().enumerate().skip(1) {
        if k > 1 {
            let mut t_next = vec![0.0; k + 1];

            for (i, &t) in t_curr.iter().enumerate() {
                t_next[i + 1] += 2.0 * t;
            }

            for (i, &t) in t_prev.iter().enumerate() {
                t_next[i] -= t;
            }

            t_prev = std::mem::replace(&mut t_curr, t_next);
        }

        for (o, &t) in out.iter_mut().zip(&t_curr) {
            *o += c * t;
        }
    }

    out
}

/// Evaluates power-basis coefficients at `x` by Horner's rule.
pub fn evaluate(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_are_ascending_roots() {
        let xs: Vec<_> = nodes(4).collect();

        assert_eq!(xs.len(), 4);
        assert!(xs.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(xs.iter().all(|x| (-1.0..=1.0).contains(x)));

        // Roots of T_4 come in symmetric pairs.
        assert!((xs[0] + xs[3]).abs() < 1e-15);
        assert!((xs[1] + xs[2]).abs() < 1e-15);
    }

    #[test]
    fn constant_function_fit() {
        let coeffs = interpolate(|_| 4.5, 0);

        assert_eq!(coeffs, vec![4.5]);
    }

    #[test]
    fn polynomial_fit_is_exact() {
        // Interpolation reproduces any polynomial of matching degree.
        let f = |x: f64| 3.0 - 2.0 * x + x * x;
        let coeffs = to_power_basis(&interpolate(f, 2));

        assert!((coeffs[0] - 3.0).abs() < 1e-12);
        assert!((coeffs[1] + 2.0).abs() < 1e-12);
        assert!((coeffs[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn power_basis_conversion() {
        // 2 T_0 + T_2 = 1 + 2x^2; T_3 = -3x + 4x^3.
        let quadratic = to_power_basis(&[2.0, 0.0, 1.0]);
        let cubic = to_power_basis(&[0.0, 0.0, 0.0, 1.0]);

        assert_eq!(quadratic, vec![1.0, 0.0, 2.0]);
        assert_eq!(cubic, vec![0.0, -3.0, 0.0, 4.0]);
    }

    #[test]
    fn horner_evaluation() {
        assert_eq!(evaluate(&[1.0, -2.0, 3.0], 2.0), 9.0);
        assert_eq!(evaluate(&[5.0], 123.0), 5.0);
    }
}
