//! Power-law fitting of degree samples.

use derive_more::Display;
use itertools::Itertools;
use rayon::prelude::*;
use std::str::FromStr;

/// A fitted power law `p(x) ∝ x^(-alpha)` for `x >= xmin`.
#[derive(Debug, Display, Clone, Copy, PartialEq)]
#[display(
    fmt = "{:.4} (xmin {}, KS {:.4}, tail {})",
    alpha,
    xmin,
    ks_distance,
    tail_len
)]
pub struct Fit {
    pub alpha: f64,
    pub xmin: f64,
    /// Kolmogorov-Smirnov distance between the tail and the fitted law.
    pub ks_distance: f64,
    pub tail_len: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    #[display(fmt = "no positive values")]
    NoData,
    #[display(fmt = "too few distinct values ({})", _0)]
    TooFewDistinct(usize),
    #[display(fmt = "degenerate distribution")]
    Degenerate,
}

impl std::error::Error for FitError {}

/// A power-law estimator.
pub trait PowerLawFit {
    fn fit(&self, sample: &[f64]) -> Result<Fit, FitError>;
}

/// How a degree histogram is turned into the sample handed to the estimator.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SampleShape {
    /// One value per vertex: each degree repeated by its count.
    #[display(fmt = "degrees")]
    Degrees,
    /// One value per distinct degree: the count column.
    #[display(fmt = "counts")]
    Counts,
}

impl Default for SampleShape {
    fn default() -> Self {
        SampleShape::Degrees
    }
}

impl FromStr for SampleShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "degrees" => Ok(SampleShape::Degrees),
            "counts" => Ok(SampleShape::Counts),
            _ => Err(format!("invalid sample shape: {}", s)),
        }
    }
}

/// Continuous maximum-likelihood fit with `xmin` chosen by minimum
/// Kolmogorov-Smirnov distance.
///
/// Every distinct value except the largest is tried as `xmin`. For a given
/// `xmin` the tail `x >= xmin` yields
/// `alpha = 1 + n / sum(ln(x / xmin))`. Non-positive values are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContinuousMle;

impl PowerLawFit for ContinuousMle {
    fn fit(&self, sample: &[f64]) -> Result<Fit, FitError> {
        let mut data: Vec<f64> = sample
            .iter()
            .copied()
            .filter(|x| x.is_finite() && *x > 0.0)
            .collect();
        if data.is_empty() {
            return Err(FitError::NoData);
        }
        data.par_sort_unstable_by(|a, b| a.total_cmp(b));
        let xmins: Vec<f64> = data.iter().copied().dedup().collect();
        if xmins.len() < 2 {
            return Err(FitError::TooFewDistinct(xmins.len()));
        }
        xmins[..xmins.len() - 1]
            .par_iter()
            .filter_map(|&xmin| fit_tail(&data, xmin))
            .min_by(|a, b| {
                a.ks_distance
                    .total_cmp(&b.ks_distance)
                    .then(a.xmin.total_cmp(&b.xmin))
            })
            .ok_or(FitError::Degenerate)
    }
}

/// Fits the tail of the sorted `data` starting at `xmin`.
fn fit_tail(data: &[f64], xmin: f64) -> Option<Fit> {
    let tail = &data[data.partition_point(|&x| x < xmin)..];
    let n = tail.len() as f64;
    let log_sum: f64 = tail.iter().map(|&x| (x / xmin).ln()).sum();
    let alpha = 1.0 + n / log_sum;
    if log_sum <= 0.0 || !alpha.is_finite() {
        return None;
    }
    let ks_distance = tail
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let cdf = 1.0 - (x / xmin).powf(1.0 - alpha);
            let below = i as f64 / n;
            let above = (i + 1) as f64 / n;
            (cdf - below).abs().max((above - cdf).abs())
        })
        .fold(0.0, f64::max);
    Some(Fit {
        alpha,
        xmin,
        ks_distance,
        tail_len: tail.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Quantiles of a continuous power law with `xmin = 1`.
    fn pareto_quantiles(alpha: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let u = (i as f64 + 0.5) / n as f64;
                (1.0 - u).powf(-1.0 / (alpha - 1.0))
            })
            .collect()
    }

    #[test]
    fn test_recovers_exponent() {
        let fit = ContinuousMle.fit(&pareto_quantiles(2.5, 10_000)).unwrap();
        assert!((fit.alpha - 2.5).abs() < 0.1, "alpha = {}", fit.alpha);
        assert!(fit.ks_distance < 0.05);
    }

    #[test]
    fn test_two_values() {
        let fit = ContinuousMle.fit(&[1.0, 2.0]).unwrap();
        assert_eq!(fit.xmin, 1.0);
        assert_eq!(fit.tail_len, 2);
        assert!((fit.alpha - (1.0 + 2.0 / 2f64.ln())).abs() < 1e-12);
    }

    #[test]
    fn test_failures() {
        assert_eq!(ContinuousMle.fit(&[]), Err(FitError::NoData));
        assert_eq!(ContinuousMle.fit(&[0.0, 0.0]), Err(FitError::NoData));
        assert_eq!(
            ContinuousMle.fit(&[3.0, 3.0, 0.0]),
            Err(FitError::TooFewDistinct(1))
        );
    }

    #[test]
    fn test_ignores_zero_degrees() {
        let with_zeros = ContinuousMle.fit(&[0.0, 0.0, 1.0, 2.0, 2.0, 5.0]);
        let without = ContinuousMle.fit(&[1.0, 2.0, 2.0, 5.0]);
        assert_eq!(with_zeros, without);
    }

    #[test]
    fn test_sample_shape_from_str() {
        assert_eq!("degrees".parse::<SampleShape>(), Ok(SampleShape::Degrees));
        assert_eq!("counts".parse::<SampleShape>(), Ok(SampleShape::Counts));
        assert!("bins".parse::<SampleShape>().is_err());
        assert_eq!(SampleShape::Counts.to_string(), "counts");
    }
}
