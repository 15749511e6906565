//! Gaussian spectral peaks for the second-order interference concept plot
//!
//! A grating or interference filter that passes a colour at wavelength
//! `lambda` in first order also passes light at `2 lambda` in second order,
//! weaker and broader. The peaks below are illustrative, not measured.

/// Diffraction order of a peak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeakOrder {
    First,
    Second,
}

/// One Gaussian peak: `amplitude * exp(-0.5 ((x - center) / sigma)^2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianPeak {
    pub label: &'static str,
    pub center_nm: f64,
    pub amplitude: f64,
    pub sigma_nm: f64,
    /// Half-width of the sampled window around the center
    pub half_window_nm: f64,
    pub order: PeakOrder,
}

/// Samples per curve
pub const PEAK_SAMPLES: usize = 200;

pub const FIRST_ORDER_PEAKS: [GaussianPeak; 3] = [
    GaussianPeak::first("Blue (1st)", 450.0),
    GaussianPeak::first("Green (1st)", 550.0),
    GaussianPeak::first("Red (1st)", 650.0),
];

pub const SECOND_ORDER_PEAKS: [GaussianPeak; 3] = [
    GaussianPeak::second("Blue (2nd)", 900.0),
    GaussianPeak::second("Green (2nd)", 1100.0),
    GaussianPeak::second("Red (2nd)", 1300.0),
];

impl GaussianPeak {
    const fn first(label: &'static str, center_nm: f64) -> Self {
        Self {
            label,
            center_nm,
            amplitude: 1.0,
            sigma_nm: 12.0,
            half_window_nm: 40.0,
            order: PeakOrder::First,
        }
    }

    const fn second(label: &'static str, center_nm: f64) -> Self {
        Self {
            label,
            center_nm,
            amplitude: 0.35,
            sigma_nm: 18.0,
            half_window_nm: 60.0,
            order: PeakOrder::Second,
        }
    }

    /// Peak value at wavelength `x`
    pub fn value(&self, x: f64) -> f64 {
        let z = (x - self.center_nm) / self.sigma_nm;
        self.amplitude * (-0.5 * z * z).exp()
    }

    /// `n` evenly spaced points over `center +- half_window`, endpoints included
    pub fn sample(&self, n: usize) -> Vec<(f64, f64)> {
        linspace(
            self.center_nm - self.half_window_nm,
            self.center_nm + self.half_window_nm,
            n,
        )
        .into_iter()
        .map(|x| (x, self.value(x)))
        .collect()
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
