//! Sample grids and the few elementary functions the catalog needs

use std::f64::consts::PI;

/// `n` evenly spaced samples over `[start, end]`, both endpoints included
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// Normalized sinc: sin(πx) / (πx), with sinc(0) = 1
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Pair every sample with `f(sample)`
pub fn sample(xs: &[f64], f: impl Fn(f64) -> f64) -> Vec<[f64; 2]> {
    xs.iter().map(|&x| [x, f(x)]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_endpoints() {
        let xs = linspace(0.0, 1.0, 5);
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn linspace_last_sample_is_exact() {
        let xs = linspace(0.0, 2.0 * PI, 1000);
        assert_eq!(xs.len(), 1000);
        assert_eq!(*xs.last().unwrap(), 2.0 * PI);
    }

    #[test]
    fn sinc_peaks_at_zero_and_vanishes_at_integers() {
        assert_eq!(sinc(0.0), 1.0);
        for k in 1..5 {
            assert!(sinc(k as f64).abs() < 1e-12);
        }
    }
}
