//! Percentage scale → absolute point bands.
//!
//! For band `i` (0 = highest threshold):
//!
//! ```text
//! low[i]  = round(total * pct[i] / 100)
//! high[0] = total
//! high[i] = round(total * pct[i - 1] / 100)      (i > 0)
//! ```
//!
//! Rounding is half away from zero (`f64::round`) at every boundary, so a
//! threshold of exactly `x.5` points moves up to the next whole point.

use crate::domain::{GradeBand, RescaledBand};

/// Rescale an ordered (highest first) percentage scale to `total_points`.
///
/// The input order is kept and not validated. An empty scale gives an empty
/// result; a zero total gives all-zero bands.
pub fn rescale(bands: &[GradeBand], total_points: f64) -> Vec<RescaledBand> {
    bands
        .iter()
        .enumerate()
        .map(|(i, band)| {
            let high_points = match i {
                0 => total_points,
                _ => threshold_points(total_points, bands[i - 1].threshold_percent),
            };
            RescaledBand {
                letter: band.letter.clone(),
                low_points: threshold_points(total_points, band.threshold_percent),
                high_points,
            }
        })
        .collect()
}

/// Absolute points for a percent threshold, rounded half away from zero.
pub fn threshold_points(total_points: f64, percent: f64) -> f64 {
    (total_points * percent / 100.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<GradeBand> {
        vec![
            GradeBand::new("A", 93.0),
            GradeBand::new("B", 85.0),
            GradeBand::new("C", 77.0),
        ]
    }

    #[test]
    fn rescales_to_thousand_points() {
        let out = rescale(&abc(), 1000.0);
        let got: Vec<(&str, f64, f64)> = out
            .iter()
            .map(|b| (b.letter.as_str(), b.low_points, b.high_points))
            .collect();
        assert_eq!(
            got,
            [("A", 930.0, 1000.0), ("B", 850.0, 930.0), ("C", 770.0, 850.0)]
        );
    }

    #[test]
    fn adjacent_bands_share_boundaries() {
        let out = rescale(&abc(), 8915.0);
        for (i, band) in out.iter().enumerate() {
            assert!(band.high_points >= band.low_points, "band {i} inverted");
            if i > 0 {
                assert_eq!(band.high_points, out[i - 1].low_points);
            }
        }
        assert_eq!(out[0].high_points, 8915.0);
    }

    #[test]
    fn ties_round_away_from_zero() {
        // 50 * 93 / 100 = 46.5, 50 * 85 / 100 = 42.5
        let out = rescale(&abc()[..2], 50.0);
        assert_eq!(out[0].low_points, 47.0);
        assert_eq!(out[1].low_points, 43.0);
        assert_eq!(out[1].high_points, 47.0);
    }

    #[test]
    fn top_band_keeps_fractional_total() {
        let out = rescale(&abc(), 99.5);
        assert_eq!(out[0].high_points, 99.5);
        assert_eq!(out[0].low_points, 93.0);
    }

    #[test]
    fn empty_scale_gives_empty_result() {
        assert!(rescale(&[], 1000.0).is_empty());
    }

    #[test]
    fn zero_total_gives_zero_bands() {
        let out = rescale(&abc(), 0.0);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|b| b.low_points == 0.0 && b.high_points == 0.0));
    }
}
