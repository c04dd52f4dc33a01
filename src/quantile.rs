//! Percentile ↔ z-score transforms.
//!
//! Two directions are needed. Percentile → z inverts the standard normal
//! CDF with Acklam's rational approximation (relative error ~1.15e-9 over
//! the full domain), split into two tail regions and a central region.
//! Raw → z uses a fixed per-statistic mean/sd table of long-run Division-I
//! norms for statistics that arrive without a precomputed percentile.
//!
//! Every z output is rounded to one decimal and clipped to [-3, 3]. A
//! missing input is neutral: z = 0, never an error.

use std::f64::consts::PI;

/// Central-region numerator coefficients (Acklam).
const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

/// Central-region denominator coefficients.
const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

/// Tail-region numerator coefficients.
const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

/// Tail-region denominator coefficients.
const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Region split: below 2.425% (and above 97.575%) the tail expansion is
/// more accurate than the central rational.
const P_LOW: f64 = 0.02425;
const P_HIGH: f64 = 1.0 - P_LOW;

/// Z-scores are reported on a [-3, 3] scale; anything beyond is noise at
/// college sample sizes.
pub const Z_CLIP: f64 = 3.0;

/// Inverse standard normal CDF on (0, 1).
fn inverse_normal_cdf(p: f64) -> f64 {
    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    }
}

/// Clip to [-3, 3] and round to one decimal.
fn finish(z: f64) -> f64 {
    (z.clamp(-Z_CLIP, Z_CLIP) * 10.0).round() / 10.0
}

/// z-score of the standard normal whose CDF equals `p`/100.
///
/// `p` = 50 maps to 0 exactly; 84 to ~+1.0; 97.5 to ~+2.0. Out-of-domain
/// percentiles saturate at the clip bounds. `None` is neutral (0).
pub fn z_from_percentile(p: Option<f64>) -> f64 {
    let Some(p) = p else { return 0.0 };
    if p <= 0.0 {
        return -Z_CLIP;
    }
    if p >= 100.0 {
        return Z_CLIP;
    }
    finish(inverse_normal_cdf(p / 100.0))
}

/// Standard normal CDF (Abramowitz & Stegun 26.2.17, |error| < 7.5e-8).
pub fn normal_cdf(z: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.2316419 * z.abs());
    let poly = t
        * (0.319381530
            + t * (-0.356563782 + t * (1.781477937 + t * (-1.821255978 + t * 1.330274429))));
    let p = 1.0 - (-0.5 * z * z).exp() / (2.0 * PI).sqrt() * poly;
    if z >= 0.0 { p } else { 1.0 - p }
}

/// Statistics that carry a hard-coded population mean/sd because the source
/// dataset supplies no percentile rank for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawStat {
    Bpm,
    Dbpm,
    Usage,
    TrueShooting,
    AstPct,
    AstTov,
    ToPct,
    OrbPct,
    DrbPct,
    StlPct,
    BlkPct,
    Stocks,
    ThreeFreq,
    ThreePct,
    MidPct,
    FtPct,
    RimFreq,
    FtRate,
    DunkRate,
    FoulRate,
    Height,
}

/// Long-run Division-I (mean, sd) for each raw statistic. These are fixed
/// historical norms, not recomputed per dataset.
fn norms(stat: RawStat) -> (f64, f64) {
    match stat {
        RawStat::Bpm => (4.0, 4.2),
        RawStat::Dbpm => (2.1, 2.4),
        RawStat::Usage => (21.5, 5.5),
        RawStat::TrueShooting => (54.0, 5.0),
        RawStat::AstPct => (14.0, 8.5),
        RawStat::AstTov => (1.3, 0.7),
        RawStat::ToPct => (17.0, 5.0),
        RawStat::OrbPct => (5.5, 3.8),
        RawStat::DrbPct => (14.5, 5.5),
        RawStat::StlPct => (1.8, 0.9),
        RawStat::BlkPct => (2.4, 2.3),
        RawStat::Stocks => (4.2, 2.6),
        RawStat::ThreeFreq => (30.0, 15.0),
        RawStat::ThreePct => (32.5, 6.5),
        RawStat::MidPct => (36.0, 8.0),
        RawStat::FtPct => (71.0, 9.0),
        RawStat::RimFreq => (38.0, 12.0),
        RawStat::FtRate => (34.0, 13.0),
        RawStat::DunkRate => (6.0, 6.5),
        RawStat::FoulRate => (3.2, 1.1),
        RawStat::Height => (77.5, 3.4),
    }
}

/// z-score of a raw statistic against its historical norms.
pub fn z_from_raw(stat: RawStat, v: Option<f64>) -> f64 {
    let Some(v) = v else { return 0.0 };
    let (mean, sd) = norms(stat);
    finish((v - mean) / sd)
}

/// Preferred z: use the supplied percentile rank when present, otherwise
/// derive from the raw value, otherwise neutral.
pub fn z_pref(pctl: Option<f64>, stat: RawStat, raw: Option<f64>) -> f64 {
    match pctl {
        Some(p) => z_from_percentile(Some(p)),
        None => z_from_raw(stat, raw),
    }
}

/// Percentile for a composite-score term: the supplied rank when present,
/// else a pseudo-percentile from the raw value via the forward CDF, else
/// the neutral median (50, the percentile equivalent of z = 0).
pub fn percentile(pctl: Option<f64>, stat: RawStat, raw: Option<f64>) -> f64 {
    if let Some(p) = pctl {
        return p.clamp(0.0, 100.0);
    }
    match raw {
        Some(v) => {
            let (mean, sd) = norms(stat);
            (normal_cdf((v - mean) / sd) * 100.0).round()
        }
        None => 50.0,
    }
}

#[cfg(test)]
#[path = "quantile_test.rs"]
mod tests;
