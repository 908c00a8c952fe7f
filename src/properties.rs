//! Get the properties of collections of galaxies: the radial acceleration relation (RAR)
//! and baryonic Tully-Fisher relation (BTFR) datasets, and how far each galaxy sits from
//! the theory curves.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::{integrate::GalaxyResult, theory::btfr_velocity};

/// One radius of one galaxy, on the RAR plane.
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct RarPoint {
    /// m/s^2
    pub g_newton: f64,
    /// m/s^2
    pub g_mod: f64,
    pub galaxy: String,
}

/// One galaxy, on the BTFR plane.
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct BtfrPoint {
    /// M☉
    pub mass_total: f64,
    /// km/s
    pub v_flat: f64,
    pub galaxy: String,
}

/// Where a galaxy's outermost point sits relative to v⁴ = G M a_0.
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct BtfrOffset {
    pub galaxy: String,
    /// v_flat / v_theory(M)
    pub ratio: f64,
    /// ratio - 1. Negative means below the theory curve.
    pub offset: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct OffsetSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// How well the prediction tracks the observed rotation curve. Fractional residuals are
/// (v_pred - v_obs) / v_obs; samples with v_obs = 0 are skipped.
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct CurveResidual {
    pub galaxy: String,
    pub mean: f64,
    pub rms: f64,
    /// Samples contributing.
    pub n: usize,
}

/// Flatten every radius of every galaxy. Cross-galaxy order carries no meaning.
pub fn rar_points(results: &[GalaxyResult]) -> Vec<RarPoint> {
    results
        .iter()
        .flat_map(|gal| {
            gal.per_radius.iter().map(|p| RarPoint {
                g_newton: p.g_newton,
                g_mod: p.g_mod,
                galaxy: gal.name.clone(),
            })
        })
        .collect()
}

/// One point per galaxy, in the order given.
pub fn btfr_points(results: &[GalaxyResult]) -> Vec<BtfrPoint> {
    results
        .iter()
        .map(|gal| BtfrPoint {
            mass_total: gal.mass_total,
            v_flat: gal.v_flat,
            galaxy: gal.name.clone(),
        })
        .collect()
}

pub fn btfr_offsets(points: &[BtfrPoint], a0: f64) -> Vec<BtfrOffset> {
    points
        .iter()
        .map(|p| {
            let ratio = p.v_flat / btfr_velocity(p.mass_total, a0);
            BtfrOffset {
                galaxy: p.galaxy.clone(),
                ratio,
                offset: ratio - 1.,
            }
        })
        .collect()
}

/// Min, max, and mean offset over galaxies with finite values. `None` if there are none.
pub fn summarize_offsets(offsets: &[BtfrOffset]) -> Option<OffsetSummary> {
    let vals: Vec<f64> = offsets
        .iter()
        .map(|o| o.offset)
        .filter(|v| v.is_finite())
        .collect();

    if vals.is_empty() {
        return None;
    }

    let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = vals.iter().sum::<f64>() / vals.len() as f64;

    Some(OffsetSummary { min, max, mean })
}

pub fn curve_residual(result: &GalaxyResult) -> CurveResidual {
    let resids: Vec<f64> = result
        .per_radius
        .iter()
        .filter(|p| p.v_obs > 0.)
        .map(|p| (p.v_pred - p.v_obs) / p.v_obs)
        .collect();

    let n = resids.len();
    let (mean, rms) = if n == 0 {
        (f64::NAN, f64::NAN)
    } else {
        (
            resids.iter().sum::<f64>() / n as f64,
            (resids.iter().map(|r| r.powi(2)).sum::<f64>() / n as f64).sqrt(),
        )
    };

    CurveResidual {
        galaxy: result.name.clone(),
        mean,
        rms,
        n,
    }
}
