//! Entry point for computation: runs the rotation curve pipeline over a catalog, and
//! assembles the relation datasets and theory curves into one result.

use std::path::Path;

use bincode::{Decode, Encode};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    config::Config,
    error::MondError,
    integrate::{integrate_galaxy, GalaxyResult},
    properties::{
        btfr_offsets, btfr_points, curve_residual, rar_points, summarize_offsets, BtfrOffset,
        BtfrPoint, CurveResidual, OffsetSummary, RarPoint,
    },
    theory::{btfr_theory, rar_theory, CurvePoint},
    units::PhysicalConstants,
    util,
};

/// Comparisons of the predictions against theory and observation.
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Catalog order.
    pub btfr_offsets: Vec<BtfrOffset>,
    pub btfr_offset_summary: Option<OffsetSummary>,
    /// Catalog order.
    pub residuals: Vec<CurveResidual>,
}

/// Everything a presentation layer needs; plain data.
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Keyed by galaxy name, in catalog order.
    #[bincode(with_serde)]
    pub per_galaxy: IndexMap<String, GalaxyResult>,
    pub rar_points: Vec<RarPoint>,
    /// X: g_N (m/s^2). Y: g_obs (m/s^2).
    pub rar_theory: Vec<CurvePoint>,
    pub btfr_points: Vec<BtfrPoint>,
    /// X: M (M☉). Y: v_flat (km/s).
    pub btfr_theory: Vec<CurvePoint>,
    /// m/s^2
    pub a0: f64,
    pub kappa: f64,
    pub a_star: f64,
    pub constants: PhysicalConstants,
    pub diagnostics: Diagnostics,
}

impl AnalysisResult {
    pub fn galaxy(&self, name: &str) -> Option<&GalaxyResult> {
        self.per_galaxy.get(name)
    }

    /// Total radius samples across all galaxies.
    pub fn sample_count(&self) -> usize {
        self.per_galaxy.values().map(|g| g.per_radius.len()).sum()
    }

    pub fn to_json(&self) -> Result<String, MondError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), MondError> {
        util::save(path, self)
    }

    pub fn load(path: &Path) -> Result<Self, MondError> {
        util::load(path)
    }
}

/// Validate the config, then run the full pipeline. Any precondition violation fails the
/// whole run; no partial results.
pub fn analyze(cfg: &Config) -> Result<AnalysisResult, MondError> {
    cfg.validate()?;
    Ok(analyze_unchecked(cfg))
}

/// Run the pipeline without validating. Degenerate input (zero radius, empty profiles etc)
/// produces 0, NaN, or infinite values in the result instead of an error.
pub fn analyze_unchecked(cfg: &Config) -> AnalysisResult {
    let a0 = cfg.a0();

    info!(
        "Analyzing {} galaxies. κ: {}, a★: {}, a0: {:.3e} m/s²",
        cfg.galaxies.len(),
        cfg.params.kappa,
        cfg.params.a_star,
        a0
    );

    // Galaxies are independent; the indexed collect keeps catalog order.
    let results: Vec<GalaxyResult> = cfg
        .galaxies
        .par_iter()
        .map(|galaxy| integrate_galaxy(galaxy, a0, cfg.interp))
        .collect();

    for result in &results {
        let finite = result
            .per_radius
            .iter()
            .all(|p| p.v_pred.is_finite() && p.g_mod.is_finite());
        if !finite || !result.v_flat.is_finite() {
            warn!("Non-finite values in the result for {}", result.name);
        }
    }

    let rar_points = rar_points(&results);
    let btfr_points = btfr_points(&results);

    let btfr_offsets = btfr_offsets(&btfr_points, a0);
    let diagnostics = Diagnostics {
        btfr_offset_summary: summarize_offsets(&btfr_offsets),
        btfr_offsets,
        residuals: results.iter().map(curve_residual).collect(),
    };

    let per_galaxy: IndexMap<String, GalaxyResult> = results
        .into_iter()
        .map(|r| (r.name.clone(), r))
        .collect();

    let result = AnalysisResult {
        per_galaxy,
        rar_points,
        rar_theory: rar_theory(a0, cfg.interp).collect(),
        btfr_points,
        btfr_theory: btfr_theory(a0).collect(),
        a0,
        kappa: cfg.params.kappa,
        a_star: cfg.params.a_star,
        constants: PhysicalConstants::SI,
        diagnostics,
    };

    info!(
        "Analysis complete. RAR points: {}, BTFR points: {}",
        result.rar_points.len(),
        result.btfr_points.len()
    );

    result
}
