//! Runs the analysis over the configured catalog, and writes the result for a
//! presentation layer to pick up.

use std::path::Path;

use mond_rar::{analyze, Config, MondError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SAVE_FILE: &str = "config.mond";
const RESULT_FILE: &str = "analysis.json";

fn main() -> Result<(), MondError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let save_path = Path::new(SAVE_FILE);
    let cfg = match Config::load(save_path) {
        Ok(cfg) => {
            info!("Loaded config from {SAVE_FILE}");
            cfg
        }
        Err(MondError::Io(_)) => {
            let cfg = Config::default();
            if let Err(e) = cfg.save(save_path) {
                warn!("Error saving the default config: {e}");
            }
            cfg
        }
        Err(e) => return Err(e),
    };

    let result = analyze(&cfg)?;
    info!(
        "{} galaxies, {} radius samples. a0: {:.3e} m/s² (G: {:.4e}, M☉: {:.5e} kg)",
        result.per_galaxy.len(),
        result.sample_count(),
        result.a0,
        result.constants.g,
        result.constants.m_sun
    );

    for (name, gal) in &result.per_galaxy {
        info!(
            "{name}: v_flat: {:.1} km/s, M: {:.2e} M☉",
            gal.v_flat, gal.mass_total
        );
    }
    if let Some(s) = &result.diagnostics.btfr_offset_summary {
        info!(
            "BTFR offset from v⁴ = G M a0: {:+.1}% to {:+.1}% (mean {:+.1}%)",
            s.min * 100.,
            s.max * 100.,
            s.mean * 100.
        );
    }

    std::fs::write(RESULT_FILE, result.to_json()?)?;
    info!("Result written to {RESULT_FILE}");

    Ok(())
}
