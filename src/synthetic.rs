//! Creates mock galaxies with exponential disks. Used to exercise the pipeline on catalogs
//! larger or stranger than the built-in one. Seeded: the same seed gives the same catalog.

use std::f64::consts::PI;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::galaxy::{Galaxy, RadialSample};

/// Observational uncertainty we attach, as a fraction of v_obs.
const V_ERR_FRACTION: f64 = 0.05;

#[derive(Clone, Debug)]
pub struct DiskParams {
    pub name: String,
    /// Υ★
    pub mass_to_light: f64,
    /// Central stellar surface brightness. L☉/pc^2
    pub brightness_0: f64,
    /// Central gas surface density. M☉/pc^2. The gas disk has twice the scale length.
    pub density_gas_0: f64,
    /// Disk scale length. kpc
    pub r_disk: f64,
    /// Asymptotic observed velocity. km/s
    pub v_flat: f64,
    /// Outermost sample radius. kpc
    pub r_max: f64,
    pub num_samples: usize,
    /// Max fractional scatter on v_obs. 0 means a smooth curve.
    pub jitter: f64,
}

/// Sample an exponential disk on an evenly-spaced radius grid. The innermost radius is
/// `r_max / num_samples`, never 0.
pub fn exponential_disk<R: Rng>(params: &DiskParams, rng: &mut R) -> Galaxy {
    let mut samples = Vec::with_capacity(params.num_samples);

    for i in 0..params.num_samples {
        let r = params.r_max * (i + 1) as f64 / params.num_samples as f64;

        // A rising-then-flat curve.
        let v_smooth = params.v_flat * 2. / PI * (r / params.r_disk).atan();
        let scatter = if params.jitter > 0. {
            rng.random_range(-params.jitter..params.jitter)
        } else {
            0.
        };
        let v_obs = (v_smooth * (1. + scatter)).max(0.);

        samples.push(RadialSample {
            r,
            v_obs,
            v_err: v_obs * V_ERR_FRACTION,
            brightness_stellar: params.brightness_0 * (-r / params.r_disk).exp(),
            density_gas: params.density_gas_0 * (-r / (2. * params.r_disk)).exp(),
        });
    }

    Galaxy {
        name: params.name.clone(),
        mass_to_light: params.mass_to_light,
        samples,
    }
}

/// `count` random galaxies, spanning dwarfs to large spirals.
pub fn make_catalog(count: usize, seed: u64) -> Vec<Galaxy> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let r_disk = rng.random_range(0.5..4.);
            let params = DiskParams {
                name: format!("Mock {i:03}"),
                mass_to_light: rng.random_range(0.3..0.9),
                brightness_0: rng.random_range(1.0..500.),
                density_gas_0: rng.random_range(0.5..20.),
                r_disk,
                v_flat: rng.random_range(30.0..250.),
                r_max: r_disk * rng.random_range(2.0..6.),
                num_samples: rng.random_range(1..=12),
                jitter: 0.05,
            };
            exponential_disk(&params, &mut rng)
        })
        .collect()
}
