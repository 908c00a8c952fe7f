//! Galaxy input data: a mass-to-light ratio, and a radial table of rotation curve and
//! surface density samples. Units are the ones rotation curve tables are published in,
//! not the SI units we compute in.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::error::MondError;

/// One row of a rotation curve table.
#[derive(Clone, Copy, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct RadialSample {
    /// kpc
    pub r: f64,
    /// Observed rotation velocity. km/s
    pub v_obs: f64,
    /// Uncertainty on `v_obs`. km/s. Informational only; not used in computation.
    pub v_err: f64,
    /// Stellar surface brightness. L☉ / pc^2. Converted to mass with Υ★.
    pub brightness_stellar: f64,
    /// Gas surface density. M☉ / pc^2
    pub density_gas: f64,
}

impl RadialSample {
    /// From a table row: `[r, v_obs, v_err, brightness_stellar, density_gas]`.
    pub const fn from_row(row: [f64; 5]) -> Self {
        Self {
            r: row[0],
            v_obs: row[1],
            v_err: row[2],
            brightness_stellar: row[3],
            density_gas: row[4],
        }
    }
}

/// Sample order is significant: radius ascending. It's the grid we integrate mass over.
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct Galaxy {
    pub name: String,
    /// Υ★; stellar M/L. M☉ / L☉
    pub mass_to_light: f64,
    pub samples: Vec<RadialSample>,
}

impl Galaxy {
    pub fn new(name: &str, mass_to_light: f64, rows: &[[f64; 5]]) -> Self {
        Self {
            name: name.to_owned(),
            mass_to_light,
            samples: rows.iter().copied().map(RadialSample::from_row).collect(),
        }
    }

    /// Radii, in kpc.
    pub fn radii(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.r).collect()
    }

    /// Check the preconditions the integrator relies on. The integrator itself doesn't
    /// check these; violating them there gives 0, NaN, or infinite values.
    pub fn validate(&self) -> Result<(), MondError> {
        let err = |reason: String| Err(MondError::invalid_input(&self.name, reason));

        if !(self.mass_to_light.is_finite() && self.mass_to_light > 0.) {
            return err(format!(
                "mass-to-light ratio must be positive; got {}",
                self.mass_to_light
            ));
        }

        if self.samples.is_empty() {
            return err("no radial samples".to_owned());
        }

        let mut r_prev = 0.;
        for (i, s) in self.samples.iter().enumerate() {
            if !(s.r.is_finite() && s.r > 0.) {
                return err(format!("sample {i}: radius must be positive; got {}", s.r));
            }
            if s.r <= r_prev {
                return err(format!(
                    "sample {i}: radius {} is not greater than the previous, {r_prev}",
                    s.r
                ));
            }
            r_prev = s.r;

            for (field, val) in [
                ("v_obs", s.v_obs),
                ("v_err", s.v_err),
                ("brightness_stellar", s.brightness_stellar),
                ("density_gas", s.density_gas),
            ] {
                if !(val.is_finite() && val >= 0.) {
                    return err(format!("sample {i}: {field} must be non-negative; got {val}"));
                }
            }
        }

        Ok(())
    }
}
