//! Run configuration: the two universal scale parameters, and the galaxy catalog they're
//! tested against. There are no per-galaxy free parameters.

use std::{collections::HashSet, path::Path};

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::{
    accel::InterpFn, error::MondError, galaxy::Galaxy, galaxy_data, units::A_STAR_UNIT, util,
};

#[derive(Clone, Copy, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct ScaleParams {
    /// κ. Dimensionless.
    pub kappa: f64,
    /// a★, in units of 10^-10 m/s^2.
    pub a_star: f64,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            kappa: 1.2,
            a_star: 1.2,
        }
    }
}

impl ScaleParams {
    /// a_0 = κ a★, in m/s^2.
    pub fn a0(&self) -> f64 {
        self.kappa * self.a_star * A_STAR_UNIT
    }

    pub fn validate(&self) -> Result<(), MondError> {
        for (label, val) in [("kappa", self.kappa), ("a_star", self.a_star)] {
            if !(val.is_finite() && val > 0.) {
                return Err(MondError::InvalidParams(format!(
                    "{label} must be positive; got {val}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct Config {
    pub params: ScaleParams,
    pub interp: InterpFn,
    pub galaxies: Vec<Galaxy>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            params: Default::default(),
            interp: Default::default(),
            galaxies: galaxy_data::catalog(),
        }
    }
}

impl Config {
    pub fn new(kappa: f64, a_star: f64, galaxies: Vec<Galaxy>) -> Self {
        Self {
            params: ScaleParams { kappa, a_star },
            interp: InterpFn::Simple,
            galaxies,
        }
    }

    pub fn a0(&self) -> f64 {
        self.params.a0()
    }

    /// Checks parameters, each galaxy's preconditions, and that galaxy names are unique.
    pub fn validate(&self) -> Result<(), MondError> {
        self.params.validate()?;

        let mut names = HashSet::new();
        for galaxy in &self.galaxies {
            galaxy.validate()?;
            if !names.insert(galaxy.name.as_str()) {
                return Err(MondError::DuplicateGalaxy(galaxy.name.clone()));
            }
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, MondError> {
        util::load(path)
    }

    pub fn save(&self, path: &Path) -> Result<(), MondError> {
        util::save(path, self)
    }
}
