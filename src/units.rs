//! Contains unit conversions, and the physical constants used throughout this program.
//!
//! Unlike the galaxy tables, which are in astronomer units (kpc, km/s, M☉/pc²), all
//! internal computation is in SI:
//!
//! Dist: m
//! Mass: kg
//! Velocity: m/s
//! Accel: m/s^2
//! Surface density: kg / m^2

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

pub const M_PER_PC: f64 = 3.0857e16; // 1 pc in meters. m/pc
pub const M_PER_KPC: f64 = 3.0857e19; // 1 kpc in meters. m/kpc
pub const M_PER_KM: f64 = 1_000.;
pub const KG_PER_SOLAR: f64 = 1.98847e30; // 1 Solar mass in kg. kg/M☉

pub const G: f64 = 6.674e-11; // m^3 / (kg s^2)

/// a★ is published in units of 10^-10 m/s^2.
pub const A_STAR_UNIT: f64 = 1.0e-10;

// We use this to convert surface density table values (M☉/pc^2) to kg/m^2.
pub const SURFACE_DENSITY_SI: f64 = KG_PER_SOLAR / (M_PER_PC * M_PER_PC);

/// The constant set, as data. Each `AnalysisResult` records the values its run used.
#[derive(Clone, Copy, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct PhysicalConstants {
    pub g: f64,
    pub m_sun: f64,
    pub parsec: f64,
    pub kiloparsec: f64,
}

impl PhysicalConstants {
    pub const SI: Self = Self {
        g: G,
        m_sun: KG_PER_SOLAR,
        parsec: M_PER_PC,
        kiloparsec: M_PER_KPC,
    };
}

pub fn kpc_to_m(r_kpc: f64) -> f64 {
    r_kpc * M_PER_KPC
}

pub fn km_s_to_m_s(v: f64) -> f64 {
    v * M_PER_KM
}

pub fn m_s_to_km_s(v: f64) -> f64 {
    v / M_PER_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpc_is_a_thousand_pc() {
        assert!((M_PER_KPC / M_PER_PC - 1_000.).abs() < 1e-9);
        assert_eq!(kpc_to_m(2.), 2. * M_PER_KPC);
    }

    #[test]
    fn surface_density_conversion() {
        // 1 M☉/pc^2 is roughly 2.09e-3 kg/m^2.
        assert!((SURFACE_DENSITY_SI - 2.0884e-3).abs() < 1e-6);
    }

    #[test]
    fn constant_set_matches_scalars() {
        let c = PhysicalConstants::SI;
        assert_eq!(c.g, G);
        assert_eq!(c.m_sun, KG_PER_SOLAR);
        assert_eq!(c.kiloparsec, M_PER_KPC);
    }
}
