//! This module contains the MOND interpolation functions, and the modified acceleration
//! built on them.
//!
//! μ(x) maps the true (observed) acceleration ratio `x = g / a_0` to the factor by which
//! it exceeds the Newtonian one: `g_N = μ(x) g`. ν(y) is its inverse form, taking the
//! Newtonian ratio `y = g_N / a_0`: `g = ν(y) g_N`. We only ever have g_N from baryons,
//! so ν is what the pipeline uses.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Floor on y, so y = 0 (no enclosed mass) doesn't divide by zero. ν is then huge, but
/// finite, and it multiplies g_N = 0.
pub const NU_FLOOR: f64 = 1.0e-20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Encode, Decode, Serialize, Deserialize)]
pub enum InterpFn {
    /// Famaey & Binney. More realistic fits than the standard one.
    #[default]
    Simple,
    /// Sanders & Noordermeer.
    Standard,
}

impl InterpFn {
    /// `x` is g / a_0.
    pub fn mu(&self, x: f64) -> f64 {
        match self {
            Self::Simple => x / (1. + x),
            Self::Standard => x / (1. + x.powi(2)).sqrt(),
        }
    }

    /// `y` is g_N / a_0. Always > 1; → 1 in the Newtonian limit (y → ∞), and → ∞ in the
    /// deep-MOND limit (y → 0).
    pub fn nu(&self, y: f64) -> f64 {
        let y = y.max(NU_FLOOR);

        match self {
            Self::Simple => 0.5 + (0.25 + 1. / y).sqrt(),
            Self::Standard => (0.5 + (0.25 + 1. / y.powi(2)).sqrt()).sqrt(),
        }
    }
}

/// ν for the simple interpolating function; the one used by default throughout.
pub fn nu(y: f64) -> f64 {
    InterpFn::Simple.nu(y)
}

/// Modified acceleration from a Newtonian one. m/s^2 in, m/s^2 out.
pub fn modified_acc(g_newton: f64, a0: f64, interp: InterpFn) -> f64 {
    interp.nu(g_newton / a0) * g_newton
}
