#![allow(non_snake_case)]

//! Integrates surface density tables into enclosed mass, and derives Newtonian and MOND
//! accelerations and velocities from it.
//!
//! This is total over any input: we don't check radius ordering or positivity here.
//! (See `Galaxy::validate`.) Degenerate input produces 0, NaN, or infinite values that
//! propagate into the result unchanged.

use std::f64::consts::PI;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    accel::{modified_acc, InterpFn},
    galaxy::Galaxy,
    units::{kpc_to_m, km_s_to_m_s, m_s_to_km_s, G, KG_PER_SOLAR, SURFACE_DENSITY_SI},
};

/// Derived values at one table radius.
#[derive(Clone, Copy, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct RadiusResult {
    /// kpc
    pub r: f64,
    /// km/s
    pub v_obs: f64,
    /// Circular velocity from the baryons alone. km/s
    pub v_bar: f64,
    /// MOND-predicted circular velocity. km/s
    pub v_pred: f64,
    /// m/s^2
    pub g_newton: f64,
    /// m/s^2
    pub g_mod: f64,
}

#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct GalaxyResult {
    pub name: String,
    /// Same length and order as the input samples.
    pub per_radius: Vec<RadiusResult>,
    /// Predicted velocity at the outermost radius. km/s
    pub v_flat: f64,
    /// Enclosed baryonic mass at the outermost radius. M☉
    pub mass_total: f64,
}

/// Baryonic surface mass density at each sample. kg/m^2.
/// Σ = (Υ★ × stellar brightness + gas density) × M☉ / pc^2
pub fn surface_density(galaxy: &Galaxy) -> Vec<f64> {
    galaxy
        .samples
        .iter()
        .map(|s| {
            (galaxy.mass_to_light * s.brightness_stellar + s.density_gas) * SURFACE_DENSITY_SI
        })
        .collect()
}

/// Cumulative enclosed mass, in kg, from surface density Σ (kg/m^2) at radii `r` (m).
///
/// Trapezoidal accumulation of Σ over annuli:
/// M_i = M_{i-1} + ½(Σ_i + Σ_{i-1}) π (r_i² - r_{i-1}²), with the innermost disk
/// M_0 = Σ_0 π r_0². We then treat M as if it were spherically
/// distributed when finding velocity. This sphericalized-disk approximation puts
/// masses, and BTFR points, roughly 20% off a thin-disk treatment.
pub fn enclosed_mass(r: &[f64], Σ: &[f64]) -> Vec<f64> {
    let mut result = Vec::with_capacity(r.len());

    for (i, (r_i, Σ_i)) in r.iter().zip(Σ).enumerate() {
        let m = if i == 0 {
            Σ_i * PI * r_i.powi(2)
        } else {
            let dA = PI * (r_i.powi(2) - r[i - 1].powi(2));
            result[i - 1] + 0.5 * (Σ_i + Σ[i - 1]) * dA
        };
        result.push(m);
    }

    result
}

/// Circular velocity, in m/s, from mass enclosed (kg) at r (m). 0 for no mass.
pub fn circular_velocity(mass: f64, r: f64) -> f64 {
    if mass > 0. {
        (G * mass / r).sqrt()
    } else {
        0.
    }
}

/// Run the rotation curve pipeline for one galaxy. `a0` is in m/s^2.
pub fn integrate_galaxy(galaxy: &Galaxy, a0: f64, interp: InterpFn) -> GalaxyResult {
    let r: Vec<f64> = galaxy.radii().into_iter().map(kpc_to_m).collect();
    let Σ = surface_density(galaxy);
    let mass = enclosed_mass(&r, &Σ);

    let per_radius: Vec<RadiusResult> = galaxy
        .samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let v_bar = m_s_to_km_s(circular_velocity(mass[i], r[i]));

            // Velocity converted back to SI before squaring.
            let g_newton = km_s_to_m_s(v_bar).powi(2) / r[i];
            let g_mod = modified_acc(g_newton, a0, interp);

            let v_pred = m_s_to_km_s((r[i] * g_mod).sqrt());

            RadiusResult {
                r: sample.r,
                v_obs: sample.v_obs,
                v_bar,
                v_pred,
                g_newton,
                g_mod,
            }
        })
        .collect();

    // With no samples there's no outermost radius; both are undefined.
    let v_flat = per_radius.last().map_or(f64::NAN, |p| p.v_pred);
    let mass_total = mass.last().map_or(f64::NAN, |m| m / KG_PER_SOLAR);

    debug!(
        "Integrated {}: {} samples, M: {:.3e} M☉, v_flat: {:.1} km/s",
        galaxy.name,
        per_radius.len(),
        mass_total,
        v_flat
    );

    GalaxyResult {
        name: galaxy.name.clone(),
        per_radius,
        v_flat,
        mass_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{accel::nu, galaxy_data};

    const A0: f64 = 1.44e-10;

    fn rel_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * a.abs().max(b.abs())
    }

    #[test]
    fn single_sample_disk_mass() {
        let g = Galaxy::new("One", 0.6, &[[0.5, 45., 5., 180., 15.]]);
        let r = kpc_to_m(0.5);
        let Σ = (0.6 * 180. + 15.) * SURFACE_DENSITY_SI;

        let mass = enclosed_mass(&[r], &surface_density(&g));
        assert_eq!(mass, vec![Σ * PI * r.powi(2)]);

        let result = integrate_galaxy(&g, A0, InterpFn::Simple);
        assert_eq!(result.per_radius.len(), 1);
        assert!(rel_eq(result.mass_total, 9.6604e7, 1e-4), "{}", result.mass_total);

        let p = result.per_radius[0];
        assert!(rel_eq(p.v_bar, 28.826, 1e-4), "{}", p.v_bar);
        assert!(rel_eq(p.g_mod, nu(p.g_newton / A0) * p.g_newton, 1e-15));
        assert!(p.v_pred > p.v_bar);
        assert_eq!(result.v_flat, p.v_pred);
    }

    #[test]
    fn trapezoid_accumulation() {
        let r = [1., 2., 4.];
        let Σ = [3., 1., 1.];
        let m = enclosed_mass(&r, &Σ);

        assert_eq!(m[0], 3. * PI);
        assert_eq!(m[1], m[0] + 2. * PI * 3.);
        assert_eq!(m[2], m[1] + PI * 12.);
    }

    #[test]
    fn ngc_2403_profile() {
        let result = integrate_galaxy(&galaxy_data::ngc_2403(), A0, InterpFn::Simple);

        assert_eq!(result.name, "NGC 2403");
        assert_eq!(result.per_radius.len(), 6);
        assert!(rel_eq(result.mass_total, 4.3058e9, 1e-4), "{}", result.mass_total);
        assert!(rel_eq(result.v_flat, 101.499, 1e-4), "{}", result.v_flat);

        let radii: Vec<f64> = result.per_radius.iter().map(|p| p.r).collect();
        assert_eq!(radii, galaxy_data::ngc_2403().radii());
    }

    #[test]
    fn empty_profile_is_degenerate() {
        let result = integrate_galaxy(&Galaxy::new("Empty", 1., &[]), A0, InterpFn::Simple);
        assert!(result.per_radius.is_empty());
        assert!(result.v_flat.is_nan());
        assert!(result.mass_total.is_nan());
    }

    #[test]
    fn zero_radius_propagates_non_finite() {
        let g = Galaxy::new("Center", 1., &[[0., 10., 1., 5., 5.], [1., 20., 1., 5., 5.]]);
        let result = integrate_galaxy(&g, A0, InterpFn::Simple);

        // No mass inside r = 0, so v_bar is 0, and g_N is 0/0.
        assert_eq!(result.per_radius[0].v_bar, 0.);
        assert!(result.per_radius[0].g_newton.is_nan());
        assert!(result.per_radius[1].v_pred.is_finite());
    }
}
