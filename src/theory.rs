//! Analytic reference curves for the radial acceleration relation (RAR) and the baryonic
//! Tully-Fisher relation (BTFR). These depend only on a_0 (and the interpolating function);
//! never on galaxy data.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::{
    accel::{modified_acc, InterpFn},
    units::{m_s_to_km_s, G, KG_PER_SOLAR},
    util::LogSteps,
};

/// log10(g_N / (m/s^2)) range of the RAR curve.
pub const RAR_LOG_RANGE: (f64, f64) = (-12., -8.);
/// log10(M / M☉) range of the BTFR curve.
pub const BTFR_LOG_RANGE: (f64, f64) = (7., 11.);
pub const LOG_STEP: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug)]
enum CurveKind {
    Rar(InterpFn),
    Btfr,
}

/// A lazily-evaluated theory curve. Restartable: clone it, or construct it again, to get
/// the same points.
#[derive(Clone, Debug)]
pub struct TheoryCurve {
    steps: LogSteps,
    a0: f64,
    kind: CurveKind,
}

impl Iterator for TheoryCurve {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.steps.next()?;

        Some(match self.kind {
            CurveKind::Rar(interp) => CurvePoint {
                x: val,
                y: modified_acc(val, self.a0, interp),
            },
            CurveKind::Btfr => CurvePoint {
                x: val,
                y: btfr_velocity(val, self.a0),
            },
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for TheoryCurve {}

/// X: g_N (m/s^2). Y: g_obs = ν(g_N/a_0) g_N (m/s^2).
pub fn rar_theory(a0: f64, interp: InterpFn) -> TheoryCurve {
    TheoryCurve {
        steps: LogSteps::new(RAR_LOG_RANGE.0, RAR_LOG_RANGE.1, LOG_STEP),
        a0,
        kind: CurveKind::Rar(interp),
    }
}

/// X: M (M☉). Y: v_flat (km/s), from v⁴ = G M a_0.
pub fn btfr_theory(a0: f64) -> TheoryCurve {
    TheoryCurve {
        steps: LogSteps::new(BTFR_LOG_RANGE.0, BTFR_LOG_RANGE.1, LOG_STEP),
        a0,
        kind: CurveKind::Btfr,
    }
}

/// Deep-MOND asymptotic flat velocity, in km/s, for a baryonic mass in M☉.
pub fn btfr_velocity(mass_solar: f64, a0: f64) -> f64 {
    m_s_to_km_s((G * mass_solar * KG_PER_SOLAR * a0).powf(0.25))
}

#[cfg(test)]
mod tests {
    use super::*;

    const A0: f64 = 1.44e-10;

    #[test]
    fn point_counts() {
        assert_eq!(rar_theory(A0, InterpFn::Simple).len(), 41);
        assert_eq!(rar_theory(A0, InterpFn::Simple).count(), 41);
        assert_eq!(btfr_theory(A0).count(), 41);
    }

    #[test]
    fn rar_endpoints() {
        let pts: Vec<_> = rar_theory(A0, InterpFn::Simple).collect();
        assert!((pts[0].x - 1e-12).abs() < 1e-24);
        assert!((pts[40].x - 1e-8).abs() < 1e-20);
        // Newtonian end: boost is small. Deep end: g_obs ≈ sqrt(g_N a_0).
        assert!(pts[40].y / pts[40].x < 1.02);
        assert!((pts[0].y / (1e-12 * A0).sqrt() - 1.).abs() < 0.05);
    }

    #[test]
    fn btfr_satisfies_v4() {
        for p in btfr_theory(A0) {
            let v = p.y * 1_000.;
            let rhs = G * p.x * KG_PER_SOLAR * A0;
            assert!((v.powi(4) - rhs).abs() / rhs < 1e-12);
        }
    }

    #[test]
    fn curves_restart() {
        let curve = btfr_theory(A0);
        let a: Vec<_> = curve.clone().collect();
        let b: Vec<_> = curve.collect();
        assert_eq!(a, b);
        assert_eq!(a, btfr_theory(A0).collect::<Vec<_>>());
    }
}
