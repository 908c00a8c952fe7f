//! Tests a MOND-style modified acceleration law against galaxy rotation curves.
//!
//! From tabulated surface density and rotation velocity profiles, we integrate baryonic
//! mass, predict rotation velocities under g = ν(g_N / a_0) g_N, and build the radial
//! acceleration relation and baryonic Tully-Fisher relation datasets, along with their
//! theory curves. a_0 = κ a★ is the only free parameter, and it's fixed; nothing is fit.
//!
//! ```no_run
//! use mond_rar::{analyze, Config};
//!
//! let result = analyze(&Config::default())?;
//! for p in &result.btfr_points {
//!     println!("{}: {:.1} km/s", p.galaxy, p.v_flat);
//! }
//! # Ok::<(), mond_rar::MondError>(())
//! ```

pub mod accel;
pub mod analysis;
pub mod config;
pub mod error;
pub mod galaxy;
pub mod galaxy_data;
pub mod integrate;
pub mod properties;
pub mod synthetic;
pub mod theory;
pub mod units;
pub mod util;

pub use crate::{
    accel::{nu, InterpFn},
    analysis::{analyze, analyze_unchecked, AnalysisResult, Diagnostics},
    config::{Config, ScaleParams},
    error::MondError,
    galaxy::{Galaxy, RadialSample},
    integrate::{integrate_galaxy, GalaxyResult, RadiusResult},
    properties::{BtfrPoint, RarPoint},
    theory::CurvePoint,
};
