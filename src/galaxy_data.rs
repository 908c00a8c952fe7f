//! Data on specific galaxies.
//!
//! Tables are coarse, hand-reduced rotation curves in the style of
//! [SPARC](http://astroweb.cwru.edu/SPARC/) Rotmod files. Columns:
//! r (kpc), v_obs (km/s), v_err (km/s), stellar surface brightness (L☉/pc^2),
//! gas surface density (M☉/pc^2).

use crate::galaxy::Galaxy;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GalaxyModel {
    #[default]
    Ngc2403,
    Ngc3198,
    Ddo154,
}

impl GalaxyModel {
    /// In catalog order.
    pub const ALL: [Self; 3] = [Self::Ngc2403, Self::Ngc3198, Self::Ddo154];

    pub fn to_str(&self) -> String {
        match self {
            Self::Ngc2403 => "NGC 2403",
            Self::Ngc3198 => "NGC 3198",
            Self::Ddo154 => "DDO 154", // Gas-dominated dwarf
        }
        .to_owned()
    }

    pub fn descrip(&self) -> Galaxy {
        match self {
            Self::Ngc2403 => ngc_2403(),
            Self::Ngc3198 => ngc_3198(),
            Self::Ddo154 => ddo_154(),
        }
    }
}

/// The full built-in catalog, in insertion order.
pub fn catalog() -> Vec<Galaxy> {
    GalaxyModel::ALL.iter().map(|g| g.descrip()).collect()
}

pub fn ngc_2403() -> Galaxy {
    Galaxy::new(
        &GalaxyModel::Ngc2403.to_str(),
        0.60,
        &[
            [0.5, 45., 5., 180., 15.],
            [1.0, 70., 5., 120., 12.],
            [2.0, 95., 4., 60., 10.],
            [4.0, 115., 4., 25., 8.],
            [6.0, 120., 4., 12., 6.],
            [8.0, 122., 5., 6., 4.],
        ],
    )
}

pub fn ngc_3198() -> Galaxy {
    Galaxy::new(
        &GalaxyModel::Ngc3198.to_str(),
        0.70,
        &[
            [1.0, 70., 4., 150., 8.],
            [2.0, 100., 4., 90., 7.],
            [4.0, 130., 4., 40., 6.],
            [6.0, 145., 4., 20., 5.],
            [8.0, 150., 4., 12., 4.],
            [10.0, 152., 5., 8., 3.],
        ],
    )
}

pub fn ddo_154() -> Galaxy {
    // Stellar brightness is tiny here; gas dominates the baryons at every radius.
    Galaxy::new(
        &GalaxyModel::Ddo154.to_str(),
        0.50,
        &[
            [0.5, 25., 3., 1.5, 2.5],
            [1.0, 35., 2., 0.8, 2.],
            [1.5, 42., 2., 0.5, 1.5],
            [2.0, 45., 3., 0.3, 1.],
            [3.0, 48., 3., 0.15, 0.6],
        ],
    )
}
