//! Electron-domain geometry classification for the central atom.
//!
//! Counts sigma bond pairs and lone pairs on the central atom and looks
//! the pair up in the standard VSEPR table. Multiple bonds count as one
//! domain. Counts outside the tabulated rows fall back to the parent
//! geometry for the same domain total, so every structure with a central
//! atom classifies to something.

use crate::molecule::Molecule;
use crate::structure::LewisStructure;

/// One classified geometry, all strings static table text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VseprInfo {
    pub valence_pairs: u8,
    pub bond_pairs: u8,
    pub lone_pairs: u8,
    pub ep_geometry: &'static str,
    pub shape: &'static str,
    pub hybridization: &'static str,
    pub bond_angle: &'static str,
}

struct VseprRow {
    valence_pairs: u8,
    bond_pairs: u8,
    lone_pairs: u8,
    ep_geometry: &'static str,
    shape: &'static str,
    hybridization: &'static str,
    bond_angle: &'static str,
}

macro_rules! row {
    ($vp:expr, $bp:expr, $lp:expr, $geo:expr, $shape:expr, $hyb:expr, $angle:expr) => {
        VseprRow {
            valence_pairs: $vp,
            bond_pairs: $bp,
            lone_pairs: $lp,
            ep_geometry: $geo,
            shape: $shape,
            hybridization: $hyb,
            bond_angle: $angle,
        }
    };
}

static VSEPR_TABLE: [VseprRow; 13] = [
    row!(2, 2, 0, "Linear", "Linear", "sp", "180"),
    row!(3, 3, 0, "Trigonal Planar", "Trigonal Planar", "sp2", "120"),
    row!(3, 2, 1, "Trigonal Planar", "Bent", "sp2", "<120"),
    row!(4, 4, 0, "Tetrahedral", "Tetrahedral", "sp3", "109.5"),
    row!(4, 3, 1, "Tetrahedral", "Trigonal Pyramidal", "sp3", "<109.5"),
    row!(4, 2, 2, "Tetrahedral", "Bent", "sp3", "<109.5"),
    row!(5, 5, 0, "Trigonal Bipyramidal", "Trigonal Bipyramidal", "sp3d", "90, 120"),
    row!(5, 4, 1, "Trigonal Bipyramidal", "Seesaw", "sp3d", "<90, <120"),
    row!(5, 3, 2, "Trigonal Bipyramidal", "T-shaped", "sp3d", "<90"),
    row!(5, 2, 3, "Trigonal Bipyramidal", "Linear", "sp3d", "180"),
    row!(6, 6, 0, "Octahedral", "Octahedral", "sp3d2", "90"),
    row!(6, 5, 1, "Octahedral", "Square Pyramidal", "sp3d2", "<90"),
    row!(6, 4, 2, "Octahedral", "Square Planar", "sp3d2", "90"),
];

fn fallback_geometry(total: u8) -> (&'static str, &'static str, &'static str) {
    match total {
        0 | 1 => ("Linear", "s", "N/A"),
        2 => ("Linear", "sp", "180"),
        3 => ("Trigonal Planar", "sp2", "120"),
        4 => ("Tetrahedral", "sp3", "109.5"),
        5 => ("Trigonal Bipyramidal", "sp3d", "90, 120"),
        6 => ("Octahedral", "sp3d2", "90"),
        _ => ("Pentagonal Bipyramidal", "sp3d3", "72, 90"),
    }
}

/// Classifies the central atom of `form`.
///
/// Returns `None` only when the molecule has no atoms or its central
/// index is out of range.
pub fn classify_vsepr(mol: &Molecule, form: &LewisStructure) -> Option<VseprInfo> {
    let central = mol.central_atom();
    if mol.atoms().is_empty() || central >= mol.atoms().len() {
        return None;
    }

    let bond_pairs = form.bonds_of(central).count() as u8;
    let lone_pairs = form.lone_pairs(central);
    let total = bond_pairs + lone_pairs;

    if let Some(r) = VSEPR_TABLE
        .iter()
        .find(|r| r.bond_pairs == bond_pairs && r.lone_pairs == lone_pairs)
    {
        return Some(VseprInfo {
            valence_pairs: r.valence_pairs,
            bond_pairs,
            lone_pairs,
            ep_geometry: r.ep_geometry,
            shape: r.shape,
            hybridization: r.hybridization,
            bond_angle: r.bond_angle,
        });
    }

    let (geometry, hybridization, mut bond_angle) = fallback_geometry(total);
    let shape = match bond_pairs {
        0 => "No bonded atoms",
        1 => "Linear",
        _ => geometry,
    };
    if bond_pairs < 2 {
        bond_angle = "N/A";
    }
    Some(VseprInfo {
        valence_pairs: total,
        bond_pairs,
        lone_pairs,
        ep_geometry: geometry,
        shape,
        hybridization,
        bond_angle,
    })
}
