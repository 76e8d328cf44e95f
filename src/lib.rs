pub mod central;
pub mod element;
pub mod generate;
pub mod molecule;
pub mod resonance;
pub mod skeleton;
pub mod structure;
pub mod vsepr;

pub use element::Element;
pub use generate::generate;
pub use molecule::{
    InvalidReason, Molecule, MAX_ATOMS, MAX_BONDS, MAX_HEAVY_ATOMS, MAX_RESONANCE_FORMS,
};
pub use structure::{AtomState, BondOrder, LewisStructure};
pub use vsepr::{classify_vsepr, VseprInfo};

#[cfg(test)]
mod tests;
