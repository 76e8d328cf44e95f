use std::fmt;

use crate::element::Element;
use crate::structure::LewisStructure;

/// Hard cap on atoms per molecule.
pub const MAX_ATOMS: usize = 12;
/// Hard cap on non-hydrogen atoms per molecule.
pub const MAX_HEAVY_ATOMS: usize = 6;
/// Hard cap on bonds per structure.
pub const MAX_BONDS: usize = 12;
/// Hard cap on accepted resonance forms per generation.
pub const MAX_RESONANCE_FORMS: usize = 6;

/// Why a generation attempt produced no accepted structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    NoAtoms,
    /// The charge exceeds the available valence electrons.
    NegativeElectronCount,
    /// Odd total electron count; radicals are unsupported.
    OddElectronCount,
    /// No valid single-bond connectivity exists for any central-atom candidate.
    SkeletonBuildFailure,
    /// The valence pool could not be fully placed as lone pairs.
    LeftoverElectrons,
    /// An atom's final electron count violates the duet/octet/expanded-octet rules.
    ShellRuleViolation,
    /// The formal charges do not sum to the molecule's charge.
    FormalChargeMismatch,
}

impl InvalidReason {
    /// Human-readable text for display.
    pub fn message(self) -> &'static str {
        match self {
            InvalidReason::NoAtoms => "No atoms selected",
            InvalidReason::NegativeElectronCount => "Invalid charge for selected atoms",
            InvalidReason::OddElectronCount => "Odd electron count (radicals unsupported)",
            InvalidReason::SkeletonBuildFailure => "Cannot build a valid bond skeleton",
            InvalidReason::LeftoverElectrons => "Could not place all valence electrons",
            InvalidReason::ShellRuleViolation => "Octet/duet shell constraints failed",
            InvalidReason::FormalChargeMismatch => "Formal charge sum does not match ion charge",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for InvalidReason {}

/// An ordered multiset of atoms with an overall charge, plus the result of
/// the most recent [`generate`](crate::generate) call.
///
/// Atoms are addressed by their insertion index; that index is their only
/// identity, and bonds in the generated structures reference it directly.
/// Any mutation of the atom list or charge discards the previous generation
/// result, so stale structures are never observable.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    atoms: Vec<Element>,
    charge: i8,
    central: usize,
    total_valence: i32,
    forms: Vec<LewisStructure>,
    current: usize,
    invalid: Option<InvalidReason>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an atom, enforcing [`MAX_ATOMS`] and [`MAX_HEAVY_ATOMS`].
    /// Returns `false` (and leaves the molecule unchanged) when a cap would
    /// be exceeded.
    pub fn add_atom(&mut self, elem: Element) -> bool {
        if self.atoms.len() >= MAX_ATOMS {
            return false;
        }
        if elem != Element::H && self.heavy_atom_count() >= MAX_HEAVY_ATOMS {
            return false;
        }
        self.atoms.push(elem);
        self.discard_generation();
        true
    }

    /// Removes the atom at `idx`, shifting later atoms down.
    pub fn remove_atom(&mut self, idx: usize) -> Option<Element> {
        if idx >= self.atoms.len() {
            return None;
        }
        let elem = self.atoms.remove(idx);
        self.discard_generation();
        Some(elem)
    }

    pub fn set_charge(&mut self, charge: i8) {
        self.charge = charge;
        self.discard_generation();
    }

    /// Removes every atom and resets the charge.
    pub fn clear(&mut self) {
        self.atoms.clear();
        self.charge = 0;
        self.discard_generation();
    }

    pub fn atoms(&self) -> &[Element] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn heavy_atom_count(&self) -> usize {
        self.atoms.iter().filter(|&&e| e != Element::H).count()
    }

    pub fn charge(&self) -> i8 {
        self.charge
    }

    /// Index of the central atom chosen by the last generation.
    /// Meaningful only while accepted forms exist.
    pub fn central_atom(&self) -> usize {
        self.central
    }

    /// Total valence electrons (Σ atom valences − charge) as computed by
    /// the last generation.
    pub fn total_valence_electrons(&self) -> i32 {
        self.total_valence
    }

    /// Accepted resonance forms from the last generation, base form first.
    pub fn forms(&self) -> &[LewisStructure] {
        &self.forms
    }

    pub fn invalid_reason(&self) -> Option<InvalidReason> {
        self.invalid
    }

    /// The form currently selected for display.
    pub fn current_form(&self) -> Option<&LewisStructure> {
        self.forms.get(self.current)
    }

    pub fn current_form_index(&self) -> usize {
        self.current
    }

    pub fn set_current_form(&mut self, idx: usize) -> bool {
        if idx < self.forms.len() {
            self.current = idx;
            true
        } else {
            false
        }
    }

    /// Cycles the display selection forward, wrapping around.
    pub fn select_next_form(&mut self) {
        if !self.forms.is_empty() {
            self.current = (self.current + 1) % self.forms.len();
        }
    }

    /// Cycles the display selection backward, wrapping around.
    pub fn select_prev_form(&mut self) {
        if !self.forms.is_empty() {
            self.current = (self.current + self.forms.len() - 1) % self.forms.len();
        }
    }

    fn discard_generation(&mut self) {
        self.forms.clear();
        self.current = 0;
        self.invalid = None;
    }

    pub(crate) fn store_success(
        &mut self,
        central: usize,
        total_valence: i32,
        forms: Vec<LewisStructure>,
    ) {
        self.central = central;
        self.total_valence = total_valence;
        self.forms = forms;
        self.current = 0;
        self.invalid = None;
    }

    pub(crate) fn store_failure(
        &mut self,
        central: usize,
        total_valence: i32,
        reason: InvalidReason,
    ) {
        self.central = central;
        self.total_valence = total_valence;
        self.forms.clear();
        self.current = 0;
        self.invalid = Some(reason);
    }
}
