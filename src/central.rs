//! Central-atom arbitration.
//!
//! Every plausible hub is tried with a full synthesis run and the winners
//! are compared on the quality of the structure they produce, so the
//! choice falls out of the chemistry rather than a static per-element
//! rule. When nothing works, the reason from the first attempted
//! candidate is the one reported; downstream messaging depends on that
//! precedence.

use crate::element::Element;
use crate::generate::synthesize;
use crate::molecule::InvalidReason;
use crate::structure::LewisStructure;

/// Candidate central atoms, best-guess order: framework-capable heavy
/// atoms in molecule order, then terminal-class heavy atoms. An
/// all-hydrogen molecule falls back to its first atom.
pub fn candidate_centrals(atoms: &[Element]) -> Vec<usize> {
    let mut list: Vec<usize> = atoms
        .iter()
        .enumerate()
        .filter(|&(_, e)| *e != Element::H && !e.is_terminal_class())
        .map(|(i, _)| i)
        .collect();
    list.extend(
        atoms
            .iter()
            .enumerate()
            .filter(|&(_, e)| *e != Element::H && e.is_terminal_class())
            .map(|(i, _)| i),
    );
    if list.is_empty() && !atoms.is_empty() {
        list.push(0);
    }
    list
}

/// Ranking key for a successful candidate; derived `Ord` compares fields
/// lexicographically, smaller is better throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct CandidateRank {
    /// Σ|formal charge| across the whole structure.
    total_abs_charge: i32,
    /// Number of atoms carrying any charge at all.
    charged_atoms: u32,
    /// |formal charge| on the candidate itself.
    central_abs_charge: i32,
    /// How many atoms share the candidate's element; a distinguished atom
    /// beats one of several identical ones.
    element_count: u32,
    /// `false` for framework-capable elements.
    terminal_class: bool,
    electronegativity: u8,
    period: u8,
    atomic_num: u8,
}

impl CandidateRank {
    fn of(atoms: &[Element], ls: &LewisStructure, candidate: usize) -> Self {
        let elem = atoms[candidate];
        let total_abs_charge = (0..atoms.len())
            .map(|i| (ls.formal_charge(i) as i32).abs())
            .sum();
        let charged_atoms = (0..atoms.len())
            .filter(|&i| ls.formal_charge(i) != 0)
            .count() as u32;
        CandidateRank {
            total_abs_charge,
            charged_atoms,
            central_abs_charge: (ls.formal_charge(candidate) as i32).abs(),
            element_count: atoms.iter().filter(|&&e| e == elem).count() as u32,
            terminal_class: elem.is_terminal_class(),
            electronegativity: elem.electronegativity(),
            period: elem.period(),
            atomic_num: elem.atomic_num(),
        }
    }
}

/// Runs the synthesizer for every candidate and returns the best-ranked
/// successful one with its structure. With no success anywhere, the first
/// candidate's failure reason is surfaced.
pub fn select_central(
    atoms: &[Element],
    charge: i8,
    total_valence: i32,
) -> Result<(usize, LewisStructure), InvalidReason> {
    let mut first_failure: Option<InvalidReason> = None;
    let mut best: Option<(CandidateRank, usize, LewisStructure)> = None;

    for candidate in candidate_centrals(atoms) {
        match synthesize(atoms, charge, total_valence, candidate) {
            Ok(ls) => {
                let rank = CandidateRank::of(atoms, &ls, candidate);
                // Strict comparison keeps the earlier candidate on ties.
                let better = match &best {
                    Some((best_rank, _, _)) => rank < *best_rank,
                    None => true,
                };
                if better {
                    best = Some((rank, candidate, ls));
                }
            }
            Err(reason) => {
                first_failure.get_or_insert(reason);
            }
        }
    }

    match best {
        Some((_, candidate, ls)) => Ok((candidate, ls)),
        None => Err(first_failure.unwrap_or(InvalidReason::NoAtoms)),
    }
}
