//! Structure synthesis: distributing the valence-electron pool over a
//! skeleton and validating the result.
//!
//! [`synthesize`] runs the full pipeline for one central-atom candidate:
//! skeleton, terminal lone-pair fill, central remainder, bond-order
//! promotion, charge smoothing for expanded-valence centers, and the final
//! shell/charge validation. [`generate`] drives it across candidates via
//! the selector and expands the winner into resonance forms.

use petgraph::graph::EdgeIndex;

use crate::central::{candidate_centrals, select_central};
use crate::element::Element;
use crate::molecule::{InvalidReason, Molecule, MAX_BONDS};
use crate::resonance::enumerate_resonance;
use crate::skeleton::build_skeleton;
use crate::structure::{
    required_electrons, shell_satisfied, BondOrder, LewisStructure,
};

/// Raises `bond` by one order, paying for it with one lone pair from
/// `term`. Callers must have checked that both are available.
fn promote(ls: &mut LewisStructure, bond: EdgeIndex, term: usize) {
    if let Some(raised) = ls.order(bond).raised() {
        ls.set_order(bond, raised);
        let pairs = ls.lone_pairs(term);
        ls.set_lone_pairs(term, pairs - 1);
    }
}

/// Attempts one complete Lewis structure with `central` as the hub.
///
/// Exactly one reason is reported per failed attempt. All arithmetic is
/// small-integer; the electron pool is threaded through the stages and must
/// land on zero.
pub fn synthesize(
    atoms: &[Element],
    charge: i8,
    total_valence: i32,
    central: usize,
) -> Result<LewisStructure, InvalidReason> {
    if atoms.is_empty() {
        return Err(InvalidReason::NoAtoms);
    }
    if total_valence < 0 {
        return Err(InvalidReason::NegativeElectronCount);
    }
    if total_valence % 2 != 0 {
        return Err(InvalidReason::OddElectronCount);
    }

    let mut pool = total_valence;
    let mut ls = build_skeleton(atoms, central, charge, &mut pool)
        .ok_or(InvalidReason::SkeletonBuildFailure)?;

    // Terminal atoms fill toward their required count first.
    for (i, &elem) in atoms.iter().enumerate() {
        if i == central {
            continue;
        }
        let need = required_electrons(elem, false) - 2 * ls.bond_order_sum(i);
        if need > 0 {
            let pairs = (need / 2).min(pool / 2);
            ls.set_lone_pairs(i, pairs as u8);
            pool -= pairs * 2;
        }
    }

    // Whatever is left sits on the central atom.
    if pool > 0 {
        ls.set_lone_pairs(central, (pool / 2) as u8);
        pool -= (pool / 2) * 2;
    }
    if pool != 0 {
        return Err(InvalidReason::LeftoverElectrons);
    }

    // Promote central bonds round-robin until the central shell is met.
    if atoms.len() > 1 {
        let target = required_electrons(atoms[central], true);
        let n_bonds = ls.bond_count();
        let mut next_bond = 0usize;
        for _ in 0..MAX_BONDS * 3 {
            if ls.electrons_on(central) >= target {
                break;
            }
            let mut promoted = false;
            for scan in 0..n_bonds {
                let b = EdgeIndex::new((next_bond + scan) % n_bonds);
                let Some(term) = ls.other_end(b, central) else {
                    continue;
                };
                if atoms[term] == Element::H
                    || ls.order(b) == BondOrder::Triple
                    || ls.lone_pairs(term) == 0
                {
                    continue;
                }
                promote(&mut ls, b, term);
                next_bond = (b.index() + 1) % n_bonds;
                promoted = true;
                break;
            }
            if !promoted {
                break;
            }
        }
    }

    // Expanded-valence centers trade lone pairs for less charge separation.
    if atoms[central].period() >= 3 {
        ls.recompute_formal_charges(atoms);
        for _ in 0..MAX_BONDS {
            if ls.formal_charge(central) <= 0 {
                break;
            }
            let mut best: Option<(EdgeIndex, usize)> = None;
            let mut most_negative = 0i32;
            for b in ls.bonds() {
                let Some(term) = ls.other_end(b, central) else {
                    continue;
                };
                if atoms[term] == Element::H
                    || ls.order(b) == BondOrder::Triple
                    || ls.lone_pairs(term) == 0
                {
                    continue;
                }
                let fc = ls.formal_charge(term) as i32;
                if fc < 0 && fc < most_negative {
                    most_negative = fc;
                    best = Some((b, term));
                }
            }
            let Some((b, term)) = best else {
                break;
            };
            promote(&mut ls, b, term);
            ls.recompute_formal_charges(atoms);
        }
    }

    ls.recompute_formal_charges(atoms);

    for (i, &elem) in atoms.iter().enumerate() {
        if !shell_satisfied(elem, ls.electrons_on(i), i == central) {
            return Err(InvalidReason::ShellRuleViolation);
        }
    }
    if ls.formal_charge_sum() != charge as i32 {
        return Err(InvalidReason::FormalChargeMismatch);
    }

    Ok(ls)
}

/// Recomputes the molecule's generation result in place.
///
/// Replaces the central atom, total valence-electron count, accepted forms,
/// and invalid reason atomically; any previous result is discarded. This
/// operation itself never fails: an impossible composition leaves the
/// molecule with zero forms and a stored [`InvalidReason`].
pub fn generate(mol: &mut Molecule) {
    let total: i32 = mol
        .atoms()
        .iter()
        .map(|e| e.valence_electrons() as i32)
        .sum::<i32>()
        - mol.charge() as i32;

    if mol.atom_count() == 0 {
        mol.store_failure(0, total, InvalidReason::NoAtoms);
        return;
    }

    match select_central(mol.atoms(), mol.charge(), total) {
        Ok((central, base)) => {
            let forms = enumerate_resonance(mol.atoms(), mol.charge(), central, base);
            mol.store_success(central, total, forms);
        }
        Err(reason) => {
            let central = candidate_centrals(mol.atoms()).first().copied().unwrap_or(0);
            mol.store_failure(central, total, reason);
        }
    }
}
