//! Resonance-form enumeration by bond-order migration.
//!
//! A multiple bond on the central atom can hand its extra order to another
//! central bond whose terminal is the same element, the donated order
//! returning to the source terminal as lone pairs. Starting from the one
//! accepted base structure, every such shift that still satisfies the
//! shell rules and the charge sum yields a new contributor; newly accepted
//! forms are themselves expanded (breadth-first), so second-order shifts
//! are found too. Enumeration stops when the worklist empties or the form
//! cap is reached.
//!
//! Protonated terminal oxygens (X–O–H) are pinned: they neither give up
//! nor receive bond order, since the O–H bond fixes their electron
//! arrangement.

use crate::element::Element;
use crate::molecule::MAX_RESONANCE_FORMS;
use crate::structure::{shell_all_satisfied, BondOrder, LewisStructure};

/// An oxygen bonded to the central atom that also carries a hydrogen.
fn is_protonated_terminal_oxygen(
    atoms: &[Element],
    ls: &LewisStructure,
    central: usize,
    term: usize,
) -> bool {
    atoms[term] == Element::O
        && ls.neighbors(term).any(|n| atoms[n] == Element::H)
        && ls.bond_between(central, term).is_some()
}

/// Expands `base` into the full accepted set (base form included, first).
pub fn enumerate_resonance(
    atoms: &[Element],
    charge: i8,
    central: usize,
    base: LewisStructure,
) -> Vec<LewisStructure> {
    let mut forms = vec![base];
    let mut seed_idx = 0;

    while seed_idx < forms.len() && forms.len() < MAX_RESONANCE_FORMS {
        let seed = forms[seed_idx].clone();

        for src in seed.bonds() {
            if forms.len() >= MAX_RESONANCE_FORMS {
                break;
            }
            let Some(src_term) = seed.other_end(src, central) else {
                continue;
            };
            let src_order = seed.order(src).as_u8();
            if src_order <= 1 {
                continue;
            }
            if is_protonated_terminal_oxygen(atoms, &seed, central, src_term) {
                continue;
            }
            let shift = src_order - 1;

            for dst in seed.bonds() {
                if forms.len() >= MAX_RESONANCE_FORMS {
                    break;
                }
                if dst == src {
                    continue;
                }
                let Some(dst_term) = seed.other_end(dst, central) else {
                    continue;
                };
                if atoms[dst_term] != atoms[src_term] || atoms[dst_term] == Element::H {
                    continue;
                }
                if is_protonated_terminal_oxygen(atoms, &seed, central, dst_term) {
                    continue;
                }
                let dst_order = seed.order(dst).as_u8();
                if dst_order >= src_order {
                    continue;
                }
                let Some(raised) = BondOrder::from_u8(dst_order + shift) else {
                    continue;
                };
                if seed.lone_pairs(dst_term) < shift {
                    continue;
                }

                let mut cand = seed.clone();
                cand.set_order(src, BondOrder::Single);
                cand.set_lone_pairs(src_term, cand.lone_pairs(src_term) + shift);
                cand.set_order(dst, raised);
                cand.set_lone_pairs(dst_term, cand.lone_pairs(dst_term) - shift);
                cand.recompute_formal_charges(atoms);

                if cand.formal_charge_sum() != charge as i32 {
                    continue;
                }
                if !shell_all_satisfied(atoms, &cand, central) {
                    continue;
                }
                if forms.iter().any(|f| f.same_form(&cand)) {
                    continue;
                }
                forms.push(cand);
            }
        }
        seed_idx += 1;
    }

    forms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::synthesize;

    #[test]
    fn nitrate_yields_three_contributors() {
        let atoms = [Element::N, Element::O, Element::O, Element::O];
        let base = synthesize(&atoms, -1, 24, 0).unwrap();
        let forms = enumerate_resonance(&atoms, -1, 0, base);
        assert_eq!(forms.len(), 3);
        for form in &forms {
            let doubles = form
                .bonds()
                .filter(|&b| form.order(b) == BondOrder::Double)
                .count();
            assert_eq!(doubles, 1);
            assert_eq!(form.formal_charge_sum(), -1);
        }
    }

    #[test]
    fn symmetric_structure_has_no_shifts() {
        // O=C=O: each double bond's destination already matches its order.
        let atoms = [Element::C, Element::O, Element::O];
        let base = synthesize(&atoms, 0, 16, 0).unwrap();
        let forms = enumerate_resonance(&atoms, 0, 0, base);
        assert_eq!(forms.len(), 1);
    }

    #[test]
    fn sulfate_saturates_the_cap() {
        let atoms = [Element::S, Element::O, Element::O, Element::O, Element::O];
        let base = synthesize(&atoms, -2, 32, 0).unwrap();
        let forms = enumerate_resonance(&atoms, -2, 0, base);
        assert_eq!(forms.len(), MAX_RESONANCE_FORMS);
        for (i, a) in forms.iter().enumerate() {
            for b in &forms[i + 1..] {
                assert!(!a.same_form(b));
            }
        }
    }

    #[test]
    fn protonated_oxygen_is_pinned() {
        // Hydrogen sulfate HSO4^-: the two doubles rotate among the three
        // bare oxygens only, so the OH oxygen stays single-bonded.
        let atoms = [
            Element::S,
            Element::O,
            Element::O,
            Element::O,
            Element::O,
            Element::H,
        ];
        let base = synthesize(&atoms, -1, 32, 0).unwrap();
        let forms = enumerate_resonance(&atoms, -1, 0, base);
        assert_eq!(forms.len(), 3);
        for form in &forms {
            let oh = form
                .neighbors(5)
                .next()
                .expect("hydrogen must be bonded");
            let bond = form.bond_between(0, oh).expect("OH oxygen bonds to S");
            assert_eq!(form.order(bond), BondOrder::Single);
        }
    }
}
