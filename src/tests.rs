use crate::*;

fn build(charge: i8, atoms: &[Element]) -> Molecule {
    let mut mol = Molecule::new();
    for &a in atoms {
        assert!(mol.add_atom(a));
    }
    mol.set_charge(charge);
    mol
}

fn build_and_generate(charge: i8, atoms: &[Element]) -> Molecule {
    let mut mol = build(charge, atoms);
    generate(&mut mol);
    mol
}

fn central_double_bond_count(mol: &Molecule, ls: &LewisStructure) -> usize {
    ls.bonds_of(mol.central_atom())
        .filter(|&b| ls.order(b) == BondOrder::Double)
        .count()
}

fn success_invariants(mol: &Molecule) {
    assert_eq!(mol.invalid_reason(), None);
    assert!(!mol.forms().is_empty());
    assert!(mol.central_atom() < mol.atom_count());
    for (i, form) in mol.forms().iter().enumerate() {
        assert_eq!(
            form.formal_charge_sum(),
            mol.charge() as i32,
            "form {i} charge sum"
        );
        for other in &mol.forms()[i + 1..] {
            assert!(!form.same_form(other), "form {i} duplicated");
        }
    }
}

#[test]
fn carbon_dioxide() {
    let mol = build_and_generate(0, &[Element::C, Element::O, Element::O]);
    success_invariants(&mol);
    assert_eq!(mol.forms().len(), 1);
    assert_eq!(mol.atoms()[mol.central_atom()], Element::C);

    let ls = &mol.forms()[0];
    assert_eq!(ls.bond_order_sum(mol.central_atom()), 4);
    assert_eq!(ls.lone_pairs(mol.central_atom()), 0);
    assert_eq!(ls.formal_charge_sum(), 0);
}

#[test]
fn nitrate() {
    let mol = build_and_generate(-1, &[Element::N, Element::O, Element::O, Element::O]);
    success_invariants(&mol);
    assert_eq!(mol.forms().len(), 3);
    assert_eq!(mol.atoms()[mol.central_atom()], Element::N);

    for ls in mol.forms() {
        assert_eq!(ls.bond_order_sum(mol.central_atom()), 4);
        assert_eq!(central_double_bond_count(&mol, ls), 1);
    }
}

#[test]
fn carbonate() {
    let mol = build_and_generate(-2, &[Element::C, Element::O, Element::O, Element::O]);
    success_invariants(&mol);
    assert_eq!(mol.forms().len(), 3);
    assert_eq!(mol.atoms()[mol.central_atom()], Element::C);

    for ls in mol.forms() {
        assert_eq!(ls.bond_order_sum(mol.central_atom()), 4);
        assert_eq!(central_double_bond_count(&mol, ls), 1);
    }
}

#[test]
fn sulfate() {
    let mol = build_and_generate(
        -2,
        &[
            Element::S,
            Element::O,
            Element::O,
            Element::O,
            Element::O,
        ],
    );
    success_invariants(&mol);
    assert_eq!(mol.forms().len(), MAX_RESONANCE_FORMS);
    assert_eq!(mol.atoms()[mol.central_atom()], Element::S);

    for ls in mol.forms() {
        assert_eq!(ls.bond_order_sum(mol.central_atom()), 6);
        assert_eq!(central_double_bond_count(&mol, ls), 2);
    }
}

#[test]
fn phosphate() {
    let mol = build_and_generate(
        -3,
        &[
            Element::P,
            Element::O,
            Element::O,
            Element::O,
            Element::O,
        ],
    );
    success_invariants(&mol);
    assert_eq!(mol.forms().len(), 4);
    assert_eq!(mol.atoms()[mol.central_atom()], Element::P);

    for ls in mol.forms() {
        assert_eq!(ls.bond_order_sum(mol.central_atom()), 5);
        assert_eq!(central_double_bond_count(&mol, ls), 1);
    }
}

#[test]
fn ammonium() {
    let mol = build_and_generate(
        1,
        &[
            Element::N,
            Element::H,
            Element::H,
            Element::H,
            Element::H,
        ],
    );
    success_invariants(&mol);
    assert_eq!(mol.forms().len(), 1);
    assert_eq!(mol.atoms()[mol.central_atom()], Element::N);

    let ls = &mol.forms()[0];
    assert_eq!(ls.bond_order_sum(mol.central_atom()), 4);
    assert_eq!(ls.lone_pairs(mol.central_atom()), 0);
    assert_eq!(ls.formal_charge(mol.central_atom()), 1);
}

#[test]
fn boron_trifluoride_incomplete_octet() {
    let mol = build_and_generate(0, &[Element::B, Element::F, Element::F, Element::F]);
    success_invariants(&mol);
    assert_eq!(mol.forms().len(), 1);
    assert_eq!(mol.atoms()[mol.central_atom()], Element::B);

    let ls = &mol.forms()[0];
    assert_eq!(ls.bond_order_sum(mol.central_atom()), 3);
    assert_eq!(ls.lone_pairs(mol.central_atom()), 0);
}

#[test]
fn sulfur_hexafluoride_expanded_valence() {
    let mol = build_and_generate(
        0,
        &[
            Element::S,
            Element::F,
            Element::F,
            Element::F,
            Element::F,
            Element::F,
            Element::F,
        ],
    );
    success_invariants(&mol);
    assert_eq!(mol.forms().len(), 1);
    assert_eq!(mol.atoms()[mol.central_atom()], Element::S);
    assert_eq!(mol.forms()[0].bond_order_sum(mol.central_atom()), 6);
}

#[test]
fn phosphorus_pentachloride_expanded_valence() {
    let mol = build_and_generate(
        0,
        &[
            Element::P,
            Element::Cl,
            Element::Cl,
            Element::Cl,
            Element::Cl,
            Element::Cl,
        ],
    );
    success_invariants(&mol);
    assert_eq!(mol.forms().len(), 1);
    assert_eq!(mol.atoms()[mol.central_atom()], Element::P);
    assert_eq!(mol.forms()[0].bond_order_sum(mol.central_atom()), 5);
}

#[test]
fn no_atoms_failure() {
    let mut mol = Molecule::new();
    generate(&mut mol);
    assert!(mol.forms().is_empty());
    assert_eq!(mol.invalid_reason(), Some(InvalidReason::NoAtoms));
}

#[test]
fn negative_electron_failure() {
    let mol = build_and_generate(2, &[Element::H]);
    assert!(mol.forms().is_empty());
    assert!(mol.total_valence_electrons() < 0);
    assert_eq!(
        mol.invalid_reason(),
        Some(InvalidReason::NegativeElectronCount)
    );
}

#[test]
fn skeleton_failure() {
    let mol = build_and_generate(0, &[Element::He, Element::He]);
    assert!(mol.forms().is_empty());
    assert_eq!(
        mol.invalid_reason(),
        Some(InvalidReason::SkeletonBuildFailure)
    );
}

#[test]
fn odd_electron_rejection() {
    let mol = build_and_generate(0, &[Element::N, Element::O]);
    assert!(mol.forms().is_empty());
    assert_eq!(mol.invalid_reason(), Some(InvalidReason::OddElectronCount));
}

#[test]
fn generation_is_idempotent() {
    let mut mol = build(-1, &[Element::N, Element::O, Element::O, Element::O]);
    generate(&mut mol);
    let first: Vec<LewisStructure> = mol.forms().to_vec();
    generate(&mut mol);
    assert_eq!(mol.forms().len(), first.len());
    for (a, b) in first.iter().zip(mol.forms()) {
        assert!(a.same_form(b));
    }
}

#[test]
fn editing_discards_stale_forms() {
    let mut mol = build_and_generate(0, &[Element::C, Element::O, Element::O]);
    assert!(!mol.forms().is_empty());
    assert!(mol.add_atom(Element::O));
    assert!(mol.forms().is_empty());
    assert_eq!(mol.invalid_reason(), None);
}
