//! Greedy single-bond skeleton construction.
//!
//! The skeleton is a spanning tree of single bonds rooted conceptually at
//! the chosen central atom: framework-capable atoms form a linear backbone
//! and everything else hangs off it, heavy atoms before hydrogens. Exactly
//! one skeleton is attempted per central-atom candidate; there is no
//! search over alternatives.

use crate::element::Element;
use crate::molecule::MAX_BONDS;
use crate::structure::LewisStructure;

/// Bonding slots available to an atom while the skeleton is assembled.
///
/// The element's typical capacity, raised at the central position for
/// ammonium-like cations (period-2 group-15 with a positive net charge)
/// and for expanded-valence centers from period 3 on (groups 15/16/17
/// go to 5/6/7).
pub fn bond_limit(elem: Element, is_central: bool, charge: i8) -> u8 {
    let mut limit = elem.bonding_capacity();

    if is_central && elem.period() == 2 && elem.group() == 15 && charge > 0 && limit < 4 {
        limit = 4;
    }

    if is_central && elem.period() >= 3 {
        match elem.group() {
            15 if limit < 5 => limit = 5,
            16 if limit < 6 => limit = 6,
            17 if limit < 7 => limit = 7,
            _ => {}
        }
    }

    limit
}

fn add_single_bond(
    ls: &mut LewisStructure,
    a: usize,
    b: usize,
    pool: &mut i32,
    remain: &mut [u8],
) -> bool {
    if *pool < 2 || ls.bond_count() >= MAX_BONDS {
        return false;
    }
    if remain[a] == 0 || remain[b] == 0 {
        return false;
    }
    ls.add_bond(a, b);
    remain[a] -= 1;
    remain[b] -= 1;
    *pool -= 2;
    true
}

fn heavy_neighbor_count(atoms: &[Element], ls: &LewisStructure, host: usize) -> i32 {
    ls.neighbors(host)
        .filter(|&n| atoms[n] != Element::H)
        .count() as i32
}

/// Builds the single-bond connectivity for `central`, consuming two
/// electrons from `pool` per bond. Returns `None` when no spanning
/// skeleton exists under the slot limits or the pool runs dry.
pub fn build_skeleton(
    atoms: &[Element],
    central: usize,
    charge: i8,
    pool: &mut i32,
) -> Option<LewisStructure> {
    let n = atoms.len();
    let mut ls = LewisStructure::new(n);
    let mut remain = vec![0u8; n];
    let mut connected = vec![false; n];
    let mut backbone: Vec<usize> = Vec::new();

    for (i, &elem) in atoms.iter().enumerate() {
        remain[i] = bond_limit(elem, i == central, charge);

        if i == central {
            backbone.push(i);
            continue;
        }
        // Highly terminal atoms never join the backbone.
        if elem == Element::H || elem.group() == 17 {
            continue;
        }
        if elem.bonding_capacity() >= 3 {
            backbone.push(i);
        }
    }

    if n == 1 {
        return Some(ls);
    }
    if backbone.is_empty() {
        return None;
    }

    // Backbone order: central first, then by capacity over electronegativity.
    let mut ordered = vec![central];
    let mut used = vec![false; n];
    used[central] = true;
    while ordered.len() < backbone.len() {
        let mut best: Option<usize> = None;
        let mut best_score = i32::MIN;
        for &atom in &backbone {
            if used[atom] {
                continue;
            }
            let score = bond_limit(atoms[atom], false, charge) as i32 * 10
                - atoms[atom].electronegativity() as i32;
            if score > best_score {
                best_score = score;
                best = Some(atom);
            }
        }
        let atom = best?;
        ordered.push(atom);
        used[atom] = true;
    }

    connected[central] = true;
    for pair in ordered.windows(2) {
        if !add_single_bond(&mut ls, pair[0], pair[1], pool, &mut remain) {
            return None;
        }
        connected[pair[0]] = true;
        connected[pair[1]] = true;
    }

    // Attach the rest in two passes: heavy atoms first, then hydrogens.
    for target_h in [false, true] {
        for i in 0..n {
            if connected[i] {
                continue;
            }
            let is_h = atoms[i] == Element::H;
            if is_h != target_h {
                continue;
            }
            if remain[i] == 0 {
                return None;
            }

            let mut best_host: Option<usize> = None;
            let mut best_score = i32::MIN;
            for j in 0..n {
                if !connected[j] || i == j || remain[j] == 0 || atoms[j] == Element::H {
                    continue;
                }

                let mut score =
                    remain[j] as i32 * 10 - atoms[j].electronegativity() as i32;
                if is_h {
                    score -= heavy_neighbor_count(atoms, &ls, j) * 8;
                    if j == central {
                        score -= 4;
                    }
                } else if j == central {
                    score += 12;
                }

                if score > best_score {
                    best_score = score;
                    best_host = Some(j);
                }
            }

            // Last resort: any connected atom with a spare slot.
            let host = best_host.or_else(|| {
                (0..n).find(|&j| connected[j] && j != i && remain[j] > 0)
            })?;

            if !add_single_bond(&mut ls, host, i, pool, &mut remain) {
                return None;
            }
            connected[i] = true;
        }
    }

    if connected.iter().all(|&c| c) {
        Some(ls)
    } else {
        None
    }
}
