use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::element::Element;

/// Number of shared electron pairs in one bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
}

impl BondOrder {
    pub fn as_u8(self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }

    pub fn from_u8(n: u8) -> Option<BondOrder> {
        match n {
            1 => Some(BondOrder::Single),
            2 => Some(BondOrder::Double),
            3 => Some(BondOrder::Triple),
            _ => None,
        }
    }

    /// The next higher order, or `None` past triple.
    pub fn raised(self) -> Option<BondOrder> {
        match self {
            BondOrder::Single => Some(BondOrder::Double),
            BondOrder::Double => Some(BondOrder::Triple),
            BondOrder::Triple => None,
        }
    }
}

/// Electron bookkeeping for one atom within one structure.
///
/// `formal_charge` is derived state: it is recomputed from lone pairs and
/// bond orders via [`LewisStructure::recompute_formal_charges`], never set
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtomState {
    pub lone_pairs: u8,
    pub formal_charge: i8,
}

/// One candidate bonding diagram over a fixed atom sequence.
///
/// Node `i` of the underlying graph is atom `i` of the molecule; bonds are
/// edges whose insertion order is the canonical bond ordering (two
/// structures are the "same form" only if their bond sequences match
/// position for position).
#[derive(Debug, Clone, Default)]
pub struct LewisStructure {
    graph: UnGraph<AtomState, BondOrder>,
}

impl LewisStructure {
    /// An empty structure (no bonds, no lone pairs) over `atom_count` atoms.
    pub fn new(atom_count: usize) -> Self {
        let mut graph = UnGraph::default();
        for _ in 0..atom_count {
            graph.add_node(AtomState::default());
        }
        Self { graph }
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Appends a single bond between atoms `a` and `b`.
    pub fn add_bond(&mut self, a: usize, b: usize) -> EdgeIndex {
        self.graph
            .add_edge(NodeIndex::new(a), NodeIndex::new(b), BondOrder::Single)
    }

    /// All bonds, in insertion order.
    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> {
        self.graph.edge_indices()
    }

    /// Bonds touching `atom`, in no particular order.
    pub fn bonds_of(&self, atom: usize) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(NodeIndex::new(atom)).map(|e| e.id())
    }

    pub fn neighbors(&self, atom: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .neighbors(NodeIndex::new(atom))
            .map(|n| n.index())
    }

    pub fn endpoints(&self, bond: EdgeIndex) -> Option<(usize, usize)> {
        self.graph
            .edge_endpoints(bond)
            .map(|(a, b)| (a.index(), b.index()))
    }

    /// The atom on the far side of `bond` from `atom`, if `bond` touches it.
    pub fn other_end(&self, bond: EdgeIndex, atom: usize) -> Option<usize> {
        let (a, b) = self.endpoints(bond)?;
        if a == atom {
            Some(b)
        } else if b == atom {
            Some(a)
        } else {
            None
        }
    }

    pub fn bond_between(&self, a: usize, b: usize) -> Option<EdgeIndex> {
        self.graph.find_edge(NodeIndex::new(a), NodeIndex::new(b))
    }

    pub fn order(&self, bond: EdgeIndex) -> BondOrder {
        self.graph[bond]
    }

    pub fn set_order(&mut self, bond: EdgeIndex, order: BondOrder) {
        self.graph[bond] = order;
    }

    pub fn lone_pairs(&self, atom: usize) -> u8 {
        self.graph[NodeIndex::new(atom)].lone_pairs
    }

    pub fn set_lone_pairs(&mut self, atom: usize, pairs: u8) {
        self.graph[NodeIndex::new(atom)].lone_pairs = pairs;
    }

    pub fn formal_charge(&self, atom: usize) -> i8 {
        self.graph[NodeIndex::new(atom)].formal_charge
    }

    /// Sum of bond orders over every bond touching `atom`.
    pub fn bond_order_sum(&self, atom: usize) -> i32 {
        self.graph
            .edges(NodeIndex::new(atom))
            .map(|e| e.weight().as_u8() as i32)
            .sum()
    }

    /// Electrons surrounding `atom`: both lone-pair electrons and every
    /// shared pair counted in full.
    pub fn electrons_on(&self, atom: usize) -> i32 {
        2 * self.lone_pairs(atom) as i32 + 2 * self.bond_order_sum(atom)
    }

    /// Recomputes every formal charge from the element table:
    /// valence − lone-pair electrons − half the bonded electrons.
    pub fn recompute_formal_charges(&mut self, atoms: &[Element]) {
        for (i, elem) in atoms.iter().enumerate() {
            let fc = elem.valence_electrons() as i32
                - 2 * self.lone_pairs(i) as i32
                - self.bond_order_sum(i);
            self.graph[NodeIndex::new(i)].formal_charge = fc as i8;
        }
    }

    pub fn formal_charge_sum(&self) -> i32 {
        self.graph
            .node_weights()
            .map(|s| s.formal_charge as i32)
            .sum()
    }

    /// Bond-for-bond and lone-pair-for-lone-pair equality.
    ///
    /// Formal charges are not compared; they are derived from the compared
    /// fields.
    pub fn same_form(&self, other: &LewisStructure) -> bool {
        if self.bond_count() != other.bond_count() || self.atom_count() != other.atom_count() {
            return false;
        }
        for (a, b) in self
            .graph
            .edge_references()
            .zip(other.graph.edge_references())
        {
            if a.source() != b.source() || a.target() != b.target() || a.weight() != b.weight() {
                return false;
            }
        }
        self.graph
            .node_weights()
            .zip(other.graph.node_weights())
            .all(|(a, b)| a.lone_pairs == b.lone_pairs)
    }
}

/// Electrons an atom must gather to satisfy its shell.
///
/// H and He follow the duet rule. Period-2 group-2 and group-13 elements
/// accept an incomplete octet, but only at the central position; terminal
/// atoms always aim for a full octet.
pub fn required_electrons(elem: Element, is_central: bool) -> i32 {
    if elem == Element::H || elem == Element::He {
        return 2;
    }
    if is_central && elem.period() == 2 && elem.group() == 2 {
        return 4;
    }
    if is_central && elem.group() == 13 {
        return 6;
    }
    8
}

/// Duet/octet/expanded-octet check for one atom's final electron count.
pub fn shell_satisfied(elem: Element, electrons: i32, is_central: bool) -> bool {
    if elem == Element::H || elem == Element::He {
        return electrons == 2;
    }
    if electrons < required_electrons(elem, is_central) {
        return false;
    }
    // Period-2 atoms cannot expand past the octet.
    if elem.period() <= 2 && electrons > 8 {
        return false;
    }
    true
}

pub fn shell_all_satisfied(atoms: &[Element], ls: &LewisStructure, central: usize) -> bool {
    atoms
        .iter()
        .enumerate()
        .all(|(i, &elem)| shell_satisfied(elem, ls.electrons_on(i), i == central))
}
