/// Main-group elements covered by the engine.
///
/// The discriminant is a table index (the table skips the transition
/// metals), not the atomic number. All per-element data lives in parallel
/// static arrays indexed by that discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Element {
    H = 0,
    He,
    Li,
    Be,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    Ar,
    K,
    Ca,
    Ga,
    Ge,
    As,
    Se,
    Br,
    Kr,
    Rb,
    Sr,
    In,
    Sn,
    Sb,
    Te,
    I,
    Xe,
}

pub const NUM_ELEMENTS: usize = 34;

pub const ALL_ELEMENTS: [Element; NUM_ELEMENTS] = [
    Element::H,
    Element::He,
    Element::Li,
    Element::Be,
    Element::B,
    Element::C,
    Element::N,
    Element::O,
    Element::F,
    Element::Ne,
    Element::Na,
    Element::Mg,
    Element::Al,
    Element::Si,
    Element::P,
    Element::S,
    Element::Cl,
    Element::Ar,
    Element::K,
    Element::Ca,
    Element::Ga,
    Element::Ge,
    Element::As,
    Element::Se,
    Element::Br,
    Element::Kr,
    Element::Rb,
    Element::Sr,
    Element::In,
    Element::Sn,
    Element::Sb,
    Element::Te,
    Element::I,
    Element::Xe,
];

impl Element {
    pub fn from_symbol(s: &str) -> Option<Element> {
        ALL_ELEMENTS.iter().copied().find(|e| e.symbol() == s)
    }

    pub fn from_atomic_num(n: u8) -> Option<Element> {
        ALL_ELEMENTS.iter().copied().find(|e| e.atomic_num() == n)
    }

    pub fn symbol(self) -> &'static str {
        SYMBOLS[self as usize]
    }

    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    pub fn atomic_num(self) -> u8 {
        ATOMIC_NUMS[self as usize]
    }

    /// Electrons available for bonding and lone pairs.
    pub fn valence_electrons(self) -> u8 {
        VALENCE_ELECTRONS[self as usize]
    }

    /// Typical number of single bonds the element forms.
    pub fn bonding_capacity(self) -> u8 {
        BONDING_CAPACITY[self as usize]
    }

    /// Pauling electronegativity ×10, as a fixed-point integer.
    /// Noble gases without a tabulated value report 0.
    pub fn electronegativity(self) -> u8 {
        ELECTRONEGATIVITY[self as usize]
    }

    /// Period, 1-based.
    pub fn period(self) -> u8 {
        PERIOD[self as usize]
    }

    /// Group, 1..=18.
    pub fn group(self) -> u8 {
        GROUP[self as usize]
    }

    /// Elements that essentially never sit at the hub of a skeleton:
    /// halogens and anything that forms at most one bond.
    pub fn is_terminal_class(self) -> bool {
        self.group() == 17 || self.bonding_capacity() <= 1
    }
}

static SYMBOLS: [&str; NUM_ELEMENTS] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "In", "Sn", "Sb", "Te", "I",
    "Xe",
];

static NAMES: [&str; NUM_ELEMENTS] = [
    "Hydrogen",
    "Helium",
    "Lithium",
    "Beryllium",
    "Boron",
    "Carbon",
    "Nitrogen",
    "Oxygen",
    "Fluorine",
    "Neon",
    "Sodium",
    "Magnesium",
    "Aluminum",
    "Silicon",
    "Phosphorus",
    "Sulfur",
    "Chlorine",
    "Argon",
    "Potassium",
    "Calcium",
    "Gallium",
    "Germanium",
    "Arsenic",
    "Selenium",
    "Bromine",
    "Krypton",
    "Rubidium",
    "Strontium",
    "Indium",
    "Tin",
    "Antimony",
    "Tellurium",
    "Iodine",
    "Xenon",
];

static ATOMIC_NUMS: [u8; NUM_ELEMENTS] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 31, 32, 33, 34, 35, 36,
    37, 38, 49, 50, 51, 52, 53, 54,
];

static VALENCE_ELECTRONS: [u8; NUM_ELEMENTS] = [
    1, 2, 1, 2, 3, 4, 5, 6, 7, 8, 1, 2, 3, 4, 5, 6, 7, 8, 1, 2, 3, 4, 5, 6, 7, 8, 1, 2, 3, 4, 5,
    6, 7, 8,
];

static BONDING_CAPACITY: [u8; NUM_ELEMENTS] = [
    1, 0, 1, 2, 3, 4, 3, 2, 1, 0, 1, 2, 3, 4, 5, 6, 1, 0, 1, 2, 3, 4, 5, 6, 1, 2, 1, 2, 3, 4, 5,
    6, 1, 4,
];

static ELECTRONEGATIVITY: [u8; NUM_ELEMENTS] = [
    22, 0, 10, 16, 20, 26, 30, 34, 40, 0, 9, 13, 16, 19, 22, 26, 32, 0, 8, 10, 18, 20, 22, 26, 30,
    30, 8, 10, 18, 20, 21, 21, 27, 26,
];

static PERIOD: [u8; NUM_ELEMENTS] = [
    1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5,
    5, 5, 5,
];

static GROUP: [u8; NUM_ELEMENTS] = [
    1, 18, 1, 2, 13, 14, 15, 16, 17, 18, 1, 2, 13, 14, 15, 16, 17, 18, 1, 2, 13, 14, 15, 16, 17,
    18, 1, 2, 13, 14, 15, 16, 17, 18,
];
