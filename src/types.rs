//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

/// Default canvas dimensions for the geometry renderers.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Default blank margin (in cells) kept around the structure.
pub const DEFAULT_PADDING: u16 = 2;

/// Default column count for the image-density renderer.
pub const DEFAULT_MAGIC_COLUMNS: u16 = 120;

/// Terminal cells are roughly twice as tall as they are wide; row counts
/// derived from an image aspect ratio are scaled by this factor.
pub const CHAR_ASPECT: f64 = 0.5;

/// Chemical bond multiplicity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
}

impl BondOrder {
    /// Parse from the interchange integer (1/2/3)
    pub fn from_u8(n: u8) -> Option<Self> {
        match n {
            1 => Some(BondOrder::Single),
            2 => Some(BondOrder::Double),
            3 => Some(BondOrder::Triple),
            _ => None,
        }
    }

    /// Convert to the interchange integer
    pub fn as_u8(&self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

/// A positioned atom. The index of an atom is its position in
/// [`Molecule::atoms`]; bonds refer to atoms by that index.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Element symbol, 1-2 characters ("C", "Cl", ...)
    pub symbol: String,
    pub x: f64,
    pub y: f64,
}

impl Atom {
    pub fn new(symbol: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            symbol: symbol.into(),
            x,
            y,
        }
    }
}

/// A bond between two atoms, referenced by index.
///
/// Invariant (enforced at the provider boundary): both indices are in range
/// and distinct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub order: BondOrder,
    /// Part of a delocalized ring system. Affects glyph choice only.
    pub aromatic: bool,
}

impl Bond {
    pub fn new(a: usize, b: usize, order: BondOrder) -> Self {
        Self {
            a,
            b,
            order,
            aromatic: false,
        }
    }

    pub fn aromatic(a: usize, b: usize) -> Self {
        Self {
            a,
            b,
            order: BondOrder::Single,
            aromatic: true,
        }
    }
}

/// A positioned molecule as supplied by the upstream model provider.
///
/// The empty molecule (no atoms, no bonds) is valid input everywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        Self { atoms, bonds }
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Atom positions in input order.
    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.atoms.iter().map(|a| (a.x, a.y))
    }
}
