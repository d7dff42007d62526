//! Molecule interchange with the upstream model provider.
//!
//! Parsing, name resolution and 2D layout happen in a separate program; it
//! hands this crate an already-positioned atom/bond graph as a JSON
//! document:
//!
//! ```json
//! {
//!   "atoms": [{"symbol": "C", "x": 0.0, "y": 0.0}],
//!   "bonds": [{"a": 0, "b": 1, "order": 1, "aromatic": false}]
//! }
//! ```
//!
//! Everything is validated here so the rendering core never sees malformed
//! geometry. A missing or unreadable document is the provider signalling
//! absence; the renderers are simply not invoked.

use std::io::Read;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{Atom, Bond, BondOrder, Molecule};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtomSpec {
    pub symbol: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BondSpec {
    pub a: usize,
    pub b: usize,
    pub order: u8,
    #[serde(default)]
    pub aromatic: bool,
}

/// Wire form of a molecule. Both lists default to empty so `{}` is the
/// empty molecule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoleculeSpec {
    #[serde(default)]
    pub atoms: Vec<AtomSpec>,
    #[serde(default)]
    pub bonds: Vec<BondSpec>,
}

impl MoleculeSpec {
    /// Validate and convert into the core molecule type.
    pub fn into_molecule(self) -> Result<Molecule> {
        let atom_count = self.atoms.len();

        let mut atoms = Vec::with_capacity(atom_count);
        for (i, atom) in self.atoms.into_iter().enumerate() {
            let len = atom.symbol.chars().count();
            if len == 0 || len > 2 {
                bail!("atom {}: symbol {:?} must be 1-2 characters", i, atom.symbol);
            }
            atoms.push(Atom::new(atom.symbol, atom.x, atom.y));
        }

        let mut bonds = Vec::with_capacity(self.bonds.len());
        for (i, bond) in self.bonds.into_iter().enumerate() {
            if bond.a >= atom_count || bond.b >= atom_count {
                bail!(
                    "bond {}: atom index out of range ({} atoms)",
                    i,
                    atom_count
                );
            }
            if bond.a == bond.b {
                bail!("bond {}: self-bond on atom {}", i, bond.a);
            }
            let order = BondOrder::from_u8(bond.order)
                .with_context(|| format!("bond {}: order {} not in 1..=3", i, bond.order))?;
            bonds.push(Bond {
                a: bond.a,
                b: bond.b,
                order,
                aromatic: bond.aromatic,
            });
        }

        Ok(Molecule::new(atoms, bonds))
    }
}

impl From<&Molecule> for MoleculeSpec {
    fn from(mol: &Molecule) -> Self {
        Self {
            atoms: mol
                .atoms
                .iter()
                .map(|a| AtomSpec {
                    symbol: a.symbol.clone(),
                    x: a.x,
                    y: a.y,
                })
                .collect(),
            bonds: mol
                .bonds
                .iter()
                .map(|b| BondSpec {
                    a: b.a,
                    b: b.b,
                    order: b.order.as_u8(),
                    aromatic: b.aromatic,
                })
                .collect(),
        }
    }
}

/// Parse a provider document from a JSON string.
pub fn from_json(json: &str) -> Result<Molecule> {
    let spec: MoleculeSpec =
        serde_json::from_str(json).context("malformed molecule document")?;
    spec.into_molecule()
}

/// Read and parse a provider document.
pub fn read_molecule(mut reader: impl Read) -> Result<Molecule> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .context("reading molecule document")?;
    from_json(&buf)
}
