//! chemglyph: terminal text-art depictions of small-molecule 2D structures.
//!
//! The upstream molecular-model provider supplies a positioned atom/bond
//! graph (or, for the density variant, a rendered depiction image); this
//! crate turns it into a fixed-width character grid. Three entry points:
//!
//! - [`render_ascii`] — plain characters (`- / | \ = #`)
//! - [`render_unicode`] — box-drawing characters (`─ ╱ │ ╲ ═ ║ ≡`)
//! - [`render_magic`] — luminance-ramp conversion of a depiction image
//!
//! All three are total over well-formed input: the empty molecule renders
//! as the empty string and nothing in the render paths performs I/O.

pub mod canvas;
pub mod geom;
pub mod magic;
pub mod provider;
pub mod render;
pub mod types;

pub use magic::{render_magic, MagicRenderer};
pub use render::{render_ascii, render_unicode, Renderer};
pub use types::{Atom, Bond, BondOrder, Molecule};
