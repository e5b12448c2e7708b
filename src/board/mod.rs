//! Board arena and neighbor topology.
//!
//! The `Board` owns every `Cell` in a flat `Vec`. Cells refer to each other
//! through `CellId` indices, never through references, so the cyclic
//! neighbor graph has a single owner.
//!
//! ## Key Types
//!
//! - `CellId`: Index into the board arena
//! - `Cell`: Owner state, arrow, and eight neighbor slots
//! - `CellView`: Copyable read-only snapshot of a cell
//! - `Board`: Construction, linking, lookup, enumeration

pub mod cell;
pub mod grid;

pub use cell::{Cell, CellId, CellView};
pub use grid::{Board, CellCounts, GridType};
