//! Grid storage and double buffering for the Seep fluid automaton.
//!
//! # Architecture
//!
//! ```text
//! PingPongGrid (orchestrator)
//! ├── published: Grid   ←── read-only input of the running phase
//! └── staging:   Grid   ←── working buffer, reseeded from published
//! ```
//!
//! A [`Grid`] is a fixed `rows × cols` array of [`Cell`](seep_core::Cell)s
//! in row-major order. Every coordinate-taking method is bounds-checked;
//! neighbour lookups return `None` at the edges, so rule code can never
//! index outside the grid.
//!
//! [`PingPongGrid`] makes the read-old / write-new discipline structural:
//! a phase receives `&Grid` for the frozen input and `&mut Grid` for the
//! working copy, and cannot obtain a mutable reference to the input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod neighbour;
pub mod pingpong;

pub use grid::{initialize, Grid};
pub use neighbour::Direction;
pub use pingpong::{PhaseBuffers, PingPongGrid};
