//! Phase trait and pipeline execution for the Seep fluid automaton.
//!
//! A [`Phase`] is one local-update rule. A [`Pipeline`] is an ordered,
//! validated list of phases; running it once advances the grid by one tick.
//! Each phase runs against a fresh [`PhaseBuffers`](seep_grid::PhaseBuffers)
//! pair and its result is published before the next phase starts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod phase;
pub mod pipeline;

pub use phase::{Phase, ReadMode};
pub use pipeline::{execute_phase, Pipeline, PipelineError};
