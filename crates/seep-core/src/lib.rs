//! Core types for the Seep fluid automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Seep workspace:
//! cell kinds, cells, point edits and their receipts, tick IDs, the
//! fill constants shared by every rule phase, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod edit;
pub mod error;
pub mod id;

pub use cell::{Cell, CellKind, CAPACITY, EMPTY_THRESHOLD};
pub use edit::{Edit, EditReceipt};
pub use error::{EditError, GridError};
pub use id::TickId;
