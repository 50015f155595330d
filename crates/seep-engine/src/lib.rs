//! Simulation world for the Seep fluid automaton.
//!
//! [`Simulation`] owns the grid, the phase pipeline and the pending-edit
//! queue, and advances one tick per [`step_sync()`](Simulation::step_sync)
//! call. Around it sit the pieces a driver needs: [`WorldConfig`] for
//! sizing, [`Brush`] for turning pointer and key input into edits, and
//! [`Painter`] / [`render_text`] for turning grid state into something
//! visible. None of these touch a window or an event loop.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod editor;
pub mod ingress;
pub mod metrics;
pub mod paint;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use editor::{Brush, InputEvent};
pub use ingress::EditQueue;
pub use metrics::StepMetrics;
pub use paint::{render_text, FillMode, Painter, Palette, Rect, Rgb};
pub use world::{Simulation, StepResult};
