//! Pipeline validation and execution.
//!
//! [`Pipeline::new`] runs once at construction to check the phase list for
//! structural errors. [`Pipeline::run`] then executes every phase in order
//! against a [`PingPongGrid`], publishing after each one.

use indexmap::IndexMap;
use seep_grid::PingPongGrid;

use crate::phase::{Phase, ReadMode};

use std::error::Error;
use std::fmt;

// ── Errors ─────────────────────────────────────────────────────────

/// Errors from pipeline validation (construction-time, not per-tick).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// No phases registered.
    EmptyPipeline,

    /// Two phases share a name, which would make telemetry ambiguous.
    DuplicateName {
        /// The repeated name.
        name: String,
        /// Position of the first phase with this name.
        first_index: usize,
        /// Position of the repeat.
        second_index: usize,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPipeline => write!(f, "pipeline has no phases"),
            Self::DuplicateName {
                name,
                first_index,
                second_index,
            } => write!(
                f,
                "phase name '{name}' used at positions {first_index} and {second_index}"
            ),
        }
    }
}

impl Error for PipelineError {}

// ── Execution ──────────────────────────────────────────────────────

/// Run a single phase against `arena` and publish its result.
pub fn execute_phase(phase: &dyn Phase, arena: &mut PingPongGrid) {
    let bufs = arena.begin_phase();
    phase.apply(bufs.input, bufs.working);
    arena.publish();
}

// ── Pipeline ───────────────────────────────────────────────────────

/// An ordered, validated list of phases.
///
/// # Examples
///
/// ```
/// use seep_grid::{initialize, Grid, PingPongGrid};
/// use seep_phase::{Phase, Pipeline, PipelineError};
///
/// struct Noop(&'static str);
/// impl Phase for Noop {
///     fn name(&self) -> &str { self.0 }
///     fn apply(&self, _input: &Grid, _working: &mut Grid) {}
/// }
///
/// let pipeline = Pipeline::new(vec![Box::new(Noop("a")), Box::new(Noop("b"))]).unwrap();
/// assert_eq!(pipeline.names(), vec!["a", "b"]);
///
/// let mut arena = PingPongGrid::new(initialize(2, 2).unwrap());
/// pipeline.run(&mut arena);
/// assert_eq!(arena.generation(), 2);
///
/// assert_eq!(Pipeline::new(vec![]).unwrap_err(), PipelineError::EmptyPipeline);
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Validate and wrap `phases`, preserving their order.
    pub fn new(phases: Vec<Box<dyn Phase>>) -> Result<Self, PipelineError> {
        if phases.is_empty() {
            return Err(PipelineError::EmptyPipeline);
        }
        {
            let mut seen: IndexMap<&str, usize> = IndexMap::with_capacity(phases.len());
            for (i, phase) in phases.iter().enumerate() {
                if let Some(&first_index) = seen.get(phase.name()) {
                    return Err(PipelineError::DuplicateName {
                        name: phase.name().to_string(),
                        first_index,
                        second_index: i,
                    });
                }
                seen.insert(phase.name(), i);
            }
        }
        Ok(Self { phases })
    }

    /// Number of phases.
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Always returns `false`: construction rejects empty pipelines.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Phase names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.phases.iter().map(|p| p.name()).collect()
    }

    /// Phases in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Phase> {
        self.phases.iter().map(|p| p.as_ref())
    }

    /// Names of phases whose result depends on scan order.
    pub fn order_dependent(&self) -> Vec<&str> {
        self.iter()
            .filter(|p| p.read_mode() == ReadMode::Progressive)
            .map(|p| p.name())
            .collect()
    }

    /// Run every phase once, in order.
    pub fn run(&self, arena: &mut PingPongGrid) {
        for phase in self.iter() {
            execute_phase(phase, arena);
        }
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("phases", &self.names())
            .finish()
    }
}
