//! Per-tick metrics for the simulation world.
//!
//! [`StepMetrics`] captures timing and edit counts for a single tick.

/// Timing and bookkeeping collected during a single tick.
///
/// All durations are in microseconds. The world populates these fields
/// after each `step_sync()` call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Time spent applying pending edits, in microseconds.
    pub edit_processing_us: u64,
    /// Per-phase execution times: `(name, microseconds)`.
    pub phase_us: Vec<(String, u64)>,
    /// Edits written into the grid ahead of this tick.
    pub edits_applied: u32,
    /// Edits rejected at submission or application.
    pub edits_rejected: u32,
    /// Total fill across the grid after the tick.
    pub total_fill: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.edit_processing_us, 0);
        assert!(m.phase_us.is_empty());
        assert_eq!(m.edits_applied, 0);
        assert_eq!(m.edits_rejected, 0);
        assert_eq!(m.total_fill, 0.0);
    }
}
