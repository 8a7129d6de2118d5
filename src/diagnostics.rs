use crate::{ConvergenceTrace, Field, RelaxStatus, StrError};

/// Returns the maximum absolute per-point difference between two fields
///
/// Scans all indices (boundary included). Useful to assert that the two
/// engines agree on the same problem.
pub fn max_difference(a: &Field, b: &Field) -> Result<f64, StrError> {
    if a.nx() != b.nx() || a.ny() != b.ny() {
        return Err("fields must have the same lattice dimensions");
    }
    let mut max_diff = 0.0;
    for i in 0..a.dim() {
        let diff = f64::abs(a.get(i) - b.get(i));
        if diff > max_diff {
            max_diff = diff;
        }
    }
    Ok(max_diff)
}

/// Condenses a convergence trace into its headline numbers
pub struct TraceSummary {
    /// Number of passes run
    pub passes: usize,

    /// How the run terminated
    pub status: RelaxStatus,

    /// Max-change of the last pass (None if no pass ran)
    pub final_max_change: Option<f64>,
}

/// Summarizes a convergence trace
pub fn trace_summary(trace: &ConvergenceTrace) -> TraceSummary {
    TraceSummary {
        passes: trace.passes(),
        status: trace.status,
        final_max_change: trace.max_changes.last().copied(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{max_difference, trace_summary};
    use crate::{BoundaryCondition, ConvergenceTrace, Lattice, RelaxStatus, Relaxation};

    #[test]
    fn max_difference_works() {
        let lat = Lattice::new_1d(5, 1.0).unwrap();
        let a = BoundaryCondition::two_point(0.0, 1.0).apply(&lat).unwrap();
        let b = BoundaryCondition::two_point(0.0, 3.0).apply(&lat).unwrap();
        assert_eq!(max_difference(&a, &a).unwrap(), 0.0);
        // endpoints differ by 2 and interior means differ by 1
        assert_eq!(max_difference(&a, &b).unwrap(), 2.0);
    }

    #[test]
    fn max_difference_fails_on_mismatched_fields() {
        let a = BoundaryCondition::two_point(0.0, 1.0)
            .apply(&Lattice::new_1d(5, 1.0).unwrap())
            .unwrap();
        let b = BoundaryCondition::two_point(0.0, 1.0)
            .apply(&Lattice::new_1d(6, 1.0).unwrap())
            .unwrap();
        assert_eq!(
            max_difference(&a, &b).err(),
            Some("fields must have the same lattice dimensions")
        );
    }

    #[test]
    fn trace_summary_works() {
        let lat = Lattice::new_1d(8, 1.0).unwrap();
        let field = BoundaryCondition::two_point(1.0, -1.0).apply(&lat).unwrap();
        let (_, trace) = Relaxation::new(5_000, 1e-10).run(&lat, field);
        let summary = trace_summary(&trace);
        assert_eq!(summary.status, RelaxStatus::Converged);
        assert_eq!(summary.passes, trace.passes());
        assert!(summary.final_max_change.unwrap() <= 1e-10);

        let empty = ConvergenceTrace {
            max_changes: Vec::new(),
            status: RelaxStatus::MaxPassesExhausted,
        };
        let summary = trace_summary(&empty);
        assert_eq!(summary.passes, 0);
        assert_eq!(summary.final_max_change, None);
    }
}
