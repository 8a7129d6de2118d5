use crate::{BoundaryCondition, Field, LaplaceSolver, Lattice, StrError};
use std::mem;

/// Indicates how a relaxation run terminated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelaxStatus {
    /// The max-change over the interior dropped to the tolerance or below
    Converged,

    /// The pass budget ran out first; the field is the best effort so far
    MaxPassesExhausted,
}

/// Records the per-pass maximum absolute change of the interior values
///
/// For the Dirichlet problems handled here the sequence is non-increasing;
/// its length grows with the lattice size (finer lattices relax slower).
#[derive(Clone, Debug)]
pub struct ConvergenceTrace {
    /// max |new − old| over the interior, one entry per pass
    pub max_changes: Vec<f64>,

    /// How the run terminated
    pub status: RelaxStatus,
}

impl ConvergenceTrace {
    /// Returns the number of passes run
    pub fn passes(&self) -> usize {
        self.max_changes.len()
    }
}

/// Implements the iterative relaxation (Jacobi) engine
///
/// Each pass replaces every interior value by the arithmetic mean of its
/// lattice neighbors, read from the previous pass:
///
/// ```text
/// V_new[p] = ( Σ V_old[q] ) / k      q ∈ neighbors(p),  k = 2 (1D) or 4 (2D)
/// ```
///
/// Two buffers are kept and swapped after each full pass, so no value
/// computed within a pass is visible to the same pass and the update is
/// independent of the traversal order (synchronous/Jacobi, not Gauss-Seidel).
///
/// The run stops when `max |V_new − V_old|` over the interior is ≤
/// `tolerance`, or after `max_passes` passes, whichever comes first. Both
/// limits must be supplied; there is no default budget.
pub struct Relaxation {
    /// Maximum number of passes
    pub max_passes: usize,

    /// Convergence criterion on the max-change over the interior
    pub tolerance: f64,
}

impl Relaxation {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `max_passes` -- pass budget (the run never exceeds it)
    /// * `tolerance` -- max-change threshold for convergence
    pub fn new(max_passes: usize, tolerance: f64) -> Self {
        Relaxation { max_passes, tolerance }
    }

    /// Relaxes the interior of a field to the discrete-Laplace fixed point
    ///
    /// Boundary entries of the given field are never modified. This
    /// operation cannot fail: exhausting the pass budget is a normal
    /// outcome, reported by the trace's status.
    pub fn run(&self, lattice: &Lattice, field: Field) -> (Field, ConvergenceTrace) {
        let mut field = field;
        let interior = lattice.interior_indices();
        let neighbors: Vec<Vec<usize>> = interior.iter().map(|&i| lattice.neighbors(i)).collect();
        let k = lattice.stencil_size() as f64;
        let mut next = field.values.clone();
        let mut max_changes = Vec::new();
        let mut status = RelaxStatus::MaxPassesExhausted;
        for _ in 0..self.max_passes {
            let mut max_change = 0.0;
            for (p, &i) in interior.iter().enumerate() {
                let mut sum = 0.0;
                for &j in &neighbors[p] {
                    sum += field.values[j];
                }
                let value = sum / k;
                let change = f64::abs(value - field.values[i]);
                if change > max_change {
                    max_change = change;
                }
                next[i] = value;
            }
            mem::swap(&mut field.values, &mut next);
            max_changes.push(max_change);
            if max_change <= self.tolerance {
                status = RelaxStatus::Converged;
                break;
            }
        }
        (field, ConvergenceTrace { max_changes, status })
    }
}

impl LaplaceSolver for Relaxation {
    fn name(&self) -> &'static str {
        "Relaxation"
    }

    fn compute(&self, lattice: &Lattice, bc: &BoundaryCondition) -> Result<Field, StrError> {
        let field = bc.apply(lattice)?;
        let (field, _) = self.run(lattice, field);
        Ok(field)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
