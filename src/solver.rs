use crate::{BoundaryCondition, Field, Lattice, StrError};

/// Defines the common interface of the two Laplace solving engines
///
/// [crate::Relaxation] (iterative) and [crate::DirectSolve] (linear algebra)
/// implement the same contract: given a lattice and Dirichlet data, produce
/// the field satisfying the discrete averaging property at every interior
/// node (exactly for the direct engine, within the iteration tolerance for
/// the relaxation engine). Callers and tests may thus swap engines freely
/// and compare their outputs.
pub trait LaplaceSolver {
    /// Returns the name of the engine
    fn name(&self) -> &'static str;

    /// Computes the potential field for a lattice and boundary condition
    fn compute(&self, lattice: &Lattice, bc: &BoundaryCondition) -> Result<Field, StrError>;
}
