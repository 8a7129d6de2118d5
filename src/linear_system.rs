use crate::{BoundaryCondition, Field, LaplaceSolver, Lattice, StrError};
use russell_lab::Vector;
use russell_sparse::{CooMatrix, Genie, LinSolver, SparseMatrix};

/// Implements the linear system equivalent to the discrete Laplace equation
///
/// For each interior node p with stencil size k (2 in 1D, 4 in 2D), the row
/// encodes the discrete averaging property with the known boundary
/// neighbors moved to the right-hand side:
///
/// ```text
/// k V_p  −  Σ V_q  =  Σ V_b      q: interior neighbors of p
///                                b: boundary neighbors of p
/// ```
///
/// The matrix is square with size equal to the number of interior nodes;
/// row i corresponds to the i-th entry of [Lattice::interior_indices]
/// (row-major order). The system is built once per (lattice, boundary
/// condition) pair and is immutable thereafter.
pub struct LinearSystem {
    /// Coefficient matrix (n_interior × n_interior)
    pub aa: CooMatrix,

    /// Boundary contributions (right-hand side)
    pub bb: Vector,

    /// Maps row number => global node index (row-major interior enumeration)
    pub interior: Vec<usize>,
}

impl LinearSystem {
    /// Assembles the system for a lattice and boundary condition
    pub fn new(lattice: &Lattice, bc: &BoundaryCondition) -> Result<Self, StrError> {
        let interior = lattice.interior_indices();
        if interior.is_empty() {
            return Err("lattice has no interior points");
        }
        let prescribed = bc.evaluate(lattice)?;
        let n = interior.len();
        let k = lattice.stencil_size() as f64;

        // global node index => row number
        let mut row_of = vec![usize::MAX; lattice.dim()];
        for (r, &i) in interior.iter().enumerate() {
            row_of[i] = r;
        }

        let max_nnz = n * (lattice.stencil_size() + 1);
        let mut aa = CooMatrix::new(n, n, max_nnz, None, false)?;
        let mut bb = Vector::new(n);
        for (r, &i) in interior.iter().enumerate() {
            aa.put(r, r, k)?;
            for j in lattice.neighbors(i) {
                if lattice.is_boundary(j) {
                    bb[r] += *prescribed
                        .get(&j)
                        .ok_or("boundary condition does not cover every boundary point")?;
                } else {
                    aa.put(r, row_of[j], -1.0)?;
                }
            }
        }
        Ok(LinearSystem { aa, bb, interior })
    }

    /// Solves the system exactly via sparse factorization
    ///
    /// A singular matrix is reported as an error: the factorization failure
    /// propagates, and a non-finite solution is rejected instead of being
    /// returned.
    pub fn solve(self, genie: Genie) -> Result<Vector, StrError> {
        let n = self.interior.len();
        let mut mat = SparseMatrix::from_coo(self.aa);
        let mut solver = LinSolver::new(genie)?;
        solver.actual.factorize(&mut mat, None)?;
        let mut x = Vector::new(n);
        solver.actual.solve(&mut x, &mat, &self.bb, false)?;
        if x.as_data().iter().any(|v| !v.is_finite()) {
            return Err("linear system is singular");
        }
        Ok(x)
    }
}

/// Reassembles a full field from the boundary condition and a solved vector
///
/// Entry i of the solved vector goes to the i-th interior node in the same
/// row-major enumeration used by [LinearSystem::new].
pub fn to_field(lattice: &Lattice, bc: &BoundaryCondition, solved: &Vector) -> Result<Field, StrError> {
    let interior = lattice.interior_indices();
    if solved.dim() != interior.len() {
        return Err("solved vector length must match the number of interior points");
    }
    let mut field = bc.apply(lattice)?;
    for (r, &i) in interior.iter().enumerate() {
        field.set(i, solved[r]);
    }
    Ok(field)
}

/// Implements the direct linear-algebra engine as a solver strategy
///
/// Builds the interior-only system and solves it in one shot. On a
/// boundary-only lattice (no interior nodes) the applied boundary field is
/// already the full solution and is returned directly.
pub struct DirectSolve {
    /// Selects the sparse solver kind
    pub genie: Genie,
}

impl DirectSolve {
    /// Allocates a new instance using UMFPACK
    pub fn new() -> Self {
        DirectSolve { genie: Genie::Umfpack }
    }
}

impl LaplaceSolver for DirectSolve {
    fn name(&self) -> &'static str {
        "DirectSolve"
    }

    fn compute(&self, lattice: &Lattice, bc: &BoundaryCondition) -> Result<Field, StrError> {
        if lattice.num_interior() == 0 {
            return bc.apply(lattice);
        }
        let system = LinearSystem::new(lattice, bc)?;
        let solved = system.solve(self.genie)?;
        to_field(lattice, bc, &solved)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{to_field, DirectSolve, LinearSystem};
    use crate::{BoundaryCondition, LaplaceSolver, Lattice, Side, StrError};
    use russell_lab::{mat_approx_eq, vec_approx_eq, Matrix, Vector};
    use russell_sparse::{CooMatrix, Genie};

    #[test]
    fn build_1d_works() {
        let lat = Lattice::new_1d(4, 1.0).unwrap();
        let bc = BoundaryCondition::two_point(3.0, -1.0);
        let system = LinearSystem::new(&lat, &bc).unwrap();
        assert_eq!(system.interior, &[1, 2]);
        #[rustfmt::skip]
        let aa_correct = Matrix::from(&[
            [ 2.0, -1.0],
            [-1.0,  2.0],
        ]);
        mat_approx_eq(&system.aa.as_dense(), &aa_correct, 1e-15);
        vec_approx_eq(system.bb.as_data(), &[3.0, -1.0], 1e-15);
    }

    #[test]
    fn build_2d_works() {
        let lat = Lattice::new_2d(4, 4, 3.0, 3.0).unwrap();
        let mut bc = BoundaryCondition::new();
        bc.set_constant(Side::Left, 1.0)
            .set_constant(Side::Right, 1.0)
            .set_constant(Side::Bottom, 1.0)
            .set_constant(Side::Top, 1.0);
        let system = LinearSystem::new(&lat, &bc).unwrap();
        assert_eq!(system.interior, &[5, 6, 9, 10]);
        let ___ = 0.0;
        #[rustfmt::skip]
        let aa_correct = Matrix::from(&[
            [ 4.0, -1.0, -1.0,  ___],
            [-1.0,  4.0,  ___, -1.0],
            [-1.0,  ___,  4.0, -1.0],
            [ ___, -1.0, -1.0,  4.0],
        ]);
        mat_approx_eq(&system.aa.as_dense(), &aa_correct, 1e-15);
        // each interior node touches exactly two boundary nodes
        vec_approx_eq(system.bb.as_data(), &[2.0, 2.0, 2.0, 2.0], 1e-15);
    }

    #[test]
    fn build_fails_without_interior() {
        let lat = Lattice::new_1d(2, 1.0).unwrap();
        let bc = BoundaryCondition::two_point(1.0, 2.0);
        assert_eq!(
            LinearSystem::new(&lat, &bc).err(),
            Some("lattice has no interior points")
        );
    }

    #[test]
    fn solve_1d_works() -> Result<(), StrError> {
        let lat = Lattice::new_1d(4, 1.0).unwrap();
        let bc = BoundaryCondition::two_point(3.0, -1.0);
        let system = LinearSystem::new(&lat, &bc)?;
        let x = system.solve(Genie::Umfpack)?;
        vec_approx_eq(x.as_data(), &[5.0 / 3.0, 1.0 / 3.0], 1e-14);
        Ok(())
    }

    #[test]
    fn solve_reports_singular_matrix() {
        let mut aa = CooMatrix::new(2, 2, 4, None, false).unwrap();
        aa.put(0, 0, 1.0).unwrap();
        aa.put(0, 1, 1.0).unwrap();
        aa.put(1, 0, 1.0).unwrap();
        aa.put(1, 1, 1.0).unwrap();
        let system = LinearSystem {
            aa,
            bb: Vector::from(&[1.0, 2.0]),
            interior: vec![1, 2],
        };
        assert!(system.solve(Genie::Umfpack).is_err());
    }

    #[test]
    fn to_field_works() -> Result<(), StrError> {
        let lat = Lattice::new_1d(4, 1.0).unwrap();
        let bc = BoundaryCondition::two_point(3.0, -1.0);
        let solved = Vector::from(&[5.0 / 3.0, 1.0 / 3.0]);
        let field = to_field(&lat, &bc, &solved)?;
        assert_eq!(field.get(0), 3.0);
        assert_eq!(field.get(1), 5.0 / 3.0);
        assert_eq!(field.get(2), 1.0 / 3.0);
        assert_eq!(field.get(3), -1.0);
        Ok(())
    }

    #[test]
    fn to_field_fails_on_wrong_length() {
        let lat = Lattice::new_1d(4, 1.0).unwrap();
        let bc = BoundaryCondition::two_point(3.0, -1.0);
        let solved = Vector::new(3);
        assert_eq!(
            to_field(&lat, &bc, &solved).err(),
            Some("solved vector length must match the number of interior points")
        );
    }

    #[test]
    fn direct_solve_handles_boundary_only_lattice() {
        let lat = Lattice::new_1d(2, 1.0).unwrap();
        let bc = BoundaryCondition::two_point(1.0, 2.0);
        let field = DirectSolve::new().compute(&lat, &bc).unwrap();
        assert_eq!(field.get(0), 1.0);
        assert_eq!(field.get(1), 2.0);
    }
}
