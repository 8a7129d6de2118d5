use laplace_fdm::{
    max_difference, trace_summary, BoundaryCondition, DirectSolve, LaplaceSolver, Lattice, Relaxation, StrError,
};

// Solves the two-point boundary problem on a 4-point lattice
//
//   V0 --- V1 --- V2 --- V3
//  3.0      ?      ?    -1.0
//
// The exact solution is V1 = (2 V0 + V3)/3 and V2 = (V0 + 2 V3)/3.

fn main() -> Result<(), StrError> {
    let lattice = Lattice::new_1d(4, 1.0)?;
    let bc = BoundaryCondition::two_point(3.0, -1.0);

    let field = bc.apply(&lattice)?;
    let (relaxed, trace) = Relaxation::new(1_000, 1e-10).run(&lattice, field);
    let summary = trace_summary(&trace);
    println!(
        "relaxation: V1 = {:.6}, V2 = {:.6}  ({} passes, {:?})",
        relaxed.get(1),
        relaxed.get(2),
        summary.passes,
        summary.status
    );

    let exact = DirectSolve::new().compute(&lattice, &bc)?;
    println!("direct:     V1 = {:.6}, V2 = {:.6}", exact.get(1), exact.get(2));

    println!("max difference = {:.2e}", max_difference(&relaxed, &exact)?);
    Ok(())
}
