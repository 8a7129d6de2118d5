use laplace_fdm::{
    max_difference, trace_summary, BoundaryCondition, DirectSolve, EdgeProfile, LaplaceSolver, Lattice, Relaxation,
    Side, StrError,
};
use plotpy::{Contour, Plot};
use russell_lab::{generate2d, Matrix, Stopwatch};
use russell_sparse::Genie;
use std::f64::consts::PI;
use structopt::StructOpt;

// Solves the discrete Laplace equation on the unit square with three
// grounded sides and a sine profile on the top edge:
//
//   ∂²V   ∂²V
//   ——— + ——— = 0,    V = sin(π x) on the top edge, V = 0 elsewhere
//   ∂x²   ∂y²
//
// The sine profile vanishes at both upper corners, so the edge data agree
// where they meet. Both engines are run and compared; the direct solution
// is also checked against the discrete averaging property.

#[derive(StructOpt)]
struct Options {
    #[structopt(default_value = "17")]
    nx: usize,

    #[structopt(long, default_value = "20000")]
    max_passes: usize,

    #[structopt(long, default_value = "1e-8")]
    tolerance: f64,

    #[structopt(long, default_value = "Umfpack")]
    genie: String,

    #[structopt(long)]
    plot: bool,
}

fn matrix_to_rows(mat: &Matrix) -> Vec<Vec<f64>> {
    let (nrow, ncol) = mat.dims();
    (0..nrow).map(|i| (0..ncol).map(|j| mat.get(i, j)).collect()).collect()
}

fn main() -> Result<(), StrError> {
    // parse command line arguments
    let opt = Options::from_args();
    let genie = Genie::from(&opt.genie);

    // start stopwatch
    let mut stopwatch = Stopwatch::new("");

    // lattice and boundary condition
    let lattice = Lattice::new_2d(opt.nx, opt.nx, 1.0, 1.0)?;
    let mut bc = BoundaryCondition::new();
    bc.set_homogeneous()
        .set(Side::Top, EdgeProfile::from_fn(|x| f64::sin(PI * x)));

    // iterative engine
    let field = bc.apply(&lattice)?;
    let (relaxed, trace) = Relaxation::new(opt.max_passes, opt.tolerance).run(&lattice, field);
    let summary = trace_summary(&trace);
    println!(
        "nx = {}, passes = {}, status = {:?}, final max-change = {:.2e}",
        opt.nx,
        summary.passes,
        summary.status,
        summary.final_max_change.unwrap_or(f64::NAN)
    );

    // direct engine
    let exact = DirectSolve { genie }.compute(&lattice, &bc)?;
    println!("max difference between engines = {:.2e}", max_difference(&relaxed, &exact)?);

    // residual of the averaging property at the interior nodes
    let mut res_max = 0.0;
    for i in lattice.interior_indices() {
        let mut sum = 0.0;
        for j in lattice.neighbors(i) {
            sum += exact.get(j);
        }
        let res = f64::abs(exact.get(i) - sum / 4.0);
        if res > res_max {
            res_max = res;
        }
    }
    println!("max averaging residual (direct) = {:.2e}", res_max);

    // contour plot of the relaxed potential
    if opt.plot {
        let (xx, yy) = generate2d(0.0, 1.0, 0.0, 1.0, opt.nx, opt.nx);
        let mut contour = Contour::new();
        contour.draw(&matrix_to_rows(&xx), &matrix_to_rows(&yy), &relaxed.grid_values());
        let mut plot = Plot::new();
        plot.add(&contour).grid_and_labels("x", "y");
        plot.save("/tmp/laplace_fdm/laplace_2d_sine.svg")?;
    }

    // message
    stopwatch.stop();
    println!("elapsed time = {}", stopwatch);
    Ok(())
}
