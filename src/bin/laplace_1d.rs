use laplace_fdm::{
    max_difference, to_field, trace_summary, BoundaryCondition, Lattice, LinearSystem, Relaxation, StrError,
};
use plotpy::{Curve, Plot};
use russell_lab::Stopwatch;
use russell_sparse::Genie;
use structopt::StructOpt;

// Solves the discrete Laplace equation on a segment with fixed endpoint
// values, using both engines:
//
//   d²V
//   ——— = 0,    V(0) = left,    V(lx) = right
//   dx²
//
// The solution is the straight line between the two endpoint values, which
// makes this a convenient cross-check for both engines.

#[derive(StructOpt)]
struct Options {
    #[structopt(default_value = "21")]
    npoint: usize,

    #[structopt(long, default_value = "1.0")]
    left: f64,

    #[structopt(long, default_value = "-1.0")]
    right: f64,

    #[structopt(long, default_value = "10000")]
    max_passes: usize,

    #[structopt(long, default_value = "1e-10")]
    tolerance: f64,

    #[structopt(long, default_value = "Umfpack")]
    genie: String,

    #[structopt(long)]
    plot: bool,
}

fn main() -> Result<(), StrError> {
    // parse command line arguments
    let opt = Options::from_args();
    let genie = Genie::from(&opt.genie);

    // start stopwatch
    let mut stopwatch = Stopwatch::new("");

    // lattice and boundary condition
    let lattice = Lattice::new_1d(opt.npoint, 1.0)?;
    let bc = BoundaryCondition::two_point(opt.left, opt.right);

    // iterative engine
    let field = bc.apply(&lattice)?;
    let (relaxed, trace) = Relaxation::new(opt.max_passes, opt.tolerance).run(&lattice, field);
    let summary = trace_summary(&trace);
    println!(
        "npoint = {}, passes = {}, status = {:?}",
        opt.npoint, summary.passes, summary.status
    );

    // direct engine
    let system = LinearSystem::new(&lattice, &bc)?;
    let solved = system.solve(genie)?;
    let exact = to_field(&lattice, &bc, &solved)?;
    println!("max difference between engines = {:.2e}", max_difference(&relaxed, &exact)?);

    // compare against the closed-form linear interpolation
    let mut err_max = 0.0;
    lattice.loop_over_grid_points(|i, x, _| {
        let ana = opt.left + (opt.right - opt.left) * x / lattice.lx();
        let err = f64::abs(exact.get(i) - ana);
        if err > err_max {
            err_max = err;
        }
    });
    println!("max error vs linear interpolation = {:.2e}", err_max);

    // plot the relaxed potential
    if opt.plot {
        let xx: Vec<f64> = (0..lattice.dim()).map(|i| lattice.coordinates(i).0).collect();
        let vv: Vec<f64> = (0..lattice.dim()).map(|i| relaxed.get(i)).collect();
        let mut curve = Curve::new();
        curve.set_label("relaxation");
        curve.draw(&xx, &vv);
        let mut plot = Plot::new();
        plot.add(&curve).grid_and_labels("x", "V(x)").legend();
        plot.save("/tmp/laplace_fdm/laplace_1d.svg")?;
    }

    // message
    stopwatch.stop();
    println!("elapsed time = {}", stopwatch);
    Ok(())
}
