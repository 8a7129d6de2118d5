use laplace_fdm::{trace_summary, BoundaryCondition, EdgeProfile, Lattice, Relaxation, Side, StrError};
use plotpy::{Curve, Plot};
use rayon::prelude::*;
use russell_lab::Stopwatch;
use std::f64::consts::PI;
use structopt::StructOpt;

// Measures how many relaxation passes are needed to converge as the lattice
// is refined. The lattices are independent of each other, so the sweep runs
// the solves in parallel; each solve itself is single-threaded.

#[derive(StructOpt)]
struct Options {
    #[structopt(long, default_value = "1e-8")]
    tolerance: f64,

    #[structopt(long, default_value = "200000")]
    max_passes: usize,

    #[structopt(long)]
    plot: bool,
}

const SIZES: &[usize] = &[5, 9, 17, 33, 65];

fn passes_to_converge(n: usize, max_passes: usize, tolerance: f64) -> Result<usize, StrError> {
    let lattice = Lattice::new_2d(n, n, 1.0, 1.0)?;
    let mut bc = BoundaryCondition::new();
    bc.set_homogeneous()
        .set(Side::Top, EdgeProfile::from_fn(|x| f64::sin(PI * x)));
    let field = bc.apply(&lattice)?;
    let (_, trace) = Relaxation::new(max_passes, tolerance).run(&lattice, field);
    Ok(trace_summary(&trace).passes)
}

fn main() -> Result<(), StrError> {
    // parse command line arguments
    let opt = Options::from_args();

    // start stopwatch
    let mut stopwatch = Stopwatch::new("");

    // sweep the lattice sizes in parallel
    let results: Vec<usize> = SIZES
        .par_iter()
        .map(|&n| passes_to_converge(n, opt.max_passes, opt.tolerance))
        .collect::<Result<Vec<_>, _>>()?;

    // report: finer lattices need more passes
    for (n, passes) in SIZES.iter().zip(&results) {
        println!("n = {:>3}  passes = {:>6}", n, passes);
    }

    // plot passes versus lattice size
    if opt.plot {
        let xx: Vec<f64> = SIZES.iter().map(|&n| n as f64).collect();
        let yy: Vec<f64> = results.iter().map(|&p| p as f64).collect();
        let mut curve = Curve::new();
        curve.draw(&xx, &yy);
        let mut plot = Plot::new();
        plot.add(&curve)
            .grid_and_labels("lattice points per side", "passes to convergence");
        plot.save("/tmp/laplace_fdm/convergence_sweep.svg")?;
    }

    // message
    stopwatch.stop();
    println!("elapsed time = {}", stopwatch);
    Ok(())
}
