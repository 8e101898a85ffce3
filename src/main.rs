use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use dense_linalg::{Matrix, MatrixConfig, MatrixError};
use env_logger::Env;

/// Solve a square linear system given as an augmented matrix.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of equations; the augmented matrix has `rows + 1` columns
    #[arg(short, long, default_value_t = 2)]
    pub rows: usize,

    /// Row-major entries of the augmented matrix
    #[arg(
        short,
        long,
        num_args = 1..,
        allow_negative_numbers = true,
        default_values_t = [2.0, 3.0, 8.0, 1.0, 4.0, 7.0]
    )]
    pub values: Vec<f64>,

    #[arg(short, long, default_value_t = 0.00001)]
    pub zero_threshold: f64,

    #[arg(short = 'd', long, default_value_t = 2)]
    pub viewing_decimal: usize,
}

fn run(args: &Args) -> Result<()> {
    let config = MatrixConfig::new(args.zero_threshold, args.viewing_decimal);
    let mut augmented = Matrix::with_config(args.rows, args.rows + 1, config)?;
    augmented
        .assign_values(&args.values)
        .context("the values do not fill a rows x (rows + 1) matrix")?;
    log::info!("Augmented matrix:\n{augmented}");

    match augmented.solve() {
        Ok(variables) => {
            let mut solution = Matrix::with_config(variables.len(), 1, config)?;
            solution.assign_values(&variables)?;
            print!("{solution}");
            Ok(())
        }
        Err(MatrixError::Singular { determinant }) => {
            println!("The system has no unique solution (determinant {determinant})");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run(&args) {
        eprintln!("ran into solver error: {err:?}");
        process::exit(1)
    }
}
