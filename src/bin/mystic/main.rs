#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::process;

use anyhow::Result;
use itertools::Itertools;
use log::info;
use mystic::scenario::Scenario;
use mystic::search::{solve, Path, SolveResult, Strategy};

use crate::options::{Options, Source};

mod options;

/// exit status when the target cannot be reached
const NO_PATH_EXIT_CODE: i32 = 2;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    match options.source() {
        Source::Difficulty(difficulty) => info!("Solving the {} puzzle", difficulty),
        Source::Layout { .. } => info!("Solving the given layouts"),
    }
    let scenario = options.source().scenario()?;
    let solved = if options.compare() {
        compare(&scenario)?
    } else {
        run(&scenario, options.strategy())?
    };
    if !solved {
        process::exit(NO_PATH_EXIT_CODE);
    }
    Ok(())
}

fn run(scenario: &Scenario, strategy: Strategy) -> Result<bool> {
    info!("Using {}", strategy);
    let result = solve(&scenario.initial, &scenario.target, strategy)?;
    match result.solved() {
        Some(solution) => {
            print_path(&solution.path);
            println!(
                "Solved in {} moves ({} states expanded): {}",
                solution.path.moves(),
                solution.expanded,
                solution.path.directions().iter().join(", ")
            );
        }
        None => println!("No Path"),
    }
    Ok(result.is_solved())
}

fn compare(scenario: &Scenario) -> Result<bool> {
    let mut solved = true;
    for &strategy in Strategy::ALL.iter() {
        match solve(&scenario.initial, &scenario.target, strategy)? {
            SolveResult::Solved(solution) => println!(
                "{:<8} {:>3} moves {:>7} expanded",
                strategy,
                solution.path.moves(),
                solution.expanded
            ),
            SolveResult::NoPath => {
                println!("{:<8} no path", strategy);
                solved = false;
            }
        }
    }
    Ok(solved)
}

fn print_path(path: &Path) {
    println!("START");
    for state in path.states() {
        println!("{}", state);
        println!();
    }
}
