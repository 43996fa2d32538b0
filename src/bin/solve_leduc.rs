//! Leduc-style poker solver binary.
//!
//! Usage:
//!   cargo run --release --bin solve_leduc -- [OPTIONS]
//!
//! Options:
//!   --config <FILE>      Game configuration JSON file (optional)
//!   --iterations <N>     Iterations (default: 10000)
//!   --seed <N>           Sample the public card once with this seed
//!   --output <FILE>      Also write the report as JSON
//!   --kuhn               Solve the Kuhn poker preset
//!
//! Set `RUST_LOG=debug` for the expected-value trace.

use std::env;
use std::process;

use indicatif::{ProgressBar, ProgressStyle};

use leduc_cfr::cfr::{CFRConfig, CFRSolver};
use leduc_cfr::games::leduc::{GameConfig, LeducPoker, PublicCard, SolveReport};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    let mut config_file: Option<String> = None;
    let mut iterations: Option<u64> = None;
    let mut seed: Option<u64> = None;
    let mut output_file: Option<String> = None;
    let mut kuhn = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            }
            "--iterations" | "-i" => {
                i += 1;
                if i < args.len() {
                    iterations = args[i].parse().ok();
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = Some(args[i].clone());
                }
            }
            "--kuhn" => {
                kuhn = true;
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                process::exit(2);
            }
        }
        i += 1;
    }

    let mut config = if let Some(path) = &config_file {
        match GameConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(1);
            }
        }
    } else if kuhn {
        GameConfig::kuhn()
    } else {
        GameConfig::default()
    };
    if let Some(seed) = seed {
        config.public_card = PublicCard::Sampled { seed };
    }

    let game = match LeducPoker::new(config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Invalid game: {}", e);
            process::exit(1);
        }
    };

    let mut solver_config = CFRConfig::default();
    if let Some(n) = iterations {
        solver_config = solver_config.with_iterations(n);
    }
    if let Err(e) = solver_config.validate() {
        eprintln!("Invalid solver settings: {}", e);
        process::exit(1);
    }
    let total = solver_config.iterations;
    let mut solver = CFRSolver::new(game, solver_config);

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    let step = (total / 100).max(1);
    solver.train_with_callback(total, step, |stats| {
        pb.set_position(stats.iterations);
        pb.set_message(format!("ev {:+.4}", stats.expected_value));
    });
    pb.finish_and_clear();

    let report = match SolveReport::from_solver(&solver) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error collecting strategies: {}", e);
            process::exit(1);
        }
    };
    print!("{}", report.to_text());

    if let Some(path) = &output_file {
        if let Err(e) = report.save_json(path) {
            eprintln!("Error writing {}: {}", path, e);
            process::exit(1);
        }
        println!();
        println!("Report saved to: {}", path);
    }
}

fn print_help() {
    println!("Leduc-style poker CFR solver");
    println!();
    println!("Usage: solve_leduc [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config <FILE>      Game configuration JSON file");
    println!("  -i, --iterations <N>     Iterations (default: 10000)");
    println!("  -s, --seed <N>           Sample the public card once with this seed");
    println!("  -o, --output <FILE>      Also write the report as JSON");
    println!("      --kuhn               Solve the Kuhn poker preset");
    println!("  -h, --help               Show this help");
}
