// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! edit-scripts: sample optimal edit scripts and tabulate their paths.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hull_bound::config::DEFAULT_SCRIPT_ALPHABET;
use hull_bound::scripts::io::{
    read_scripts, write_distribution, write_matrix, write_scripts, write_vector,
};
use hull_bound::scripts::{
    horizontal_flow, operations_distribution, script_statistics, vertical_flow, EditScript,
    ScriptSampler,
};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "edit-scripts")]
#[command(version)]
#[command(about = "Optimal edit scripts between random strings, and their statistics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Tabulate a file of scripts for strings of length n
    Stats {
        /// Input scripts file, one per line
        input: PathBuf,

        /// Length of strings
        n: usize,

        /// Where the frequency matrix is saved
        #[arg(long, default_value = "matrix.txt")]
        matrix_file: PathBuf,

        /// Where the maximum oscillation vector is saved
        #[arg(long, default_value = "max.txt")]
        max_file: PathBuf,

        /// Where the distributions of operations are saved
        #[arg(long, default_value = "dist.txt")]
        dist_file: PathBuf,

        /// Print the flow of scripts into this column of the frequency matrix
        #[arg(long)]
        mat_row: Option<usize>,

        /// Print the flow of scripts into this row of the frequency matrix
        #[arg(long)]
        mat_col: Option<usize>,
    },

    /// Align random string pairs and print one optimal script per pair
    Generate {
        /// Length of strings
        n: usize,

        /// Number of string pairs
        samples: usize,

        #[arg(long, default_value = DEFAULT_SCRIPT_ALPHABET)]
        alphabet: String,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Write the scripts to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn print_flow(flow: &[u64]) {
    for (index, count) in flow.iter().enumerate() {
        println!("{}\t{}", index, count);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Stats {
            input,
            n,
            matrix_file,
            max_file,
            dist_file,
            mat_row,
            mat_col,
        } => {
            let scripts = read_scripts(&input)
                .with_context(|| format!("Failed to read scripts from {:?}", input))?;
            // the DP grid runs from (0, 0) to (n, n) inclusive
            let size = n + 1;

            let stats = script_statistics(size, &scripts)?;
            let dist = operations_distribution(size, &scripts)?;
            write_distribution(&dist_file, &dist)?;
            write_matrix(&matrix_file, &stats)?;
            write_vector(&max_file, stats.max_oscillation())?;
            info!(scripts = scripts.len(), size, "Statistics written");

            if let Some(r) = mat_row {
                print_flow(&horizontal_flow(size, &scripts, r)?);
            }
            if let Some(c) = mat_col {
                print_flow(&vertical_flow(size, &scripts, c)?);
            }
        }

        Commands::Generate {
            n,
            samples,
            alphabet,
            seed,
            output,
        } => {
            let mut sampler = ScriptSampler::new(&alphabet, seed)?;
            let scripts: Vec<EditScript> = (0..samples).map(|_| sampler.sample(n)).collect();
            match output {
                Some(path) => {
                    write_scripts(&path, &scripts)?;
                    info!(samples, path = %path.display(), "Scripts written");
                }
                None => {
                    for script in &scripts {
                        println!("{}", script);
                    }
                }
            }
        }
    }
    Ok(())
}
