// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! hull-bound: normalized lower bound on expected edit distance for n in a range.

use anyhow::{Context, Result};
use clap::Parser;
use hull_bound::config::{
    CountingConfig, EndingDeletionRange, DEFAULT_ALPHABET_SIZE, DEFAULT_N_MAX, DEFAULT_N_MIN,
    SELF_TEST_N,
};
use hull_bound::context::CountingContext;
use hull_bound::counting::{bound, BoundResult};
use hull_bound::validation::run_self_tests;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "hull-bound")]
#[command(version)]
#[command(about = "Lower bound on the hulls of edit distance, normalized by n·Σ^n")]
struct Cli {
    /// Largest string length
    #[arg(default_value_t = DEFAULT_N_MAX)]
    n_max: u32,

    /// 0 prints one line per n, 1 adds the hull table and debug logs, 2 adds trace logs
    #[arg(default_value_t = 0)]
    verbosity: u8,

    /// Smallest string length
    #[arg(default_value_t = DEFAULT_N_MIN)]
    n_min: u32,

    /// Run the self-validation suite and exit
    #[arg(long)]
    test: bool,

    /// Alphabet size Σ
    #[arg(long, default_value_t = DEFAULT_ALPHABET_SIZE)]
    sigma: u32,

    /// Sum ending deletions over 1..=D̄ instead of 0..D̄
    #[arg(long)]
    inclusive_ending_deletion: bool,
}

fn setup_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

/// `{: .12}`: twelve decimals, a space where a minus sign would go.
fn format_ratio(value: f64) -> String {
    if value.is_sign_negative() {
        format!("{:.12}", value)
    } else {
        format!(" {:.12}", value)
    }
}

fn print_hulls(result: &BoundResult) {
    println!("  r\tS_r\n----------------");
    for entry in &result.hulls {
        println!("  {}\t{}", entry.radius, entry.cumulative);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbosity)?;

    let range = if cli.inclusive_ending_deletion {
        EndingDeletionRange::Inclusive
    } else {
        EndingDeletionRange::Literal
    };
    let config = CountingConfig::new(cli.sigma).with_ending_deletion(range);

    if cli.test {
        let report = run_self_tests(config, SELF_TEST_N).context("Self-validation failed")?;
        print!("{}", report);
        return Ok(());
    }

    let ctx = CountingContext::new(config, cli.n_max + 1)
        .with_context(|| format!("Invalid configuration for n_max = {}", cli.n_max))?;

    for n in cli.n_min..=cli.n_max {
        let result = bound(&ctx, n).with_context(|| format!("Bound failed for n = {}", n))?;
        if cli.verbosity > 0 {
            print_hulls(&result);
        }
        println!(
            "{}\t{}\t{}",
            n,
            format_ratio(result.normalized(ctx.alphabet_size())),
            result.saturation_radius
        );
    }
    Ok(())
}
