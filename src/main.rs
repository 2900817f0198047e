use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ordset::OrdSet;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ordset", about = "Ordered-set exerciser and timing harness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Exercise every set operation and print the results.
    Demo,
    /// Run a fixed operation mixture and report wall-clock time.
    Workload {
        /// Number of insertions.
        #[arg(long, default_value_t = 7_500)]
        inserts: u64,
        /// Number of membership probes.
        #[arg(long, default_value_t = 15_000)]
        searches: u64,
        /// Number of closest-match probes.
        #[arg(long, default_value_t = 2_500)]
        closest: u64,
        /// Number of min/max reads.
        #[arg(long, default_value_t = 2_500)]
        extrema: u64,
        /// Number of range queries (each issues min and max in range).
        #[arg(long, default_value_t = 7_500)]
        ranges: u64,
        /// Number of successor/predecessor pairs.
        #[arg(long, default_value_t = 2_500)]
        order: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => run_demo()?,
        Commands::Workload {
            inserts,
            searches,
            closest,
            extrema,
            ranges,
            order,
        } => run_workload(inserts, searches, closest, extrema, ranges, order)?,
    }

    Ok(())
}

fn run_demo() -> Result<()> {
    let mut set = OrdSet::new();

    banner("Insert");
    for value in 0..10u64 {
        set.insert(value).context("insert failed")?;
        println!("after inserting {value}: {:?}", set.to_vec());
    }
    for value in (11..=20u64).rev() {
        set.insert(value).context("insert failed")?;
    }
    let mut base = 50u64;
    for step in 0..10u64 {
        set.insert(base + 3 * step).context("insert failed")?;
        base += step;
    }
    println!("full contents: {:?}", set.to_vec());

    banner("Search");
    for probe in (0..=100u64).step_by(5) {
        if set.contains(probe) {
            println!("found {probe}");
        } else {
            println!("couldn't find {probe}");
        }
    }
    for step in 0..10u64 {
        let probe = 3 * step + 15;
        match set.closest_match(probe) {
            Some(value) => println!("closest value to {probe} is {value}"),
            None => println!("no closest value to {probe} (set is empty)"),
        }
    }

    banner("Maximum/Minimum");
    println!("maximum is {:?}", set.max());
    println!("minimum is {:?}", set.min());
    println!("min in range 50 to 150 is {:?}", set.min_in_range(50, 150));
    println!("max in range 50 to 150 is {:?}", set.max_in_range(50, 150));
    // Inverted bounds are defined to come back empty.
    println!("min in range 150 to 50 is {:?}", set.min_in_range(150, 50));
    println!("max in range 150 to 50 is {:?}", set.max_in_range(150, 50));

    banner("Successor/Predecessor");
    let mut cursor = None;
    while let Some(value) = set.successor(cursor) {
        println!("successor of {cursor:?} is {value}");
        cursor = Some(value);
    }
    println!();
    let mut cursor = None;
    while let Some(value) = set.predecessor(cursor) {
        println!("predecessor of {cursor:?} is {value}");
        cursor = Some(value);
    }

    Ok(())
}

fn run_workload(
    inserts: u64,
    searches: u64,
    closest: u64,
    extrema: u64,
    ranges: u64,
    order: u64,
) -> Result<()> {
    let start = Instant::now();
    let mut set = OrdSet::new();

    // Ascending run for the first two thirds, descending for the rest,
    // so both rotation arms of the fixup get exercised.
    let phase = Instant::now();
    let ascending = inserts * 2 / 3;
    for value in 0..ascending {
        set.insert(value).context("insert failed")?;
    }
    for value in (ascending..inserts).rev() {
        set.insert(value).context("insert failed")?;
    }
    info!(elapsed = ?phase.elapsed(), count = inserts, "inserts done");

    let phase = Instant::now();
    let mut hits = 0u64;
    for probe in 0..searches {
        if set.contains(probe * 5 % (inserts * 2).max(1)) {
            hits += 1;
        }
    }
    info!(elapsed = ?phase.elapsed(), count = searches, hits, "searches done");

    let phase = Instant::now();
    for probe in 0..closest {
        let _ = set.closest_match(probe * 3);
    }
    info!(elapsed = ?phase.elapsed(), count = closest, "closest-match done");

    let phase = Instant::now();
    for _ in 0..extrema {
        let _ = set.max();
        let _ = set.min();
    }
    info!(elapsed = ?phase.elapsed(), count = extrema, "extrema done");

    let phase = Instant::now();
    for low in 0..ranges {
        let _ = set.min_in_range(low, 2 * low);
        let _ = set.max_in_range(low, 2 * low);
    }
    info!(elapsed = ?phase.elapsed(), count = ranges, "range queries done");

    let phase = Instant::now();
    let mut cursor = None;
    for _ in 0..order {
        cursor = set.predecessor(cursor);
        cursor = set.successor(cursor);
    }
    info!(elapsed = ?phase.elapsed(), count = order, "order queries done");

    println!(
        "performed {} operations over {} elements in {:.3} seconds",
        inserts + searches + closest + 2 * extrema + 2 * ranges + 2 * order,
        set.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn banner(title: &str) {
    println!("{:*<74}", "");
    println!("{title} Test");
    println!("{:*<74}", "");
}
