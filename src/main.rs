//! Command-line driver: compares genetic search against random sampling on
//! one synthetic map.

use clap::Parser;
use salesman_ga::error::SalesmanError;
use salesman_ga::ga::GaConfig;
use salesman_ga::map::SalesmanMap;
use salesman_ga::random::rng_from_option;
use salesman_ga::random_search::RandomConfig;
use salesman_ga::report::{ranking, summarize, Summary};
use salesman_ga::trials::{run_trials, TrialKind, TrialPlan};
use std::process::ExitCode;
use tracing::Level;

/// Tests how genetic-algorithm parameters affect traveling-salesman results,
/// contrasting them with random sampling.
#[derive(Parser, Debug)]
#[command(name = "salesman", version)]
struct Args {
    /// Number of genetic trials
    #[arg(short = 'G', long, default_value_t = 10)]
    genetic_trials: usize,

    /// Number of random-sampling trials
    #[arg(short = 'R', long, default_value_t = 10)]
    random_trials: usize,

    /// Map height
    #[arg(short = 'H', long, default_value_t = 15)]
    height: usize,

    /// Map width
    #[arg(short = 'w', long, default_value_t = 100)]
    width: usize,

    /// Number of sites the salesman must visit
    #[arg(short = 's', long, default_value_t = 25)]
    sites: usize,

    /// Individuals per generation
    #[arg(short = 'p', long, default_value_t = 25)]
    population: usize,

    /// Generations per run
    #[arg(short = 'g', long, default_value_t = 200)]
    generations: usize,

    /// Fraction of each generation that survives to mate (0.0 - 1.0)
    #[arg(short = 'm', long, default_value_t = 0.10)]
    mate_percentage: f64,

    /// Chance of switching parents after each position (0.0 - 1.0)
    #[arg(short = 'c', long, default_value_t = 0.3)]
    crossover_rate: f64,

    /// Per-position mutation rate (0.0 - 1.0)
    #[arg(short = 'u', long, default_value_t = 0.05)]
    mutation_rate: f64,

    /// Carry the best solution of each generation into the next
    #[arg(short = 'e', long, default_value_t = true, action = clap::ArgAction::Set)]
    elitism: bool,

    /// Print the best solution of every generation
    #[arg(short = 'P', long, default_value_t = false)]
    print_generations: bool,

    /// Base seed; map and trials become reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Log debug events
    #[arg(short = 'v', long, default_value_t = false)]
    verbose: bool,
}

const EXIT_UNKNOWN: u8 = 1;
const EXIT_INVALID_VALUE: u8 = 3;

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else if args.print_generations {
        Level::INFO
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            if e.is_configuration() {
                ExitCode::from(EXIT_INVALID_VALUE)
            } else {
                ExitCode::from(EXIT_UNKNOWN)
            }
        }
    }
}

fn run(args: &Args) -> Result<(), SalesmanError> {
    let mut rng = rng_from_option(args.seed);
    let map = SalesmanMap::generate(args.sites, args.height, args.width, &mut rng)?;

    let plan = TrialPlan {
        // Raw fields rather than the clamping builders, so out-of-range
        // rates are reported instead of silently corrected.
        genetic: GaConfig {
            population_size: args.population,
            mate_percentage: args.mate_percentage,
            generations: args.generations,
            elitism: args.elitism,
            crossover_rate: args.crossover_rate,
            mutation_rate: args.mutation_rate,
            seed: None,
            log_generations: args.print_generations,
        },
        random: RandomConfig::default()
            .with_population_size(args.population)
            .with_generations(args.generations)
            .with_log_generations(args.print_generations),
        genetic_trials: args.genetic_trials,
        random_trials: args.random_trials,
        base_seed: args.seed.map(|s| s.wrapping_add(1)),
    };

    println!();
    println!(
        "DESCRIPTION: The salesman must visit all {} sites. We want an itinerary that is as short as possible, contrasting a genetic algorithm with random sampling.",
        args.sites
    );
    println!();
    println!("The salesman starts at point 'a' on the following map:");
    println!("{map}");

    let outcomes = run_trials(&map, &plan)?;

    for o in outcomes.iter() {
        let total = match o.kind {
            TrialKind::Genetic => plan.genetic_trials,
            TrialKind::Random => plan.random_trials,
        };
        println!(
            "{} #{} of {}: after {} generations, shortest distance {} ({})",
            o.kind,
            o.index + 1,
            total,
            args.generations,
            o.distance,
            o.best
        );
    }

    println!();
    println!("--- Rankings of distances ---");
    for (i, o) in ranking(&outcomes).iter().enumerate() {
        println!("    {}: {} ({})", i + 1, o.distance, o.kind);
    }

    let (genetic, random) = summarize(&outcomes);
    print_summary("genetic algorithm", genetic);
    print_summary("random sampling", random);
    println!();
    Ok(())
}

fn print_summary(name: &str, summary: Option<Summary>) {
    let Some(s) = summary else {
        return;
    };
    println!();
    println!("--- Statistics for {name} distances ---");
    println!("    * Average: {}", s.mean);
    println!("    * Median: {}", s.median);
    println!("    * Standard deviation: {}", s.std_dev);
    println!("    * Best: {}", s.min);
    println!("    * Worst: {}", s.max);
}
