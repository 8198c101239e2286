//! Mastermind Solver - CLI
//!
//! Mastermind codebreaker with TUI and CLI modes using exact minimax guess selection.
//! Classic 6×4 games finish in at most 5 guesses.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use mastermind_minimax::{
    commands::{
        SolveConfig, analyze_code, print_test_all_statistics, run_benchmark, run_simple,
        run_test_all, solve_code,
    },
    core::Rules,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{GuessPool, Opening, Solver, SolverConfig, Universe},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind solver using exact minimax guess selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of peg colours
    #[arg(short, long, global = true, default_value = "6")]
    colours: usize,

    /// Number of pegs in a code
    #[arg(short = 'k', long, global = true, default_value = "4")]
    cells: usize,

    /// Seed for tie-breaking and random games (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Guess pool: full (default) or consistent
    #[arg(short, long, global = true, default_value = "full")]
    pool: String,

    /// Opening: minimax (default) or random
    #[arg(short, long, global = true, default_value = "minimax")]
    opening: String,

    /// Evaluate guesses on a single thread
    #[arg(long, global = true)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a specific hidden code
    Solve {
        /// The hidden code, e.g. 1234 or "blue green orange pink"
        code: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess partitions the universe
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Play many games against random hidden codes
    Benchmark {
        /// Number of random games
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Give up on a game after this many turns
        #[arg(short = 't', long, default_value = "10")]
        max_turns: usize,
    },

    /// Test solver on ALL possible codes
    TestAll {
        /// Limit number of codes to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Give up on a game after this many turns
        #[arg(short = 't', long, default_value = "10")]
        max_turns: usize,
    },
}

fn solver_config(cli: &Cli) -> Result<SolverConfig> {
    let pool = GuessPool::from_name(&cli.pool)
        .ok_or_else(|| anyhow!("Unknown guess pool '{}': use full or consistent", cli.pool))?;
    let opening = Opening::from_name(&cli.opening)
        .ok_or_else(|| anyhow!("Unknown opening '{}': use minimax or random", cli.opening))?;

    Ok(SolverConfig {
        pool,
        opening,
        parallel: !cli.sequential,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = Rules::new(cli.colours, cli.cells).context("Invalid game rules")?;
    let config = solver_config(&cli)?;

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    let universe = Universe::shuffled(rules, &mut rng);
    let solver = Solver::new(&universe, config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if !matches!(command, Commands::Play) {
        println!(
            "Rules: {rules} | {} codes | pool: {} | opening: {} | seed: {seed}",
            universe.len(),
            config.pool.name(),
            config.opening.name()
        );
    }

    match command {
        Commands::Play => run_play_command(solver),
        Commands::Simple => run_simple(&solver).map_err(|e| anyhow!(e)),
        Commands::Solve { code, verbose } => run_solve_command(&code, verbose, &solver),
        Commands::Analyze { code } => run_analyze_command(&code, &solver),
        Commands::Benchmark { count, max_turns } => {
            run_benchmark_command(count, max_turns, &solver, &mut rng)
        }
        Commands::TestAll { limit, max_turns } => {
            run_test_all_command(limit, max_turns, &solver);
            Ok(())
        }
    }
}

fn run_solve_command(code: &str, verbose: bool, solver: &Solver) -> Result<()> {
    let config = SolveConfig::new(code.to_string());
    let result = solve_code(config, solver).map_err(|e| anyhow!(e))?;

    print_solve_result(&result, solver.rules(), verbose);
    Ok(())
}

fn run_analyze_command(code: &str, solver: &Solver) -> Result<()> {
    let result =
        analyze_code(code, solver, solver.universe().codes()).map_err(|e| anyhow!(e))?;
    print_analysis_result(&result, solver.rules());
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    max_turns: usize,
    solver: &Solver,
    rng: &mut StdRng,
) -> Result<()> {
    if count == 0 {
        bail!("Benchmark needs at least one game");
    }

    println!("Running benchmark on {count} random codes...");

    let result = run_benchmark(solver, count, max_turns, rng, true);
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(limit: Option<usize>, max_turns: usize, solver: &Solver) {
    println!("\n{}", "═".repeat(70));
    println!(" Exhaustive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} possible codes", solver.universe().len());
    println!();

    let stats = run_test_all(solver, limit, max_turns, true);
    print_test_all_statistics(&stats);
}

fn run_play_command(solver: Solver) -> Result<()> {
    use mastermind_minimax::interactive::{App, run_tui};

    let app = App::new(solver);
    run_tui(app)
}
