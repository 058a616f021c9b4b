use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use exprevolve::config::ConfigManager;
use exprevolve::engines::evaluation::evaluate;
use exprevolve::engines::generation::{parse, render, ConsoleProgressCallback, EvolutionEngine};

#[derive(Parser)]
#[command(name = "exprevolve", about = "Evolve digit/operator sequences that hit a target number")]
struct Cli {
    /// TOML configuration file; EXPREVOLVE_* variables override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the genetic search
    Run {
        #[arg(long, allow_negative_numbers = true)]
        target: Option<f64>,
        #[arg(long)]
        dna_size: Option<usize>,
        #[arg(long)]
        population_size: Option<usize>,
        #[arg(long)]
        generations: Option<usize>,
        #[arg(long)]
        mutation_chance: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a token expression, e.g. `eval 1 + 2 - 5 '*' 2`
    Eval {
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Write the default configuration as TOML
    InitConfig { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut manager = ConfigManager::load(cli.config.as_deref()).context("Failed to load configuration")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(manager.get().output.log_level),
    )
    .init();

    match cli.command {
        Commands::Run {
            target,
            dna_size,
            population_size,
            generations,
            mutation_chance,
            seed,
            json,
        } => {
            manager
                .update(|c| {
                    let evo = &mut c.evolution;
                    evo.target = target.unwrap_or(evo.target);
                    evo.dna_size = dna_size.unwrap_or(evo.dna_size);
                    evo.population_size = population_size.unwrap_or(evo.population_size);
                    evo.generations = generations.unwrap_or(evo.generations);
                    evo.mutation_chance = mutation_chance.unwrap_or(evo.mutation_chance);
                    evo.seed = seed.or(evo.seed);
                })
                .context("Invalid run parameters")?;

            let config = manager.get();
            log::info!(
                "Searching for {} with {} genes, population {}, up to {} generations, mutation 1/{}",
                config.evolution.target,
                config.evolution.dna_size,
                config.evolution.population_size,
                config.evolution.generations,
                config.evolution.mutation_chance
            );

            let mut callback = ConsoleProgressCallback::new(config.output.report_interval);
            let outcome = EvolutionEngine::new(config.evolution).run(&mut callback)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("Best: {}", outcome.expression);
                println!("Value: {}", outcome.value);
                println!(
                    "Fitness: {} after {} generation(s){}",
                    outcome.fitness,
                    outcome.generations_run,
                    if outcome.solved { " (exact)" } else { "" }
                );
            }
        }
        Commands::Eval { tokens } => {
            let dna = parse(&tokens.join(" ")).context("Failed to parse expression")?;
            println!("{} = {}", render(&dna), evaluate(&dna));
        }
        Commands::InitConfig { path } => {
            ConfigManager::new()
                .save_to_file(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}
