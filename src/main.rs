use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;

use crossfill::{render_grid, solve, GridConfig, Inference, SolveFailure, SolverConfig, WordList};

/// Fill a crossword structure with words from a dictionary.
#[derive(Parser, Debug)]
#[command(name = "crossfill")]
struct Cli {
    /// Structure file: `_` marks an open cell, anything else a block
    structure: PathBuf,

    /// Dictionary file, one word per line
    words: PathBuf,

    /// Also write the filled grid to this file
    output: Option<PathBuf>,

    /// Skip arc consistency after each assignment and rely on plain backtracking
    #[arg(long)]
    no_inference: bool,

    /// Give up after this many backtracks
    #[arg(long, value_name = "N")]
    max_backtracks: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let structure = fs::read_to_string(&cli.structure)
        .with_context(|| format!("failed to read structure {}", cli.structure.display()))?;
    let words = fs::read_to_string(&cli.words)
        .with_context(|| format!("failed to read words {}", cli.words.display()))?;

    let config = GridConfig::from_structure_str(&structure)
        .with_context(|| format!("invalid structure {}", cli.structure.display()))?;
    let word_list = WordList::from_lines(&words);
    info!("{} variables, {} words", config.variable_count(), word_list.len());

    let settings = SolverConfig {
        inference: if cli.no_inference { Inference::None } else { Inference::ArcConsistency },
        max_backtracks: cli.max_backtracks,
    };

    let solution = match solve(&config, &word_list, settings) {
        Ok(solution) => solution,
        Err(SolveFailure::BacktrackLimitReached) => {
            println!("No solution found within the backtrack limit.");
            return Ok(());
        }
        Err(failure) => {
            info!("{}", failure);
            println!("No solution.");
            return Ok(());
        }
    };

    let display_grid = render_grid(&config, &word_list, &solution.assignment.choices());
    info!("{:?}", solution.statistics);
    println!("{}", display_grid);

    if let Some(output) = &cli.output {
        fs::write(output, format!("{}\n", display_grid))
            .with_context(|| format!("failed to write {}", output.display()))?;
    }

    Ok(())
}
