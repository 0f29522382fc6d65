use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{GameConfig, GameEngine};
use grid_snake::logging;
use grid_snake::modes::HumanMode;
use grid_snake::storage::{FileScoreStore, MemoryScoreStore, ScoreStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a square grid, played in the terminal")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per side of the grid
    #[arg(long)]
    grid_size: Option<usize>,

    /// Where the best score is kept
    #[arg(long, default_value = "best_score.json")]
    best_score_file: PathBuf,

    /// Keep the best score in memory only
    #[arg(long)]
    no_persist: bool,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }

    fn score_store(&self) -> Box<dyn ScoreStore> {
        if self.no_persist {
            Box::new(MemoryScoreStore::new())
        } else {
            Box::new(FileScoreStore::new(&self.best_score_file))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    tracing::info!(?config, "starting");

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };

    let mut human_mode = HumanMode::new(engine, cli.score_store());
    human_mode.run().await?;

    Ok(())
}
