//! Arenaboard CLI
//!
//! Command-line interface for Arenaboard operations:
//! - Render the dashboard or chart to a file
//! - Rebuild the dataset from monthly leaderboard snapshots
//! - Inspect a dataset
//! - Generate the default config

use arenaboard::chart::{render_svg, ChartConfig};
use arenaboard::leaderboard::{default_palette, Leaderboard};
use arenaboard::pipeline::MonthlyAggregator;
use arenaboard::view::{render_page, Metadata};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "arenaboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "LM Arena leaderboard trends")]
#[command(long_about = "Arenaboard renders the best LM Arena score per AI provider, month by month.\nRender the dashboard offline, rebuild the dataset from snapshots, or inspect it.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RenderFormat {
    /// Full dashboard document
    Html,
    /// Chart surface only
    Svg,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard
    Render {
        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: RenderFormat,
        /// Dataset CSV (default: built-in dataset)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the dataset from monthly_YYYY.MM.csv snapshots
    Aggregate {
        /// Directory holding the snapshots
        #[arg(short, long)]
        dir: PathBuf,
        /// Output CSV (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the dataset as a table
    Show {
        /// Dataset CSV (default: built-in dataset)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            format,
            input,
            output,
        } => {
            let board = load_board(input.as_deref())?;
            let chart = ChartConfig::default();

            let rendered = match format {
                RenderFormat::Html => render_page(&board, &chart, &Metadata::default()),
                RenderFormat::Svg => render_svg(&board, &chart),
            };

            write_output(output.as_deref(), &rendered)?;
        }

        Commands::Aggregate { dir, output } => {
            let report = MonthlyAggregator::default().aggregate_dir(&dir)?;

            for (path, reason) in &report.skipped {
                eprintln!("Skipped {}: {}", path.display(), reason);
            }
            eprintln!(
                "Aggregated {} months ({} skipped, {} values carried forward)",
                report.months_processed,
                report.skipped.len(),
                report.carried_forward
            );

            let csv = report.leaderboard.to_csv_string()?;
            write_output(output.as_deref(), &csv)?;
        }

        Commands::Show { input } => {
            let board = load_board(input.as_deref())?;
            print_table(&board);
        }

        Commands::Config { output } => {
            let config = arenaboard::config::generate_default_config();
            write_output(output.as_deref(), &config)?;
        }
    }

    Ok(())
}

fn load_board(input: Option<&Path>) -> Result<Leaderboard, Box<dyn std::error::Error>> {
    match input {
        Some(path) => Ok(Leaderboard::from_csv_path(path, default_palette())?),
        None => Ok(Leaderboard::builtin()),
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            eprintln!("Written to {:?}", path);
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

fn print_table(board: &Leaderboard) {
    if board.data().is_empty() {
        println!("No data");
        return;
    }

    let providers: Vec<&str> = board.palette().providers().collect();

    // Header
    print!("{:<12}", "Date");
    for provider in &providers {
        print!(" | {:<10}", provider);
    }
    println!();

    // Separator
    println!("{}", "-".repeat(12 + providers.len() * 13));

    // Data rows
    for point in board.data() {
        print!("{:<12}", point.date);
        for provider in &providers {
            let val = point
                .get(provider)
                .map(|v| format!("{:.0}", v))
                .unwrap_or_else(|| "-".to_string());
            print!(" | {:<10}", val);
        }
        println!();
    }
}
