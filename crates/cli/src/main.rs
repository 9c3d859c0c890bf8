use std::path::{Path, PathBuf};

use anyhow::Context;
use api_shared::ScheduleRes;
use clap::{Args, Parser, Subcommand};
use daycare_core::{
    fold_schedule, parse_csv, quarter::current_quarter_label, CoreConfig, ScheduleIngestor,
    SheetsCsvSource,
};

#[derive(Parser)]
#[command(name = "daycare")]
#[command(about = "Day-care weekly schedule CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rows of a CSV export as JSON
    Parse {
        /// Path to a CSV file exported from the schedule sheet
        file: PathBuf,
    },
    /// Fold a CSV export into the weekly schedule
    Schedule {
        /// Path to a CSV file exported from the schedule sheet
        file: PathBuf,
        #[command(flatten)]
        quarter: QuarterArgs,
    },
    /// Fetch the live schedule sheet using SHEETS_* environment settings
    Fetch {
        #[command(flatten)]
        quarter: QuarterArgs,
    },
    /// Print the current quarter label
    Quarter,
}

#[derive(Args)]
struct QuarterArgs {
    /// Quarter label, e.g. 2024-Q4 (default: every quarter)
    #[arg(long, conflicts_with = "current_quarter")]
    quarter: Option<String>,
    /// Use the quarter containing today's date
    #[arg(long)]
    current_quarter: bool,
}

impl QuarterArgs {
    fn resolve(&self) -> String {
        if self.current_quarter {
            current_quarter_label()
        } else {
            self.quarter.clone().unwrap_or_default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Parse { file }) => {
            let text = read_csv(&file)?;
            let rows = parse_csv(&text);
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Some(Commands::Schedule { file, quarter }) => {
            let text = read_csv(&file)?;
            let rows = parse_csv(&text);
            let schedule = fold_schedule(&rows, Some(quarter.resolve().as_str()));
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        Some(Commands::Fetch { quarter }) => {
            let cfg = CoreConfig::from_env()?;
            let sheet = cfg.schedule_sheet().to_string();
            let ingestor = ScheduleIngestor::new(SheetsCsvSource::new(cfg)?, sheet);

            let quarter = quarter.resolve();
            let outcome = ingestor.ingest(&quarter).await;
            if let Err(e) = &outcome {
                eprintln!("Error fetching schedule: {}", e);
            }
            let res = ScheduleRes::from_outcome(quarter, outcome);
            println!("{}", serde_json::to_string_pretty(&res)?);
        }
        Some(Commands::Quarter) => {
            println!("{}", current_quarter_label());
        }
        None => {
            println!("Use 'daycare --help' for commands");
        }
    }

    Ok(())
}

fn read_csv(file: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}
