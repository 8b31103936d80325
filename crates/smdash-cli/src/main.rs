mod filters;
mod render;
mod repl;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use smdash_analytics::DashboardSession;
use smdash_data::{CsvOptions, DatasetLoader};
use tracing_subscriber::EnvFilter;

use crate::filters::FilterArgs;
use crate::render::{Renderer, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Markdown,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "smdash")]
#[command(about = "Social media engagement analytics dashboard")]
struct Cli {
    /// Dataset to load. Defaults to `SMDASH_DATASET_PATH`.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(flatten)]
    filters: FilterArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Commands {
    /// KPI cards and all four views (default)
    Dashboard,
    /// KPI cards only
    Summary,
    /// Platform engagement comparison and best platform
    Engagement,
    /// Per content type averages
    Content,
    /// Campaign spend, revenue and ROI
    Campaigns,
    /// Engagement by posting hour and best time to post
    Timing,
    /// Distinct filter values present in the dataset
    Options,
    /// Interactive session that re-renders on every filter change
    Repl,
}

impl Commands {
    fn view(self) -> Option<View> {
        match self {
            Commands::Dashboard => Some(View::All),
            Commands::Summary => Some(View::Summary),
            Commands::Engagement => Some(View::Engagement),
            Commands::Content => Some(View::Content),
            Commands::Campaigns => Some(View::Campaigns),
            Commands::Timing => Some(View::Timing),
            Commands::Options | Commands::Repl => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = smdash_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(config = ?config, "configuration loaded");

    let path = cli.data.clone().unwrap_or_else(|| config.dataset_path.clone());
    let loader = DatasetLoader::new(
        path,
        CsvOptions {
            delimiter: config.csv_delimiter,
        },
    );
    let table = loader
        .load()
        .with_context(|| format!("could not load dataset {}", loader.path().display()))?;

    let mut session = DashboardSession::new(table);
    cli.filters.apply(&mut session)?;

    let renderer = Renderer::new(cli.format, &config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let command = cli.command.unwrap_or(Commands::Dashboard);
    match command {
        Commands::Options => write!(out, "{}", renderer.options(session.options())?)?,
        Commands::Repl => {
            let stdin = std::io::stdin();
            repl::run(&loader, &mut session, &renderer, stdin.lock(), &mut out)?;
        }
        other => {
            let view = other.view().unwrap_or(View::All);
            write!(out, "{}", renderer.render(&session.render(), view)?)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests;
