//! Wayfarer CLI Application
//!
//! Command-line interface for the Wayfarer travel planning tool.

mod args;
mod cli;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use wayfarer_core::{JsonCatalog, PlannerBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog,
        no_color,
        command,
    } = Args::parse();

    let catalog = JsonCatalog::from_path(&catalog)
        .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;
    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_catalog(Arc::new(catalog))
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer);

    info!("Wayfarer started");

    match command {
        Commands::Generate(args) => cli.generate(args).await,
        Commands::List(args) => cli.list(args).await,
        Commands::Show(args) => cli.show(args).await,
        Commands::New(args) => cli.new_draft(args).await,
        Commands::AddStop(args) => cli.add_stop(args).await,
        Commands::Save(args) => cli.save(args).await,
        Commands::Commit(args) => cli.commit(args).await,
        Commands::Activate(args) => cli.activate(args).await,
        Commands::Checkin(args) => cli.checkin(args).await,
        Commands::Complete(args) => cli.complete(args).await,
        Commands::Delete(args) => cli.delete(args).await,
    }
}
