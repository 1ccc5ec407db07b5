mod commands;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use teamcal_core::config::TeamcalConfig;
use teamcal_core::export::ExportFormat;
use teamcal_core::occurrence::parse_date;
use teamcal_core::store::Command;
use teamcal_core::view::CalendarView;
use tracing_subscriber::EnvFilter;

use crate::commands::shell::Shell;
use crate::session::Seed;

#[derive(Parser)]
#[command(name = "teamcal")]
#[command(about = "Team calendar in the terminal: views, members, documents and export")]
struct Cli {
    /// Seed events from a JSON export
    #[arg(long, global = true, value_name = "FILE")]
    events: Option<PathBuf>,

    /// Seed the demo schedule
    #[arg(long, global = true)]
    sample: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dashboard summary and today's events
    Home {
        /// Treat this date as today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Show a month, week or day
    View {
        layout: Option<CalendarView>,

        /// Date to show (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Only events in this category (repeatable)
        #[arg(short, long = "category", value_name = "ID")]
        categories: Vec<String>,
    },
    /// List events
    Events {
        /// Only events in this category (repeatable)
        #[arg(short, long = "category", value_name = "ID")]
        categories: Vec<String>,
    },
    /// List team members
    Members {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List documents
    Documents {
        #[arg(short, long)]
        search: Option<String>,

        /// Only this type (PDF, DOCX, ... or "all")
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
    /// List event categories
    Categories,
    /// Write calendar.ics, calendar.csv or calendar.json
    Export {
        format: ExportFormat,

        /// Directory to write into (defaults to export_dir from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only events in this category (repeatable)
        #[arg(short, long = "category", value_name = "ID")]
        categories: Vec<String>,
    },
    /// Show config paths and effective settings
    Config,
    /// Interactive session (the default)
    Shell,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = TeamcalConfig::load().context("Failed to load config")?;
    let seed = Seed::resolve(cli.events, cli.sample, &config);
    let today = Local::now().date_naive();

    let mut store = session::open(&config, &seed)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Home { date } => commands::home::run(store.state(), date.unwrap_or(today)),
        Commands::View {
            layout,
            date,
            categories,
        } => {
            store.dispatch(Command::SetSelectedCategories(categories))?;
            let state = store.state();
            commands::view::run(
                layout.unwrap_or(state.current_view()),
                date.unwrap_or(today),
                today,
                &state.filtered_events(),
                state.categories(),
            )
        }
        Commands::Events { categories } => {
            store.dispatch(Command::SetSelectedCategories(categories))?;
            let state = store.state();
            commands::events::run(&state.filtered_events(), state.categories())
        }
        Commands::Members { search } => {
            commands::members::run(store.state().members(), search.as_deref())
        }
        Commands::Documents { search, kind } => commands::documents::run(
            store.state().documents(),
            search.as_deref(),
            kind.as_deref(),
        ),
        Commands::Categories => {
            let state = store.state();
            commands::categories::run(state.categories(), state.selected_categories())
        }
        Commands::Export {
            format,
            output,
            categories,
        } => {
            store.dispatch(Command::SetSelectedCategories(categories))?;
            let dir = output.unwrap_or_else(|| config.export_path());
            commands::export::run(&mut store, format, &dir)
        }
        Commands::Config => commands::config::run(&config),
        Commands::Shell => Shell::new(store, today, today, config.export_path()).run(),
    }
}
