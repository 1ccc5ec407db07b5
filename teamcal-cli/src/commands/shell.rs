//! Interactive session over a single in-memory store.
//!
//! Each input line is parsed as a command with clap in multicall mode, so
//! `help` and per-command `--help` come for free. Errors are printed and the
//! session carries on; nothing survives after `quit`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use teamcal_core::draft::EventDraft;
use teamcal_core::export::ExportFormat;
use teamcal_core::occurrence::parse_date;
use teamcal_core::store::{Command, Store};
use teamcal_core::view::{CalendarView, Direction};

use super::{categories, documents, events, export, form, home, members, show, view};

#[derive(Parser)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Switch layout (month, week or day)
    View { layout: CalendarView },
    /// Move forward one month, week or day
    Next,
    /// Move back one month, week or day
    Prev,
    /// Jump back to today
    Today,
    /// Jump to a date (YYYY-MM-DD)
    Goto {
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
    /// List events matching the category filter
    Events,
    /// Show everything about one event
    Show { id: String },
    /// Create an event
    Add,
    /// Edit an event
    Edit { id: String },
    /// Delete an event
    Delete { id: String },
    /// Send email reminders for an event (simulated)
    Remind { id: String },
    /// Reschedule an event onto another date, keeping its times
    Move {
        id: String,
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
    /// Show only these categories (no ids clears the filter)
    Filter { ids: Vec<String> },
    /// Add or remove one category from the filter
    Toggle { id: String },
    /// List categories
    Categories,
    /// Create a category
    AddCategory,
    /// Edit a category
    EditCategory { id: String },
    /// Delete a category; its events stay, uncategorized
    DeleteCategory { id: String },
    /// List team members
    Members { search: Option<String> },
    /// Add a team member
    AddMember,
    /// Edit a team member
    EditMember { id: String },
    /// Remove a team member
    DeleteMember { id: String },
    /// List documents
    Documents {
        search: Option<String>,

        /// Only this type (PDF, DOCX, ...)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
    /// Export the filtered events (ics, csv or json)
    Export { format: ExportFormat },
    /// Dashboard summary
    Home,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    store: Store,
    /// Date the calendar layouts are centred on
    cursor: NaiveDate,
    today: NaiveDate,
    export_dir: PathBuf,
}

impl Shell {
    pub fn new(store: Store, cursor: NaiveDate, today: NaiveDate, export_dir: PathBuf) -> Self {
        Shell {
            store,
            cursor,
            today,
            export_dir,
        }
    }

    pub fn run(mut self) -> Result<()> {
        println!(
            "{}",
            "teamcal shell. Type `help` for commands, `quit` to leave.".dimmed()
        );
        self.show_calendar();

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("{} ", "teamcal>".bold());
            io::stdout().flush().context("Failed to flush stdout")?;

            line.clear();
            if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
                println!();
                return Ok(());
            }

            let command = match parse_line(&line) {
                Some(Ok(command)) => command,
                Some(Err(e)) => {
                    let _ = e.print();
                    continue;
                }
                None => continue,
            };

            match self.execute(command) {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => eprintln!("{} {:#}", "Error:".red(), e),
            }
        }
    }

    pub fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        tracing::debug!(?command, "shell command");

        match command {
            ShellCommand::View { layout } => {
                self.store.dispatch(Command::SetView(layout))?;
                self.show_calendar();
            }
            ShellCommand::Next => self.step(Direction::Next),
            ShellCommand::Prev => self.step(Direction::Previous),
            ShellCommand::Today => {
                self.cursor = self.today;
                self.show_calendar();
            }
            ShellCommand::Goto { date } => {
                self.cursor = date;
                self.show_calendar();
            }
            ShellCommand::Events => {
                let state = self.store.state();
                events::run(&state.filtered_events(), state.categories())?;
            }
            ShellCommand::Show { id } => {
                let state = self.store.state();
                let event = state
                    .event(&id)
                    .with_context(|| format!("No event with id '{}'", id))?;
                show::run(event, state.categories())?;
            }
            ShellCommand::Add => {
                let draft = EventDraft {
                    date: Some(self.cursor),
                    ..Default::default()
                };
                let event = form::event(draft, self.store.state().categories())?;
                self.store.dispatch(Command::AddEvent(event))?;
            }
            ShellCommand::Edit { id } => {
                let state = self.store.state();
                let existing = state
                    .event(&id)
                    .with_context(|| format!("No event with id '{}'", id))?;
                let event = form::event(EventDraft::from_event(existing), state.categories())?;
                self.store.dispatch(Command::UpdateEvent(event))?;
            }
            ShellCommand::Delete { id } => {
                self.store.dispatch(Command::DeleteEvent(id))?;
            }
            ShellCommand::Remind { id } => {
                let state = self.store.state();
                let event = state
                    .event(&id)
                    .with_context(|| format!("No event with id '{}'", id))?;
                let reminder = form::reminder(event, state.members())?;
                self.store.send_reminder(&reminder);
            }
            ShellCommand::Move { id, date } => {
                self.store.dispatch(Command::MoveEvent { id, date })?;
            }
            ShellCommand::Filter { ids } => {
                self.require_categories(&ids)?;
                self.store.dispatch(Command::SetSelectedCategories(ids))?;
                self.show_calendar();
            }
            ShellCommand::Toggle { id } => {
                self.require_categories(std::slice::from_ref(&id))?;
                self.store.dispatch(Command::ToggleCategory(id))?;
                self.show_calendar();
            }
            ShellCommand::Categories => {
                let state = self.store.state();
                categories::run(state.categories(), state.selected_categories())?;
            }
            ShellCommand::AddCategory => {
                let category = form::category(None)?;
                self.store.dispatch(Command::AddCategory(category))?;
            }
            ShellCommand::EditCategory { id } => {
                let existing = self
                    .store
                    .state()
                    .category(&id)
                    .with_context(|| format!("No category with id '{}'", id))?;
                let category = form::category(Some(existing))?;
                self.store.dispatch(Command::UpdateCategory(category))?;
            }
            ShellCommand::DeleteCategory { id } => {
                let state = self.store.state();
                let category = state
                    .category(&id)
                    .with_context(|| format!("No category with id '{}'", id))?;
                let in_use = state
                    .events()
                    .iter()
                    .filter(|e| e.category.as_deref() == Some(id.as_str()))
                    .count();

                let prompt = format!(
                    "Delete \"{}\"? {} event(s) will become uncategorized",
                    category.name, in_use
                );
                if Confirm::new().with_prompt(prompt).default(false).interact()? {
                    self.store.dispatch(Command::DeleteCategory(id))?;
                }
            }
            ShellCommand::Members { search } => {
                members::run(self.store.state().members(), search.as_deref())?;
            }
            ShellCommand::AddMember => {
                let member = form::member(None, self.today)?;
                self.store.dispatch(Command::AddMember(member))?;
            }
            ShellCommand::EditMember { id } => {
                let existing = self
                    .store
                    .state()
                    .member(&id)
                    .with_context(|| format!("No member with id '{}'", id))?;
                let member = form::member(Some(existing), self.today)?;
                self.store.dispatch(Command::UpdateMember(member))?;
            }
            ShellCommand::DeleteMember { id } => {
                self.store.dispatch(Command::DeleteMember(id))?;
            }
            ShellCommand::Documents { search, kind } => {
                documents::run(
                    self.store.state().documents(),
                    search.as_deref(),
                    kind.as_deref(),
                )?;
            }
            ShellCommand::Export { format } => {
                export::run(&mut self.store, format, &self.export_dir)?;
            }
            ShellCommand::Home => home::run(self.store.state(), self.today)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn step(&mut self, direction: Direction) {
        self.cursor = self.store.state().current_view().step(self.cursor, direction);
        self.show_calendar();
    }

    fn show_calendar(&self) {
        let state = self.store.state();
        let rendered = view::render(
            state.current_view(),
            self.cursor,
            self.today,
            &state.filtered_events().into_iter().cloned().collect::<Vec<_>>(),
            state.categories(),
        );
        println!("{}\n", rendered);
    }

    /// Unknown ids in a filter would silently hide every event.
    fn require_categories(&self, ids: &[String]) -> Result<()> {
        let state = self.store.state();
        for id in ids {
            if state.category(id).is_none() {
                let available: Vec<&str> =
                    state.categories().iter().map(|c| c.id.as_str()).collect();
                anyhow::bail!(
                    "Category '{}' not found. Available: {}",
                    id,
                    available.join(", ")
                );
            }
        }
        Ok(())
    }
}

/// `None` for blank lines.
fn parse_line(line: &str) -> Option<Result<ShellCommand, clap::Error>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    Some(ShellLine::try_parse_from(tokens).map(|parsed| parsed.command))
}
