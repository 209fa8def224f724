use crate::panel;
use crate::settings_panel;
use crate::terminal::TerminalHost;
use anyhow::{bail, Context};
use application::commands::{self, COMMANDS};
use application::events;
use application::host::Host;
use application::orchestrator::{CommandOrchestrator, CommandOutcome};
use application::result_display::ResultDisplay;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Select};
use domain::editor::MarkdownDocument;
use domain::error::HostError;
use domain::insertion::{Position, Selection};
use domain::mode::GenerationMode;
use domain::settings::Settings;
use infrastructure::config::{Config, SettingsStore};
use infrastructure::humanloop_client::HumanloopClient;
use shared::types::Result;
use shared::utils::{is_interactive, is_markdown_file};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "thought-partner")]
#[command(about = "Writing assistant: extend, summarise, critique and rework Markdown notes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Continue writing at the cursor
    #[command(name = "extend-text", alias = "extend")]
    Extend(GenerateArgs),
    /// Put a summary at the top of the note
    #[command(alias = "summarize")]
    Summarise(GenerateArgs),
    /// Critique the note without changing it
    Critique(GenerateArgs),
    /// Rewrite the note as fluid prose at the bottom
    #[command(name = "prose-ify", alias = "proseify")]
    Proseify(GenerateArgs),
    /// Suggest improvements without changing the note
    #[command(name = "suggestions", alias = "suggest")]
    Suggest(GenerateArgs),
    /// Open the results panel and work on a note interactively
    #[command(name = "open-view")]
    OpenView {
        file: PathBuf,
        /// Samples to request per generation
        #[arg(long, default_value_t = 1)]
        samples: u32,
    },
    /// Show or edit settings
    Settings {
        /// Print the current settings instead of editing them
        #[arg(long)]
        show: bool,
    },
    /// List the available commands and their hotkeys
    Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Markdown note to work on
    pub file: PathBuf,

    /// Cursor as LINE:COL, 1-based (default: end of the note)
    #[arg(long, value_parser = parse_position)]
    pub cursor: Option<Position>,

    /// Selection as LINE:COL-LINE:COL, 1-based, anchor first
    #[arg(long, value_parser = parse_selection, conflicts_with = "cursor")]
    pub select: Option<Selection>,

    /// Samples to request
    #[arg(long, default_value_t = 1)]
    pub samples: u32,

    /// Print the edited note instead of writing it back
    #[arg(long)]
    pub dry_run: bool,
}

/// Parses a 1-based `LINE:COL` into a 0-based position.
pub fn parse_position(raw: &str) -> std::result::Result<Position, String> {
    let (line, ch) = raw
        .trim()
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got `{raw}`"))?;
    let line: usize = line.parse().map_err(|_| format!("bad line in `{raw}`"))?;
    let ch: usize = ch.parse().map_err(|_| format!("bad column in `{raw}`"))?;
    if line == 0 || ch == 0 {
        return Err(format!("line and column start at 1, got `{raw}`"));
    }
    Ok(Position::new(line - 1, ch - 1))
}

pub fn parse_selection(raw: &str) -> std::result::Result<Selection, String> {
    let (anchor, head) = raw
        .split_once('-')
        .ok_or_else(|| format!("expected LINE:COL-LINE:COL, got `{raw}`"))?;
    Ok(Selection::new(parse_position(anchor)?, parse_position(head)?))
}

pub struct CliApp {
    config: Config,
    store: SettingsStore,
}

impl CliApp {
    pub fn new() -> Self {
        let config = Config::load();
        let store = SettingsStore::new(config.settings_path.clone());
        Self { config, store }
    }

    pub async fn run(&mut self, cli: Cli) -> Result<ExitCode> {
        match cli.command {
            Command::Extend(args) => self.handle_generation(GenerationMode::Extend, &args).await,
            Command::Summarise(args) => self.handle_generation(GenerationMode::Summarise, &args).await,
            Command::Critique(args) => self.handle_generation(GenerationMode::Critique, &args).await,
            Command::Proseify(args) => self.handle_generation(GenerationMode::Proseify, &args).await,
            Command::Suggest(args) => self.handle_generation(GenerationMode::Suggest, &args).await,
            Command::OpenView { file, samples } => self.handle_open_view(&file, samples).await,
            Command::Settings { show } => self.handle_settings(show),
            Command::Commands => {
                print_commands();
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    fn load_settings(&self) -> Result<Settings> {
        Ok(self.store.load()?)
    }

    fn client(&self, settings: &Settings) -> Result<HumanloopClient> {
        Ok(HumanloopClient::from_settings(&self.config, settings)?)
    }

    async fn handle_generation(&self, mode: GenerationMode, args: &GenerateArgs) -> Result<ExitCode> {
        debug!(command = commands::for_mode(mode).id, file = %args.file.display(), "running command");
        let Some(mut doc) = open_document(&args.file)? else {
            TerminalHost::new(false).notice(&HostError::NotMarkdown.to_string());
            return Ok(ExitCode::FAILURE);
        };
        if let Some(cursor) = args.cursor {
            doc.set_cursor(cursor);
        }
        if let Some(selection) = args.select {
            doc.set_selection(selection.anchor, selection.head);
        }

        let settings = self.load_settings()?;
        let client = self.client(&settings)?;
        let (tx, mut rx) = events::channel();
        let orchestrator = CommandOrchestrator::new(client, TerminalHost::new(false), settings, tx)
            .with_num_samples(args.samples);

        let outcome = orchestrator.run(mode, Some(&mut doc)).await;

        if let CommandOutcome::Inserted(_) = outcome {
            save_document(&args.file, &doc, args.dry_run)?;
        }

        let mut display = ResultDisplay::new();
        display.drain(&mut rx);
        if orchestrator.host().is_panel_open() {
            panel::render(&display);
            if is_interactive() {
                panel::interact(&mut display, orchestrator.api(), orchestrator.host()).await?;
            }
        }

        Ok(match outcome {
            CommandOutcome::Inserted(_) | CommandOutcome::Published => ExitCode::SUCCESS,
            CommandOutcome::Failed | CommandOutcome::NoEditor => ExitCode::FAILURE,
        })
    }

    async fn handle_open_view(&self, file: &Path, samples: u32) -> Result<ExitCode> {
        if !is_interactive() {
            bail!("open-view needs an interactive terminal");
        }
        let settings = self.load_settings()?;
        let client = self.client(&settings)?;
        let (tx, mut rx) = events::channel();
        let mut orchestrator = CommandOrchestrator::new(client, TerminalHost::new(true), settings, tx)
            .with_num_samples(samples);
        let mut display = ResultDisplay::new();
        let theme = ColorfulTheme::default();

        let mut menu: Vec<(String, MenuChoice)> = COMMANDS
            .iter()
            .filter_map(|c| {
                c.mode.map(|mode| {
                    let label = match c.hotkey {
                        Some(key) => format!("{} ({key})", c.name),
                        None => c.name.to_string(),
                    };
                    (label, MenuChoice::Generate(mode))
                })
            })
            .collect();
        menu.push(("Act on a result".to_string(), MenuChoice::Results));
        menu.push(("Settings".to_string(), MenuChoice::Settings));
        menu.push(("Close".to_string(), MenuChoice::Close));
        let labels: Vec<&str> = menu.iter().map(|(label, _)| label.as_str()).collect();

        panel::render(&display);
        loop {
            let picked = Select::with_theme(&theme)
                .with_prompt(format!("Thought Partner · {}", file.display()))
                .items(&labels)
                .default(0)
                .interact()?;

            match menu[picked].1 {
                MenuChoice::Generate(mode) => {
                    // Re-read so edits made outside the session are picked up.
                    let mut document = open_document(file)?;
                    let outcome = orchestrator.run(mode, document.as_mut()).await;
                    if let (CommandOutcome::Inserted(_), Some(doc)) = (&outcome, document.as_ref()) {
                        save_document(file, doc, false)?;
                    }
                    if display.drain(&mut rx) > 0 {
                        panel::render(&display);
                    }
                }
                MenuChoice::Results => {
                    panel::interact(&mut display, orchestrator.api(), orchestrator.host()).await?;
                }
                MenuChoice::Settings => {
                    let updated = settings_panel::edit_settings(&self.store, orchestrator.settings())?;
                    if updated.humanloop_api_key != orchestrator.settings().humanloop_api_key {
                        // The client is keyed at construction; keep the session
                        // simple and ask for a restart.
                        eprintln!("{}", "Humanloop key changed; reopen the view to use it.".yellow());
                    }
                    orchestrator.update_settings(updated);
                }
                MenuChoice::Close => break,
            }
        }
        orchestrator.host().close_panel();
        Ok(ExitCode::SUCCESS)
    }

    fn handle_settings(&self, show: bool) -> Result<ExitCode> {
        let current = self.load_settings()?;
        if show || !is_interactive() {
            settings_panel::print_settings(&self.store, &current);
            return Ok(ExitCode::SUCCESS);
        }
        let updated = settings_panel::edit_settings(&self.store, &current)?;
        if updated != current {
            println!("{}", format!("Saved {}", self.store.path().display()).green());
        }
        Ok(ExitCode::SUCCESS)
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
enum MenuChoice {
    Generate(GenerationMode),
    Results,
    Settings,
    Close,
}

/// Opens the note as the active editor. Anything that is not Markdown has no
/// editor, which the orchestrator reports.
fn open_document(path: &Path) -> Result<Option<MarkdownDocument>> {
    if !is_markdown_file(path) {
        debug!(path = %path.display(), "not a markdown file");
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read note at {}", path.display()))?;
    Ok(Some(MarkdownDocument::new(text)))
}

fn save_document(path: &Path, doc: &MarkdownDocument, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{}", doc.text());
        return Ok(());
    }
    std::fs::write(path, doc.text())
        .with_context(|| format!("Failed to write note at {}", path.display()))?;
    info!(path = %path.display(), "note updated");
    Ok(())
}

fn print_commands() {
    for command in COMMANDS.iter() {
        let hotkey = command.hotkey.unwrap_or("-");
        println!(
            "{} {:<28} {}",
            format!("{:<14}", command.id).green(),
            command.name,
            hotkey.dimmed()
        );
    }
    let menu: Vec<&str> = commands::editor_menu().filter_map(|c| c.menu_title).collect();
    println!("\n{} {}", "Editor menu:".bold(), menu.join(", "));
}
