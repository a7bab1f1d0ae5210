//! CLI application for the promptstore library
//!
//! This module handles the command-line interface for interacting with the
//! prompt store. The terminal plays the role of the edit surface: command
//! arguments land in an in-memory title/content buffer, list renders are
//! printed as styled rows, and transient messages go to stdout.
use std::{fs::read_to_string, path::PathBuf};

use log::{debug, info};
use terminal_size::{terminal_size, Width};

use crate::{
    Clipboard, Commands, Config, EditSurface, FileKeyValueStore, ListRow, PromptError,
    PromptStore, Result, SaveOutcome,
};

/// Edit surface backed by an in-memory buffer and the terminal.
#[derive(Default)]
pub struct ConsoleSurface {
    title: String,
    content: String,
    filter: String,
    rows: Vec<ListRow>,
}

impl ConsoleSurface {
    /// Sets the filter text subsequent renders will use.
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    /// The rows from the most recent list render.
    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }
}

impl EditSurface for ConsoleSurface {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn content(&self) -> String {
        self.content.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    fn filter(&self) -> String {
        self.filter.clone()
    }

    fn render_rows(&mut self, rows: &[ListRow]) {
        self.rows = rows.to_vec();
    }

    fn focus_title(&mut self) {
        // A terminal has no title field to focus
        debug!("Focus moved to title field");
    }

    fn notify(&mut self, message: &str) {
        println!("{}", console::style(message).yellow());
    }
}

/// CLI Application handler - processes CLI commands and interfaces with
/// the prompt store
pub struct App {
    /// The prompt store core
    store: PromptStore,

    /// Terminal-backed edit surface
    surface: ConsoleSurface,

    /// Application configuration
    config: Config,
}

impl App {
    /// Creates the application: opens the storage backend under the
    /// configured data directory and loads the persisted collection.
    pub fn new(config: Config) -> Result<Self> {
        let storage = FileKeyValueStore::open(&config.data_dir)?;
        let mut store = PromptStore::with_key(Box::new(storage), &config.storage_key);
        store.load();
        info!("Loaded {} prompts", store.prompts().len());

        Ok(Self {
            store,
            surface: ConsoleSurface::default(),
            config,
        })
    }

    /// Run the CLI application with the given command
    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Add {
                title,
                content,
                file,
            } => self.handle_add(title, content, file)?,

            Commands::List { filter, json } => self.handle_list(&filter, json)?,

            Commands::Search { query, json } => self.handle_list(&query, json)?,

            Commands::Show { id, json } => self.handle_show(&id, json)?,

            Commands::Edit {
                id,
                title,
                content,
                file,
            } => self.handle_edit(&id, title, content, file)?,

            Commands::Copy { id } => self.handle_copy(&id)?,

            Commands::Remove { id } => self.handle_remove(&id)?,
        }

        Ok(())
    }

    fn handle_add(
        &mut self,
        title: String,
        content: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<()> {
        let content = match (content, file) {
            (Some(c), _) => c,
            (None, Some(path)) => read_to_string(&path).map_err(PromptError::Io)?,
            (None, None) => {
                return Err(PromptError::Validation {
                    message: "Provide the content with --content or --file".to_string(),
                })
            }
        };

        // Compose-new: no selection, fresh buffer
        self.store.new_prompt(&mut self.surface);
        self.surface.set_title(&title);
        self.surface.set_content(&content);

        match self.store.save(&mut self.surface) {
            SaveOutcome::Created { id } => {
                println!(
                    "Created prompt {} ({})",
                    console::style(&title).green(),
                    console::style(&id).dim()
                );
                Ok(())
            }
            SaveOutcome::Updated { .. } => unreachable!("add never carries a selection"),
            SaveOutcome::Rejected => Err(PromptError::Validation {
                message: "Prompt was not saved".to_string(),
            }),
        }
    }

    fn handle_list(&mut self, filter: &str, json: bool) -> Result<()> {
        self.surface.set_filter(filter);
        self.store.render_list(filter, &mut self.surface);

        if json {
            println!("{}", serde_json::to_string_pretty(self.surface.rows())?);
            return Ok(());
        }

        if self.surface.rows().is_empty() {
            if filter.is_empty() {
                println!("No prompts saved yet.");
            } else {
                println!("No prompts found matching \"{}\"", filter);
            }
            return Ok(());
        }

        let preview_width = preview_columns();
        for row in self.surface.rows() {
            let preview = if row.preview.chars().count() > preview_width {
                let cut: String = row.preview.chars().take(preview_width).collect();
                format!("{}...", cut)
            } else {
                row.preview.clone()
            };

            println!(
                "{}  {}",
                console::style(&row.id).dim(),
                console::style(&row.title).bold().cyan()
            );
            println!("    {}", console::style(preview).dim());
        }
        println!("\n{} prompt(s)", self.surface.rows().len());

        Ok(())
    }

    fn handle_show(&mut self, id: &str, json: bool) -> Result<()> {
        let prompt = self
            .store
            .get(id)
            .ok_or_else(|| PromptError::PromptNotFound { id: id.to_string() })?
            .clone();

        if json {
            println!("{}", serde_json::to_string_pretty(&prompt)?);
            return Ok(());
        }

        println!("ID:    {}", console::style(&prompt.id).dim());
        println!("Title: {}", console::style(&prompt.title).bold().cyan());
        println!("\n{}", prompt.content);

        Ok(())
    }

    fn handle_edit(
        &mut self,
        id: &str,
        title: Option<String>,
        content: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<()> {
        if content.is_some() && file.is_some() {
            return Err(PromptError::ConfigError {
                message: "Cannot specify both --content and --file options".to_string(),
            });
        }

        // Load the prompt into the edit surface; an unknown id leaves the
        // selection unset
        self.store.select_prompt(id, &mut self.surface);
        if self.store.selected_id() != Some(id) {
            return Err(PromptError::PromptNotFound { id: id.to_string() });
        }

        if let Some(new_title) = title {
            self.surface.set_title(&new_title);
        }
        if let Some(new_content) = content {
            self.surface.set_content(&new_content);
        } else if let Some(path) = file {
            let from_file = read_to_string(&path).map_err(PromptError::Io)?;
            self.surface.set_content(&from_file);
        }

        match self.store.save(&mut self.surface) {
            SaveOutcome::Updated { id } => {
                println!("Prompt {} updated successfully", id);
                Ok(())
            }
            SaveOutcome::Created { .. } => unreachable!("edit always carries a selection"),
            SaveOutcome::Rejected => Err(PromptError::Validation {
                message: "Prompt was not updated".to_string(),
            }),
        }
    }

    fn handle_copy(&mut self, id: &str) -> Result<()> {
        self.store.select_prompt(id, &mut self.surface);
        if self.store.selected_id() != Some(id) {
            return Err(PromptError::PromptNotFound { id: id.to_string() });
        }

        let mut clipboard = self.config.clipboard()?;
        self.store.copy_selected(
            &mut self.surface,
            clipboard.as_mut().map(|c| c as &mut dyn Clipboard),
        );

        Ok(())
    }

    fn handle_remove(&mut self, id: &str) -> Result<()> {
        let prompt = self
            .store
            .get(id)
            .ok_or_else(|| PromptError::PromptNotFound { id: id.to_string() })?;
        let title = prompt.title.clone();

        self.store.remove_prompt(id, &mut self.surface);
        println!("Prompt '{}' ({}) has been removed.", title, id);

        Ok(())
    }
}

/// Columns available for a list preview, derived from the terminal width.
fn preview_columns() -> usize {
    const ID_GUTTER: usize = 8;

    match terminal_size() {
        Some((Width(w), _)) if (w as usize) > ID_GUTTER + 20 => w as usize - ID_GUTTER,
        _ => 72,
    }
}
