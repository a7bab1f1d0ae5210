use log::{debug, error, info, warn};

use crate::{
    generate_id, helper, Clipboard, EditSurface, KeyValueStore, ListRow, Prompt, SaveOutcome,
    NO_CONTENT, STORAGE_KEY, UNTITLED,
};

/// Maximum length of the plain-text preview shown in list rows
const PREVIEW_MAX_LEN: usize = 100;

/// Owns the prompt collection and selection state, mediates all reads and
/// writes to persistent storage, renders the filtered list, and executes the
/// user-triggered operations.
pub struct PromptStore {
    /// Key-value storage backend
    storage: Box<dyn KeyValueStore>,

    /// Key under which the collection snapshot is persisted
    storage_key: String,

    /// In-memory prompt collection, display order (newest first)
    prompts: Vec<Prompt>,

    /// Id of the prompt loaded into the edit surface, or None when
    /// composing a new prompt
    selected_id: Option<String>,
}

impl PromptStore {
    /// Creates a store over the given storage backend, using the default
    /// storage key. The collection starts empty; call [`load`](Self::load)
    /// to read the persisted snapshot.
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    /// Creates a store persisting under a custom storage key.
    pub fn with_key(storage: Box<dyn KeyValueStore>, storage_key: &str) -> Self {
        Self {
            storage,
            storage_key: storage_key.to_string(),
            prompts: Vec::new(),
            selected_id: None,
        }
    }

    /// Reads the persisted collection from storage.
    ///
    /// No stored data initializes an empty collection. A read or parse
    /// failure is caught and logged and leaves the collection empty.
    /// Records carrying a missing id are repaired in place with a fresh
    /// one. Selection is always cleared.
    pub fn load(&mut self) {
        self.selected_id = None;

        let raw = match self.storage.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored prompts under key {}", self.storage_key);
                self.prompts = Vec::new();
                return;
            }
            Err(e) => {
                error!("Error loading from storage: {}", e);
                self.prompts = Vec::new();
                return;
            }
        };

        match serde_json::from_str::<Vec<Prompt>>(&raw) {
            Ok(prompts) => {
                self.prompts = prompts;
                info!("Loaded {} prompts from storage", self.prompts.len());
            }
            Err(e) => {
                error!("Error parsing stored prompts: {}", e);
                self.prompts = Vec::new();
                return;
            }
        }

        // Repair records that arrived without a usable id
        for prompt in &mut self.prompts {
            if prompt.id.trim().is_empty() {
                prompt.id = generate_id();
                error!(
                    "Prompt with invalid id repaired, new id: {} (title: {:?})",
                    prompt.id, prompt.title
                );
            }
        }
    }

    /// Saves the surface's current title and content.
    ///
    /// Both fields are trimmed; an empty title or content whose plain-text
    /// rendering is empty aborts with a validation message and no mutation.
    /// With a selection active the selected prompt is updated in place,
    /// otherwise a new prompt is created, prepended, and selected. The
    /// filtered list is re-rendered and the full collection persisted.
    pub fn save(&mut self, surface: &mut dyn EditSurface) -> SaveOutcome {
        let title = surface.title().trim().to_string();
        let content = surface.content().trim().to_string();
        let has_content = !helper::plain_text(&content).is_empty();

        if title.is_empty() || !has_content {
            surface.notify("Both title and content are required.");
            return SaveOutcome::Rejected;
        }

        let outcome = if let Some(selected_id) = self.selected_id.clone() {
            if let Some(existing) = self.prompts.iter_mut().find(|p| p.id == selected_id) {
                // The placeholder fallbacks are unreachable after the
                // validation gate above, but kept to match save semantics
                existing.title = if title.is_empty() {
                    UNTITLED.to_string()
                } else {
                    title
                };
                existing.content = if content.is_empty() {
                    NO_CONTENT.to_string()
                } else {
                    content
                };
            } else {
                warn!("Selected prompt {} no longer in collection", selected_id);
            }
            SaveOutcome::Updated { id: selected_id }
        } else {
            let prompt = Prompt::new(title, content);
            let id = prompt.id.clone();
            debug!("Adding new prompt: {}", id);
            self.prompts.insert(0, prompt);
            self.selected_id = Some(id.clone());
            SaveOutcome::Created { id }
        };

        self.render_list(&surface.filter(), surface);
        self.persist();
        outcome
    }

    /// Clears selection and both input fields and focuses the title field.
    /// Touches neither the collection nor storage.
    pub fn new_prompt(&mut self, surface: &mut dyn EditSurface) {
        self.selected_id = None;
        surface.set_title("");
        surface.set_content("");
        surface.focus_title();
    }

    /// Removes the prompt with the given id (silently a no-op when absent),
    /// re-renders, persists, and clears the editing surface.
    pub fn remove_prompt(&mut self, id: &str, surface: &mut dyn EditSurface) {
        let before = self.prompts.len();
        self.prompts.retain(|p| p.id != id);
        if self.prompts.len() < before {
            info!("Removed prompt: {}", id);
        } else {
            debug!("Remove requested for unknown prompt: {}", id);
        }

        self.render_list(&surface.filter(), surface);
        self.persist();
        self.new_prompt(surface);
    }

    /// Selects the prompt with the given id and loads its title and content
    /// into the surface. An unknown id leaves selection and surface
    /// untouched.
    pub fn select_prompt(&mut self, id: &str, surface: &mut dyn EditSurface) {
        match self.prompts.iter().find(|p| p.id == id) {
            Some(prompt) => {
                self.selected_id = Some(prompt.id.clone());
                surface.set_title(&prompt.title);
                surface.set_content(&prompt.content);
            }
            None => {
                debug!("Select requested for unknown prompt: {}", id);
            }
        }
    }

    /// Recomputes and replaces the displayed list.
    ///
    /// Keeps prompts whose title contains `filter_text` case-insensitively
    /// (an empty filter matches everything), preserving collection order.
    pub fn render_list(&self, filter_text: &str, surface: &mut dyn EditSurface) {
        let needle = filter_text.to_lowercase();

        let rows: Vec<ListRow> = self
            .prompts
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .map(|p| {
                let preview = helper::preview(&p.content, PREVIEW_MAX_LEN);
                ListRow {
                    id: p.id.clone(),
                    title: if p.title.is_empty() {
                        UNTITLED.to_string()
                    } else {
                        p.title.clone()
                    },
                    preview: if preview.is_empty() {
                        NO_CONTENT.to_string()
                    } else {
                        preview
                    },
                }
            })
            .collect();

        surface.render_rows(&rows);
    }

    /// Copies the plain-text rendering of the surface's current content to
    /// the clipboard, reporting the outcome through a transient message.
    /// Without clipboard capability this logs and does nothing visible.
    pub fn copy_selected(
        &self,
        surface: &mut dyn EditSurface,
        clipboard: Option<&mut dyn Clipboard>,
    ) {
        let Some(clipboard) = clipboard else {
            debug!("No clipboard capability available, copy skipped");
            return;
        };

        let text = helper::plain_text(&surface.content());
        match clipboard.copy(&text) {
            Ok(()) => surface.notify("Copied to clipboard."),
            Err(e) => {
                error!("Clipboard copy failed: {}", e);
                surface.notify("Copy to clipboard failed.");
            }
        }
    }

    /// The current collection, display order.
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Id of the selected prompt, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Looks up a prompt by id.
    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    /// Writes the full collection snapshot to storage. A write failure is
    /// logged and the in-memory state kept; it diverges from the persisted
    /// state until a later write succeeds.
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.prompts) {
            Ok(json) => json,
            Err(e) => {
                error!("Error serializing prompts: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.storage_key, &json) {
            error!("Error saving to storage: {}", e);
        }
    }
}
