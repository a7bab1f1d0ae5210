//! The edit surface the prompt store drives.
//!
//! The store never talks to a concrete user interface. Everything it needs
//! from one is captured here: the editable title/content pair, the active
//! filter text, a list that is replaced wholesale on every render, and a
//! transient status line. The CLI implements this over an in-memory buffer;
//! tests use a recording fake.

use serde::Serialize;

/// One displayed row of the filtered prompt list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    /// Identifier of the prompt behind the row
    pub id: String,
    /// Row title
    pub title: String,
    /// Plain-text preview of the prompt content
    pub preview: String,
}

/// Presentation-layer collaborator for the prompt store.
pub trait EditSurface {
    /// Current text of the title field.
    fn title(&self) -> String;

    /// Current text of the content field (Markdown fragment).
    fn content(&self) -> String;

    /// Replaces the title field text.
    fn set_title(&mut self, title: &str);

    /// Replaces the content field text.
    fn set_content(&mut self, content: &str);

    /// Current search/filter text.
    fn filter(&self) -> String;

    /// Replaces the displayed list with `rows`. No incremental diffing.
    fn render_rows(&mut self, rows: &[ListRow]);

    /// Moves input focus to the title field.
    fn focus_title(&mut self);

    /// Shows a transient validation/status message to the user.
    fn notify(&mut self, message: &str);
}
