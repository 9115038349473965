//! Editor state shared by the create form and the edit modal.
//!
//! There is a single draft for the whole page: opening one surface discards
//! whatever the other had staged, which is what serializes concurrent edits
//! on the client. The draft keeps `price` raw as typed; only the update path
//! parses it, because on create the backend is the numeric authority.

use common::model::record::Record;
use common::requests::{CreateRecordRequest, UpdateRecordRequest};

/// Which surface currently owns the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Closed,
    Creating,
    Editing(i64),
}

/// One editable field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Price,
    ImageUrl,
}

/// Staged edits for a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

/// The single editor surface: mode, staged fields, and the error shown next
/// to the active form. Field-level validity (required name/price, numeric
/// price, URL-shaped image) is enforced by the inputs themselves, so no
/// request is ever sent for a draft the form knows is invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    pub mode: EditorMode,
    pub draft: Draft,
    pub error: Option<String>,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Closed,
            draft: Draft::default(),
            error: None,
        }
    }

    /// Opens an empty draft for a new record.
    pub fn start_create(&mut self) {
        self.mode = EditorMode::Creating;
        self.draft = Draft::default();
        self.error = None;
    }

    /// Opens a draft pre-filled from an existing record.
    pub fn start_edit(&mut self, record: &Record) {
        self.mode = EditorMode::Editing(record.id);
        self.draft = Draft {
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price.to_string(),
            image_url: record.image_url.clone().unwrap_or_default(),
        };
        self.error = None;
    }

    /// Updates one staged field.
    pub fn stage(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.draft.name = value,
            Field::Description => self.draft.description = value,
            Field::Price => self.draft.price = value,
            Field::ImageUrl => self.draft.image_url = value,
        }
    }

    /// Discards the draft and closes whichever surface had it open.
    pub fn close(&mut self) {
        self.mode = EditorMode::Closed;
        self.draft = Draft::default();
        self.error = None;
    }

    /// Create payload: price goes out exactly as staged.
    pub fn create_payload(&self) -> CreateRecordRequest {
        CreateRecordRequest {
            name: self.draft.name.clone(),
            description: self.draft.description.clone(),
            price: self.draft.price.clone(),
            image_url: self.draft.image_url.clone(),
        }
    }

    /// Update payload: the staged price must parse as a number before
    /// anything is sent.
    pub fn update_payload(&self) -> Result<UpdateRecordRequest, String> {
        let price: f64 = self
            .draft
            .price
            .trim()
            .parse()
            .map_err(|_| format!("invalid price: {}", self.draft.price))?;
        Ok(UpdateRecordRequest {
            name: self.draft.name.clone(),
            description: self.draft.description.clone(),
            price,
            image_url: self.draft.image_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            id: 7,
            name: "Dune".to_string(),
            description: "Paul Atreides on Arrakis".to_string(),
            price: 20.0,
            created_at: "2024-05-01T12:30:00Z".to_string(),
            image_url: Some("https://covers.example/dune.jpg".to_string()),
        }
    }

    #[test]
    fn start_create_opens_an_empty_draft() {
        let mut editor = Editor::new();
        editor.start_create();

        assert_eq!(editor.mode, EditorMode::Creating);
        assert_eq!(editor.draft, Draft::default());
        assert_eq!(editor.error, None);
    }

    #[test]
    fn start_edit_prefills_every_field_and_records_the_target() {
        let mut editor = Editor::new();
        editor.start_edit(&sample_record());

        assert_eq!(editor.mode, EditorMode::Editing(7));
        assert_eq!(editor.draft.name, "Dune");
        assert_eq!(editor.draft.description, "Paul Atreides on Arrakis");
        assert_eq!(editor.draft.price, "20");
        assert_eq!(editor.draft.image_url, "https://covers.example/dune.jpg");
    }

    #[test]
    fn staging_changes_only_the_named_field() {
        let mut editor = Editor::new();
        editor.start_edit(&sample_record());
        editor.stage(Field::Price, "25.50".to_string());

        assert_eq!(editor.draft.price, "25.50");
        assert_eq!(editor.draft.name, "Dune");
        assert_eq!(editor.draft.description, "Paul Atreides on Arrakis");
    }

    #[test]
    fn close_resets_mode_and_draft() {
        let mut editor = Editor::new();
        editor.start_edit(&sample_record());
        editor.stage(Field::Name, "Dune Messiah".to_string());
        editor.close();

        assert_eq!(editor.mode, EditorMode::Closed);
        assert_eq!(editor.draft, Draft::default());
    }

    #[test]
    fn create_payload_keeps_the_price_raw() {
        let mut editor = Editor::new();
        editor.start_create();
        editor.stage(Field::Name, "Dune".to_string());
        editor.stage(Field::Price, "45".to_string());

        let payload = editor.create_payload();
        assert_eq!(payload.name, "Dune");
        assert_eq!(payload.price, "45");
        assert_eq!(payload.description, "");
        assert_eq!(payload.image_url, "");
    }

    #[test]
    fn update_payload_parses_the_staged_price() {
        let mut editor = Editor::new();
        editor.start_edit(&sample_record());
        editor.stage(Field::Price, "25.50".to_string());

        let payload = editor.update_payload().unwrap();
        assert_eq!(payload.price, 25.5);
        assert_eq!(payload.name, "Dune");
        assert_eq!(payload.description, "Paul Atreides on Arrakis");
        assert_eq!(payload.image_url, "https://covers.example/dune.jpg");
    }

    #[test]
    fn update_payload_rejects_an_unparseable_price() {
        let mut editor = Editor::new();
        editor.start_edit(&sample_record());
        editor.stage(Field::Price, "a lot".to_string());

        let err = editor.update_payload().unwrap_err();
        assert!(err.contains("a lot"));
    }

    #[test]
    fn building_a_payload_leaves_the_draft_intact() {
        let mut editor = Editor::new();
        editor.start_edit(&sample_record());
        editor.stage(Field::Price, "25.50".to_string());

        let before = editor.clone();
        let _ = editor.update_payload();
        let _ = editor.create_payload();
        assert_eq!(editor, before);
    }
}
