//! Component state for the catalog browser.

use common::model::record::Record;

use super::editor::Editor;

/// Main state container for the `CatalogComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct CatalogComponent {
    /// Server-authoritative snapshot of the collection, in backend order.
    /// Never patched locally: only replaced wholesale by a refresh.
    pub records: Vec<Record>,

    /// The single editor surface (inline create form or edit modal).
    pub editor: Editor,

    /// Record backing the open modal. The modal title, field placeholders
    /// and detail image read from it; the staged values live in `editor`.
    pub selected: Option<Record>,

    /// Whether the transient "record added" notice is showing.
    pub notice: bool,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl CatalogComponent {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            editor: Editor::new(),
            selected: None,
            notice: false,
            loaded: false,
        }
    }
}
